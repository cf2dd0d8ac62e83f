pub mod defaults;
pub mod library;
pub mod model;
pub mod path;
pub mod version;
pub mod visibility;

pub use library::LibraryAsset;
pub use model::{
    LibrarySettings, LoadMethod, Settings, VisibilityMode, VisibilitySettings, WidgetSettings,
    CURRENT_SCHEMA_VERSION,
};
pub use path::SettingsPathError;
pub use version::SettingsVersion;
