pub mod error;
pub mod get_settings;
pub mod library_status;
pub mod update_settings;

pub use error::SettingsUseCaseError;
pub use get_settings::GetSettings;
pub use library_status::{CheckLibraryStatus, LibraryStatus};
pub use update_settings::UpdateSettings;
