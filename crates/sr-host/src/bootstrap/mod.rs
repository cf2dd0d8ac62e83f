pub mod config;
pub mod paths;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, AppConfig};
pub use paths::AppPaths;
pub use runtime::AppRuntime;
pub use wiring::{wire_dependencies, WiringError};
