//! Resolved filesystem locations.
//!
//! Empty config paths fall back to per-user directories from `dirs`.

use std::path::PathBuf;

use super::config::AppConfig;

const APP_DIR: &str = "scrollreveal";

/// Front page path used when the config names none.
pub const DEFAULT_FRONT_PATH: &str = "/node";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub database_path: PathBuf,
    pub settings_path: PathBuf,
    pub secrets_path: PathBuf,
    pub library_root: PathBuf,
    pub logs_dir: PathBuf,
    pub front_path: String,
}

impl AppPaths {
    pub fn resolve(config: &AppConfig) -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR);
        Self::resolve_in(config, data_dir)
    }

    /// Fills empty config paths with locations under `data_dir`.
    pub fn resolve_in(config: &AppConfig, data_dir: PathBuf) -> Self {
        let or_default = |configured: &PathBuf, fallback: PathBuf| {
            if configured.as_os_str().is_empty() {
                fallback
            } else {
                configured.clone()
            }
        };

        Self {
            database_path: or_default(&config.storage.database_path, data_dir.join("reveal.db")),
            settings_path: or_default(&config.storage.settings_path, data_dir.join("settings.json")),
            secrets_path: or_default(&config.storage.secrets_path, data_dir.join("secrets.json")),
            library_root: or_default(
                &config.library.root,
                data_dir.join("libraries").join("scrollreveal"),
            ),
            logs_dir: or_default(&config.logging.dir, data_dir.join("logs")),
            front_path: if config.site.front_path.trim().is_empty() {
                DEFAULT_FRONT_PATH.to_string()
            } else {
                config.site.front_path.trim().to_string()
            },
        }
    }
}
