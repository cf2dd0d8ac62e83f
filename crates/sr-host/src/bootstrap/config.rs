//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into the AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑** (see `paths.rs`)
//!
//! > **Pure data loading only. Accept whatever is in the file.**
//! > **仅纯数据加载。接受文件中的任何内容。**

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Host configuration as written in the TOML file.
///
/// Missing keys are empty values; empty paths are filled in later by
/// [`AppPaths`](super::AppPaths).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSection,
    pub library: LibrarySection,
    pub site: SiteSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub database_path: PathBuf,
    pub settings_path: PathBuf,
    pub secrets_path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LibrarySection {
    /// Directory the reveal library is unpacked into.
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Internal path of the front page, matched by `<front>`.
    pub front_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub dir: PathBuf,
    pub file_enabled: bool,
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

/// Loads `config_path` when given, otherwise the system config file if one
/// exists, otherwise an empty config.
pub fn load_config_or_default(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = config_path {
        return load_config(path);
    }

    match system_config_path() {
        Some(path) if path.is_file() => load_config(&path),
        _ => Ok(AppConfig::default()),
    }
}

fn system_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrollreveal").join("config.toml"))
}
