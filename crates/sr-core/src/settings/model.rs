use serde::{Deserialize, Serialize};

use crate::options::{AnimationOptions, RevealConfig};

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Where the reveal library script is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMethod {
    Local,
    Cdn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Attach the library and bootstrap on every visible page.
    pub load: bool,
    pub debug: bool,
    /// Hide the "local library missing" warning on the settings form.
    pub hide_warning: bool,
    pub method: LoadMethod,
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMode {
    /// 除列出的页面外全部加载
    AllExcept,
    /// 仅在列出的页面加载
    OnlyListed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilitySettings {
    pub mode: VisibilityMode,
    /// Path patterns, `*` wildcard, `<front>` for the front page.
    #[serde(default)]
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Name of the secret holding the widget key, not the key itself.
    pub widget_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub visibility: VisibilitySettings,

    /// Global animation defaults applied under per-target overrides.
    #[serde(default)]
    pub options: AnimationOptions,

    #[serde(default)]
    pub configs: RevealConfig,

    #[serde(default)]
    pub widget: WidgetSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
