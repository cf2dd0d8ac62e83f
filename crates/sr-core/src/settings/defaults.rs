use super::model::*;
use crate::options::{
    AnimationOptions, Easing, Origin, RevealConfig, Rotate, UseDelay, ViewOffset,
    DEFAULT_CONTAINER,
};

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            distance: 0.0,
            delay: 0,
            duration: 600,
            interval: 0,
            opacity: 0.0,
            easing: Easing::CubicBezier,
            origin: Origin::Bottom,
            scale: 1.0,
            rotate: Rotate::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            cleanup: false,
            reset: false,
            desktop: true,
            mobile: true,
            use_delay: UseDelay::Always,
            view_factor: 0.0,
            view_offset: ViewOffset::default(),
        }
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            load: true,
            debug: false,
            hide_warning: false,
            method: LoadMethod::Local,
            minimized: true,
        }
    }
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            mode: VisibilityMode::AllExcept,
            pages: Vec::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            library: LibrarySettings::default(),
            visibility: VisibilitySettings::default(),
            options: AnimationOptions::default(),
            configs: RevealConfig::default(),
            widget: WidgetSettings::default(),
        }
    }
}
