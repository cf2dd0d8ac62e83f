use serde::Serialize;

use super::model::{AnimationOptions, RevealConfig, Rotate, ViewOffset, DEFAULT_CONTAINER};

/// Insets that made it into the client config. Zero or unset insets are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectiveViewOffset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
}

impl From<&ViewOffset> for EffectiveViewOffset {
    fn from(offset: &ViewOffset) -> Self {
        let keep = |inset: Option<i32>| inset.filter(|v| *v != 0);
        Self {
            top: keep(offset.top),
            right: keep(offset.right),
            bottom: keep(offset.bottom),
            left: keep(offset.left),
        }
    }
}

/// Options object handed to the reveal library for one selector.
///
/// Field names and value shapes follow the library's public API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveOptions {
    pub distance: String,
    pub delay: u32,
    pub duration: u32,
    pub interval: u32,
    pub opacity: f64,
    pub easing: &'static str,
    pub origin: &'static str,
    pub scale: f64,
    pub rotate: Rotate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    pub cleanup: bool,
    pub reset: bool,
    pub desktop: bool,
    pub mobile: bool,
    pub use_delay: &'static str,
    pub view_factor: f64,
    pub view_offset: EffectiveViewOffset,
}

impl EffectiveOptions {
    pub fn build(animation: &AnimationOptions, config: &RevealConfig) -> Self {
        let container = config.container.trim();
        let container = (!container.is_empty() && container != DEFAULT_CONTAINER)
            .then(|| container.to_string());

        Self {
            distance: format!("{}px", animation.distance),
            delay: animation.delay,
            duration: animation.duration,
            interval: animation.interval,
            opacity: animation.opacity,
            easing: animation.easing.css_value(),
            origin: animation.origin.as_str(),
            scale: animation.scale,
            rotate: animation.rotate,
            container,
            cleanup: config.cleanup,
            reset: config.reset,
            desktop: config.desktop,
            mobile: config.mobile,
            use_delay: config.use_delay.as_str(),
            view_factor: config.view_factor,
            view_offset: EffectiveViewOffset::from(&config.view_offset),
        }
    }
}
