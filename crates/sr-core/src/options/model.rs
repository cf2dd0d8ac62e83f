use serde::{Deserialize, Serialize};

/// Literal curve the `cubic-bezier` easing expands to on the client.
pub const CUBIC_BEZIER_CURVE: &str = "cubic-bezier(0.5, 0, 0, 1)";

/// Container value that means "use the default viewport".
pub const DEFAULT_CONTAINER: &str = "document.documentElement";

/// Named easing curves offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
    CubicBezier,
}

impl Easing {
    pub const ALL: [Easing; 6] = [
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Linear,
        Easing::CubicBezier,
    ];

    /// Stored name of the curve.
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Linear => "linear",
            Easing::CubicBezier => "cubic-bezier",
        }
    }

    /// CSS timing function handed to the animation library.
    pub fn css_value(&self) -> &'static str {
        match self {
            Easing::CubicBezier => CUBIC_BEZIER_CURVE,
            other => other.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value.trim())
    }
}

/// Direction elements come from when revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Top,
    Right,
    Bottom,
    Left,
}

impl Origin {
    pub const ALL: [Origin; 4] = [Origin::Top, Origin::Right, Origin::Bottom, Origin::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Top => "top",
            Origin::Right => "right",
            Origin::Bottom => "bottom",
            Origin::Left => "left",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == value.trim())
    }
}

/// When the configured delay applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseDelay {
    Always,
    Once,
    Onload,
}

impl UseDelay {
    pub fn as_str(&self) -> &'static str {
        match self {
            UseDelay::Always => "always",
            UseDelay::Once => "once",
            UseDelay::Onload => "onload",
        }
    }
}

/// Rotation in degrees applied before reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rotate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Per-axis rotation override; each axis falls back independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RotateOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
}

impl RotateOverride {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}

impl From<Rotate> for RotateOverride {
    fn from(rotate: Rotate) -> Self {
        Self {
            x: Some(rotate.x),
            y: Some(rotate.y),
            z: Some(rotate.z),
        }
    }
}

/// Fully resolved animation parameters.
///
/// This is the shape of the global defaults in the settings store and the
/// result of applying a target's overrides onto those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    /// Pixels.
    pub distance: f64,
    /// Milliseconds.
    pub delay: u32,
    /// Milliseconds.
    pub duration: u32,
    /// Milliseconds.
    pub interval: u32,
    pub opacity: f64,
    pub easing: Easing,
    pub origin: Origin,
    pub scale: f64,
    pub rotate: Rotate,
}

/// Per-target overrides of the global animation defaults.
///
/// Absent fields fall back to the settings store at read time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OptionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "RotateOverride::is_empty")]
    pub rotate: RotateOverride,
}

impl OptionOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies these overrides field by field onto `defaults`.
    pub fn resolve(&self, defaults: &AnimationOptions) -> AnimationOptions {
        AnimationOptions {
            distance: self.distance.unwrap_or(defaults.distance),
            delay: self.delay.unwrap_or(defaults.delay),
            duration: self.duration.unwrap_or(defaults.duration),
            interval: self.interval.unwrap_or(defaults.interval),
            opacity: self.opacity.unwrap_or(defaults.opacity),
            easing: self.easing.unwrap_or(defaults.easing),
            origin: self.origin.unwrap_or(defaults.origin),
            scale: self.scale.unwrap_or(defaults.scale),
            rotate: Rotate {
                x: self.rotate.x.unwrap_or(defaults.rotate.x),
                y: self.rotate.y.unwrap_or(defaults.rotate.y),
                z: self.rotate.z.unwrap_or(defaults.rotate.z),
            },
        }
    }
}

impl From<AnimationOptions> for OptionOverrides {
    fn from(options: AnimationOptions) -> Self {
        Self {
            distance: Some(options.distance),
            delay: Some(options.delay),
            duration: Some(options.duration),
            interval: Some(options.interval),
            opacity: Some(options.opacity),
            easing: Some(options.easing),
            origin: Some(options.origin),
            scale: Some(options.scale),
            rotate: options.rotate.into(),
        }
    }
}

/// Viewport insets; unset or zero insets are left out of the client config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOffset {
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
}

/// Global, target-independent engine behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    pub container: String,
    pub cleanup: bool,
    pub reset: bool,
    pub desktop: bool,
    pub mobile: bool,
    pub use_delay: UseDelay,
    pub view_factor: f64,
    #[serde(default)]
    pub view_offset: ViewOffset,
}
