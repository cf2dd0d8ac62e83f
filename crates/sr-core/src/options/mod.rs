//! Animation options: global defaults, per-target overrides and the merged
//! object the client library receives.

pub mod blob;
pub mod effective;
pub mod model;

pub use blob::OptionsBlobError;
pub use effective::{EffectiveOptions, EffectiveViewOffset};
pub use model::{
    AnimationOptions, Easing, OptionOverrides, Origin, RevealConfig, Rotate, RotateOverride,
    UseDelay, ViewOffset, CUBIC_BEZIER_CURVE, DEFAULT_CONTAINER,
};
