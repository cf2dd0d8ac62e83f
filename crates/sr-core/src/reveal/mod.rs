//! Client bootstrap payload and the per-node attach guard.

pub mod client_settings;
pub mod once;

pub use client_settings::{build_elements, ClientSettings, PreviewSource, RevealElement, PREVIEW_SELECTOR};
pub use once::OnceRegistry;

/// Behaviour name the attach guard is keyed under.
pub const ONCE_KEY: &str = "scrollreveal";
