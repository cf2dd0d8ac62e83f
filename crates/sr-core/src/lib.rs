//! # sr-core
//!
//! Core domain models and business rules for ScrollReveal targets and the chat widget.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod ids;
pub mod options;
pub mod ports;
pub mod reveal;
pub mod settings;
pub mod target;
pub mod validation;
pub mod widget;

// Re-export commonly used types at the crate root
pub use ids::TargetId;
pub use options::{AnimationOptions, Easing, OptionOverrides, Origin, RevealConfig};
pub use settings::model::Settings;
pub use target::{Target, TargetDraft, TargetRecord};
pub use validation::FieldViolation;
