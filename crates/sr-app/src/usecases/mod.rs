//! Business logic use cases
//!
//! Admin surface:
//!   ListTargets → LoadTargetForm → SubmitTargetForm
//!               → DeleteTarget / DuplicateTarget
//!   GetSettings → UpdateSettings
//!
//! Page render:
//!   BuildClientSettings → (browser) AttachReveal
//!   RenderWidgetBlock

pub mod client;
pub mod settings;
pub mod targets;
pub mod widget;
