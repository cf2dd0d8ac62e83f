pub mod delete_target;
pub mod duplicate_target;
pub mod error;
pub mod filter_targets;
pub mod list_targets;
pub mod load_target_form;
pub mod submit_target_form;
mod validation;

pub use delete_target::{DeleteConfirmation, DeleteTarget};
pub use duplicate_target::{DuplicateForm, DuplicateTarget};
pub use error::TargetUseCaseError;
pub use filter_targets::FilterTargets;
pub use list_targets::{ListParams, ListTargets, TargetListView, TargetRow};
pub use load_target_form::{LoadTargetForm, TargetForm};
pub use submit_target_form::{SaveAction, SubmitTargetForm};
