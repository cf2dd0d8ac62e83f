//! Selector and label rules shared by the editor and duplicate forms.

use sr_core::ports::{TargetRepositoryError, TargetRepositoryPort};
use sr_core::target::LABEL_MAX_LEN;

use crate::form::FormErrors;

pub(crate) const MSG_SELECTOR_REQUIRED: &str = "Selector field is required.";
pub(crate) const MSG_SELECTOR_EXISTS: &str = "This selector already exists.";
pub(crate) const MSG_SELECTOR_ADDED: &str = "This selector is already added.";

/// What the submitted selector is compared against for uniqueness.
pub(crate) enum Uniqueness<'a> {
    /// Any existing row rejects the selector.
    New,
    /// The record's own stored selector is exempt.
    Existing { stored_selector: &'a str },
}

pub(crate) fn check_lengths(
    errors: &mut FormErrors,
    selector: &str,
    label: Option<&str>,
    selector_max: usize,
) {
    if selector.is_empty() {
        errors.add("selector", MSG_SELECTOR_REQUIRED);
    } else if selector.chars().count() > selector_max {
        errors.add(
            "selector",
            format!("Selector cannot be longer than {selector_max} characters."),
        );
    }

    if let Some(label) = label {
        if label.chars().count() > LABEL_MAX_LEN {
            errors.add(
                "label",
                format!("Label cannot be longer than {LABEL_MAX_LEN} characters."),
            );
        }
    }
}

pub(crate) async fn check_unique(
    repo: &dyn TargetRepositoryPort,
    errors: &mut FormErrors,
    selector: &str,
    uniqueness: Uniqueness<'_>,
) -> Result<(), TargetRepositoryError> {
    if selector.is_empty() {
        return Ok(());
    }

    match uniqueness {
        Uniqueness::New => {
            if repo.exists(selector).await? {
                errors.add("selector", MSG_SELECTOR_EXISTS);
            }
        }
        Uniqueness::Existing { stored_selector } => {
            if selector != stored_selector && repo.exists(selector).await? {
                errors.add("selector", MSG_SELECTOR_ADDED);
            }
        }
    }
    Ok(())
}
