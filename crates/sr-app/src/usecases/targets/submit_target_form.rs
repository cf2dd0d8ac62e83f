//! Use case for saving the target editor form
//! 保存目标编辑表单

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sr_core::ports::{ClockPort, DerivedCachePort, TargetRepositoryError, TargetRepositoryPort};
use sr_core::target::{effective_label, SELECTOR_MAX_LEN};
use sr_core::{OptionOverrides, TargetDraft};
use tracing::{info, info_span, warn, Instrument};

use super::error::TargetUseCaseError;
use super::load_target_form::TargetForm;
use super::validation::{check_lengths, check_unique, Uniqueness, MSG_SELECTOR_EXISTS};
use crate::form::{FormErrors, Notice, SubmitOutcome};
use crate::routes::Route;

/// Which submit button was used. Persistence is identical; only the
/// navigation afterwards differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveAction {
    Save,
    SaveAndReturnToList,
}

pub struct SubmitTargetForm {
    repo: Arc<dyn TargetRepositoryPort>,
    cache: Arc<dyn DerivedCachePort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitTargetForm {
    pub fn new(
        repo: Arc<dyn TargetRepositoryPort>,
        cache: Arc<dyn DerivedCachePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self { repo, cache, clock }
    }

    pub async fn execute(
        &self,
        form: TargetForm,
        action: SaveAction,
    ) -> Result<SubmitOutcome, TargetUseCaseError> {
        let span = info_span!(
            "usecase.submit_target_form.execute",
            target_id = %form.id,
            action = ?action,
        );

        async {
            let selector = form.selector.trim().to_string();
            let label = form.label.trim().to_string();

            let uniqueness_base = if form.is_new() {
                None
            } else {
                let stored = self
                    .repo
                    .get_by_id(form.id)
                    .await?
                    .ok_or(TargetUseCaseError::NotFound(form.id))?;
                Some(stored.selector)
            };

            let mut errors = FormErrors::new();
            check_lengths(&mut errors, &selector, Some(label.as_str()), SELECTOR_MAX_LEN);
            let uniqueness = match uniqueness_base.as_deref() {
                None => Uniqueness::New,
                Some(stored_selector) => Uniqueness::Existing { stored_selector },
            };
            check_unique(self.repo.as_ref(), &mut errors, &selector, uniqueness).await?;
            errors.extend(form.options.violations());

            if !errors.is_empty() {
                info!(errors = %errors, "Target form rejected");
                return Ok(SubmitOutcome::Invalid(errors));
            }

            let draft = TargetDraft {
                id: form.id,
                label: effective_label(&label, &selector),
                comment: form.comment.trim().to_string(),
                enabled: form.enabled,
                changed_at: self.clock.now_utc(),
                options: OptionOverrides::from(form.options),
                selector,
            };
            let selector = draft.selector.clone();

            let id = match self.repo.upsert(draft).await {
                Ok(id) => id,
                Err(TargetRepositoryError::DuplicateSelector(s)) => {
                    warn!(selector = %s, "Selector claimed concurrently");
                    let mut errors = FormErrors::new();
                    errors.add("selector", MSG_SELECTOR_EXISTS);
                    return Ok(SubmitOutcome::Invalid(errors));
                }
                Err(e) => return Err(e.into()),
            };

            self.cache.flush_derived().await;
            info!(target_id = %id, selector = %selector, "Target saved");

            let redirect = match action {
                SaveAction::Save => Route::Edit(id),
                SaveAction::SaveAndReturnToList => Route::list(),
            };

            Ok(SubmitOutcome::Saved {
                id,
                notice: Notice::status(format!("The target {selector} has been saved.")),
                redirect,
            })
        }
        .instrument(span)
        .await
    }
}
