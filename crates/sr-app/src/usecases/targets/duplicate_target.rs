//! Use case for duplicating a target under a new selector
//! 复制目标

use std::sync::Arc;

use serde::Serialize;
use sr_core::ports::{ClockPort, DerivedCachePort, TargetRepositoryError, TargetRepositoryPort};
use sr_core::target::{derive_label, DUPLICATE_SELECTOR_MAX_LEN};
use sr_core::{TargetDraft, TargetId, TargetRecord};
use tracing::{info, info_span, Instrument};

use super::error::TargetUseCaseError;
use super::validation::{check_lengths, check_unique, Uniqueness, MSG_SELECTOR_EXISTS};
use crate::form::{FormErrors, Notice, SubmitOutcome};
use crate::routes::Route;

/// The duplicate form: source target plus an empty selector input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateForm {
    pub source_id: TargetId,
    pub source_selector: String,
}

pub struct DuplicateTarget {
    repo: Arc<dyn TargetRepositoryPort>,
    cache: Arc<dyn DerivedCachePort>,
    clock: Arc<dyn ClockPort>,
}

impl DuplicateTarget {
    pub fn new(
        repo: Arc<dyn TargetRepositoryPort>,
        cache: Arc<dyn DerivedCachePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self { repo, cache, clock }
    }

    async fn require(&self, id: TargetId) -> Result<TargetRecord, TargetUseCaseError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(TargetUseCaseError::NotFound(id))
    }

    pub async fn prepare(&self, id: TargetId) -> Result<DuplicateForm, TargetUseCaseError> {
        let record = self.require(id).await?;
        Ok(DuplicateForm {
            source_id: id,
            source_selector: record.selector,
        })
    }

    /// Copies comment and options of `source_id` into a new enabled row
    /// keyed by `selector`.
    pub async fn submit(
        &self,
        source_id: TargetId,
        selector: &str,
    ) -> Result<SubmitOutcome, TargetUseCaseError> {
        let span = info_span!("usecase.duplicate_target.execute", source_id = %source_id);

        async {
            let source = self.require(source_id).await?;
            let selector = selector.trim().to_string();

            let mut errors = FormErrors::new();
            check_lengths(&mut errors, &selector, None, DUPLICATE_SELECTOR_MAX_LEN);
            check_unique(self.repo.as_ref(), &mut errors, &selector, Uniqueness::New).await?;
            if !errors.is_empty() {
                info!(errors = %errors, "Duplicate form rejected");
                return Ok(SubmitOutcome::Invalid(errors));
            }

            let draft = TargetDraft {
                id: TargetId::NEW,
                label: derive_label(&selector),
                selector: selector.clone(),
                comment: source.comment,
                enabled: true,
                changed_at: self.clock.now_utc(),
                options: source.options,
            };

            let new_id = match self.repo.upsert(draft).await {
                Ok(id) => id,
                Err(TargetRepositoryError::DuplicateSelector(_)) => {
                    let mut errors = FormErrors::new();
                    errors.add("selector", MSG_SELECTOR_EXISTS);
                    return Ok(SubmitOutcome::Invalid(errors));
                }
                Err(e) => return Err(e.into()),
            };

            self.cache.flush_derived().await;
            info!(source_id = %source_id, new_id = %new_id, selector = %selector, "Target duplicated");

            Ok(SubmitOutcome::Saved {
                id: new_id,
                notice: Notice::status(format!("The target {selector} has been duplicated.")),
                redirect: Route::Edit(new_id),
            })
        }
        .instrument(span)
        .await
    }
}
