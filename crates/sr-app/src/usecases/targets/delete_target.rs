//! Use case for the delete confirmation flow
//! 删除确认流程

use std::sync::Arc;

use serde::Serialize;
use sr_core::ports::{DerivedCachePort, TargetRepositoryPort};
use sr_core::{TargetId, TargetRecord};
use tracing::{info, info_span, Instrument};

use super::error::TargetUseCaseError;
use crate::form::{Completed, Notice};
use crate::routes::Route;

/// Confirmation page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteConfirmation {
    pub id: TargetId,
    pub selector: String,
    pub question: String,
    pub confirm_text: &'static str,
    pub cancel_route: Route,
}

pub struct DeleteTarget {
    repo: Arc<dyn TargetRepositoryPort>,
    cache: Arc<dyn DerivedCachePort>,
}

impl DeleteTarget {
    pub fn new(repo: Arc<dyn TargetRepositoryPort>, cache: Arc<dyn DerivedCachePort>) -> Self {
        Self { repo, cache }
    }

    async fn require(&self, id: TargetId) -> Result<TargetRecord, TargetUseCaseError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(TargetUseCaseError::NotFound(id))
    }

    /// Builds the confirmation step; a missing id fails before anything is shown.
    pub async fn prepare(&self, id: TargetId) -> Result<DeleteConfirmation, TargetUseCaseError> {
        let span = info_span!("usecase.delete_target.prepare", target_id = %id);

        async {
            let record = self.require(id).await?;
            Ok(DeleteConfirmation {
                id,
                question: format!(
                    "Are you sure you want to remove {} from ScrollReveal targets?",
                    record.selector
                ),
                selector: record.selector,
                confirm_text: "Delete",
                cancel_route: Route::list(),
            })
        }
        .instrument(span)
        .await
    }

    pub async fn confirm(&self, id: TargetId) -> Result<Completed, TargetUseCaseError> {
        let span = info_span!("usecase.delete_target.confirm", target_id = %id);

        async {
            let record = self.require(id).await?;

            self.repo.delete(id).await?;
            info!(target: "audit", selector = %record.selector, "Deleted {}", record.selector);
            self.cache.flush_derived().await;

            Ok(Completed {
                notice: Notice::status(format!(
                    "The ScrollReveal target {} was deleted.",
                    record.selector
                )),
                redirect: Route::list(),
            })
        }
        .instrument(span)
        .await
    }
}
