//! Use case for loading the target editor form
//! 加载目标编辑表单

use std::sync::Arc;

use serde::Serialize;
use sr_core::ports::{SettingsPort, TargetRepositoryPort};
use sr_core::{AnimationOptions, TargetId};
use tracing::{info_span, Instrument};

use super::error::TargetUseCaseError;

/// Editable state of one target.
///
/// `options` always carries all nine fields: stored overrides where present,
/// global defaults elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetForm {
    pub id: TargetId,
    pub selector: String,
    pub label: String,
    pub comment: String,
    pub enabled: bool,
    pub options: AnimationOptions,
}

impl TargetForm {
    pub fn is_new(&self) -> bool {
        self.id.is_new()
    }
}

pub struct LoadTargetForm {
    repo: Arc<dyn TargetRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
}

impl LoadTargetForm {
    pub fn new(repo: Arc<dyn TargetRepositoryPort>, settings: Arc<dyn SettingsPort>) -> Self {
        Self { repo, settings }
    }

    pub async fn execute(&self, id: TargetId) -> Result<TargetForm, TargetUseCaseError> {
        let span = info_span!("usecase.load_target_form.execute", target_id = %id);

        async {
            let defaults = self.settings.load().await?.options;

            if id.is_new() {
                return Ok(TargetForm {
                    id,
                    selector: String::new(),
                    label: String::new(),
                    comment: String::new(),
                    enabled: true,
                    options: defaults,
                });
            }

            let record = self
                .repo
                .get_by_id(id)
                .await?
                .ok_or(TargetUseCaseError::NotFound(id))?;

            Ok(TargetForm {
                id,
                options: record.options.resolve(&defaults),
                selector: record.selector,
                label: record.label,
                comment: record.comment,
                enabled: record.enabled,
            })
        }
        .instrument(span)
        .await
    }
}
