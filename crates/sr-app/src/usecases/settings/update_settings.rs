//! Use case for updating ScrollReveal settings
//! 更新设置的用例

use std::sync::Arc;

use serde_json::Value;
use sr_core::ports::{DerivedCachePort, SettingsPort};
use sr_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};
use tracing::{info, info_span, Instrument};

use super::error::SettingsUseCaseError;
use crate::form::{FormErrors, Notice};

/// Validates and persists the settings document.
///
/// ## Behavior / 行为
/// - Loads current settings for comparison
/// - Validates ranges (opacity, scale, view factor) and the schema version
/// - Logs changed fields with old/new values
/// - Persists through the settings port and flushes derived caches
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
    cache: Arc<dyn DerivedCachePort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>, cache: Arc<dyn DerivedCachePort>) -> Self {
        Self { settings, cache }
    }

    pub async fn execute(&self, settings: Settings) -> Result<Notice, SettingsUseCaseError> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let mut errors = FormErrors::new();
            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                errors.add(
                    "schema_version",
                    format!(
                        "Invalid schema version: expected {}, got {}",
                        CURRENT_SCHEMA_VERSION, settings.schema_version
                    ),
                );
            }
            errors.extend(settings.options.violations());
            errors.extend(settings.configs.violations());
            if !errors.is_empty() {
                return Err(SettingsUseCaseError::Validation(errors));
            }

            let old_settings = self.settings.load().await?;
            let changes = SettingsDiff::diff(&old_settings, &settings)?;
            if !changes.is_empty() {
                info!(
                    changed_fields = %changes.to_log_string(),
                    "Updating settings"
                );
            } else {
                info!("Updating settings (no changes detected)");
            }

            self.settings.save(&settings).await?;
            self.cache.flush_derived().await;

            info!(changed = changes.len(), "Settings updated successfully");
            Ok(Notice::status("The configuration options have been saved."))
        }
        .instrument(span)
        .await
    }
}

/// Leaf-level difference between two settings documents.
struct SettingsDiff {
    changes: Vec<(String, Value, Value)>,
}

impl SettingsDiff {
    fn diff(old: &Settings, new: &Settings) -> anyhow::Result<Self> {
        let old = serde_json::to_value(old)?;
        let new = serde_json::to_value(new)?;
        let mut changes = Vec::new();
        collect_changes(String::new(), &old, &new, &mut changes);
        Ok(Self { changes })
    }

    fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn len(&self) -> usize {
        self.changes.len()
    }

    fn to_log_string(&self) -> String {
        if self.changes.is_empty() {
            return "(no changes)".to_string();
        }
        self.changes
            .iter()
            .map(|(path, old, new)| format!("{path}: {old} -> {new}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn collect_changes(prefix: String, old: &Value, new: &Value, out: &mut Vec<(String, Value, Value)>) {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, new_child) in b {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match a.get(key) {
                    Some(old_child) => collect_changes(path, old_child, new_child, out),
                    None => out.push((path, Value::Null, new_child.clone())),
                }
            }
        }
        _ if old != new => out.push((prefix, old.clone(), new.clone())),
        _ => {}
    }
}
