use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::TargetId;
use crate::options::OptionOverrides;

/// Longest selector accepted by the editor form.
pub const SELECTOR_MAX_LEN: usize = 256;
/// Longest selector accepted by the duplicate form.
pub const DUPLICATE_SELECTOR_MAX_LEN: usize = 255;
pub const LABEL_MAX_LEN: usize = 64;

/// A CSS selector registered for scroll-triggered animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub selector: String,
    pub label: String,
    pub comment: String,
    pub enabled: bool,
    pub changed_at: DateTime<Utc>,
    pub options: OptionOverrides,
}

/// Stored values of a single target as returned by `get_by_id`.
///
/// Carries neither the id nor the timestamp; callers already hold the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub selector: String,
    pub label: String,
    pub comment: String,
    pub enabled: bool,
    pub options: OptionOverrides,
}

/// Upsert input. `id == TargetId::NEW` inserts a new row.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDraft {
    pub id: TargetId,
    pub selector: String,
    pub label: String,
    pub comment: String,
    pub enabled: bool,
    pub changed_at: DateTime<Utc>,
    pub options: OptionOverrides,
}

impl TargetDraft {
    pub fn is_new(&self) -> bool {
        self.id.is_new()
    }
}

impl From<Target> for TargetRecord {
    fn from(target: Target) -> Self {
        Self {
            selector: target.selector,
            label: target.label,
            comment: target.comment,
            enabled: target.enabled,
            options: target.options,
        }
    }
}
