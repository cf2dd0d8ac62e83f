//! Form outcomes shared by the admin use cases.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use sr_core::{FieldViolation, TargetId};

use crate::routes::Route;

/// Validation messages keyed by form field.
///
/// 按字段收集的校验错误，永远不会越过表单抛出。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn extend(&mut self, violations: Vec<FieldViolation>) {
        for v in violations {
            self.add(v.field, v.message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Status,
    Warning,
    Error,
}

/// User-facing message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Status,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }
}

/// Result of submitting a target form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved {
        id: TargetId,
        notice: Notice,
        redirect: Route,
    },
    /// Nothing was written.
    Invalid(FormErrors),
}

/// A finished action with its notice and where to go next.
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub notice: Notice,
    pub redirect: Route,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_messages_per_field() {
        let mut errors = FormErrors::new();
        errors.add("selector", "Selector field is required.");
        errors.extend(vec![FieldViolation::new("opacity", "bad")]);

        assert!(errors.has("selector"));
        assert_eq!(errors.get("opacity"), ["bad".to_string()]);
        assert!(errors.get("label").is_empty());
        assert_eq!(
            errors.to_string(),
            "opacity: bad; selector: Selector field is required."
        );
    }
}
