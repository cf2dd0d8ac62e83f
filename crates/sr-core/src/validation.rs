//! Field-level rule violations shared by the target editor and settings form.

use serde::Serialize;

use crate::options::{AnimationOptions, OptionOverrides, RevealConfig};

/// A rule broken by one named form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn check_unit_range(out: &mut Vec<FieldViolation>, field: &'static str, value: Option<f64>) {
    if let Some(v) = value {
        if !(0.0..=1.0).contains(&v) {
            out.push(FieldViolation::new(field, format!("{field} must be between 0 and 1.")));
        }
    }
}

fn check_non_negative(out: &mut Vec<FieldViolation>, field: &'static str, value: Option<f64>) {
    if let Some(v) = value {
        if !v.is_finite() || v < 0.0 {
            out.push(FieldViolation::new(field, format!("{field} must be zero or greater.")));
        }
    }
}

fn check_finite(out: &mut Vec<FieldViolation>, field: &'static str, value: Option<f64>) {
    if let Some(v) = value {
        if !v.is_finite() {
            out.push(FieldViolation::new(field, format!("{field} must be a number.")));
        }
    }
}

impl OptionOverrides {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();
        check_finite(&mut out, "distance", self.distance);
        check_unit_range(&mut out, "opacity", self.opacity);
        check_non_negative(&mut out, "scale", self.scale);
        out
    }
}

impl AnimationOptions {
    pub fn violations(&self) -> Vec<FieldViolation> {
        OptionOverrides::from(self.clone()).violations()
    }
}

impl RevealConfig {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();
        check_unit_range(&mut out, "view_factor", Some(self.view_factor));
        out
    }
}
