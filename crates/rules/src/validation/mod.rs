//! Schedule validation with field-scoped errors and advisory warnings.
//!
//! Every rule reads the whole [`ScheduleConfig`], so cross-field conditions
//! ("start time is required when autostart is enabled") are plain function
//! arguments. Returns a [`ValidationResult`] with at most one error per field
//! (block save) and warnings derived from the template policy (advisory).

mod policy_checks;
mod schedule_checks;
mod ttl_checks;

pub mod fuzzy;

use std::collections::BTreeMap;

use autosched_core::TemplatePolicy;
use serde::{Deserialize, Serialize};

use crate::schedule::{ScheduleConfig, ScheduleField};

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// One error per field; a later rule on the same field replaces an earlier one.
    pub errors: BTreeMap<ScheduleField, ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub field: ScheduleField,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, field: ScheduleField, message: impl Into<String>) {
        self.valid = false;
        self.errors.insert(
            field,
            ValidationError {
                message: message.into(),
                suggestion: None,
            },
        );
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        field: ScheduleField,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.valid = false;
        self.errors.insert(
            field,
            ValidationError {
                message: message.into(),
                suggestion: Some(suggestion.into()),
            },
        );
    }

    pub(crate) fn warn(&mut self, field: ScheduleField, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            field,
            message: message.into(),
        });
    }

    /// Error message for `field`, if any.
    pub fn message(&self, field: ScheduleField) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    /// Field name → message, the shape a form renders inline.
    pub fn field_messages(&self) -> BTreeMap<&'static str, &str> {
        self.errors
            .iter()
            .map(|(field, e)| (field.as_str(), e.message.as_str()))
            .collect()
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a schedule against its own consistency rules.
///
/// The template policy only contributes warnings; editability is enforced by
/// whoever renders the form.
pub fn validate(cfg: &ScheduleConfig, policy: &TemplatePolicy) -> ValidationResult {
    let mut result = ValidationResult::new();
    schedule_checks::validate_days(cfg, &mut result);
    schedule_checks::validate_start_time(cfg, &mut result);
    schedule_checks::validate_timezone(cfg, &mut result);
    ttl_checks::validate_ttl(cfg, &mut result);
    policy_checks::check_policy(cfg, policy, &mut result);
    result
}

/// Parse raw YAML and validate.
pub fn validate_yaml(
    yaml: &str,
    policy: &TemplatePolicy,
) -> Result<ValidationResult, autosched_core::ScheduleError> {
    let cfg = ScheduleConfig::from_yaml(yaml)?;
    Ok(validate(&cfg, policy))
}
