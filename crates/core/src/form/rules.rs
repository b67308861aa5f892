//! Validation rule and violation types.

use serde::Serialize;

use super::config::FormFieldComponent;

/// A single validation constraint, interpreted by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    /// The field must carry a non-empty value.
    Required,
    /// Text must not exceed this many characters.
    MaxLength(usize),
    /// A numeric value must lie within `[min, max]` inclusive.
    Range { min: Option<f64>, max: Option<f64> },
    /// The value must parse as an absolute URL.
    UrlFormat,
}

/// One schema field with its compiled rule list.
#[derive(Debug, Clone)]
pub struct CompiledField {
    pub field: String,
    pub label: String,
    pub component: FormFieldComponent,
    pub rules: Vec<FieldRule>,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingRequiredField,
    OutOfRange,
    TooLong,
    InvalidUrl,
    NotANumber,
}

/// A single field-scoped violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

/// Aggregated outcome of validating one raw value map against a schema.
///
/// Violations are recoverable: the caller re-presents the form with every
/// error at once.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
