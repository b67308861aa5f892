//! Rule compiler and evaluator — pure logic, no I/O.

use serde_json::{Map, Value};
use validator::ValidateUrl;

use super::config::{FormFieldComponent, FormFieldConfig};
use super::rules::{CompiledField, FieldRule, FieldViolation, ValidationReport, ViolationKind};

/// Derive the rule list for every schema field.
///
/// Deterministic for a given schema; callers may compile once per form
/// session and reuse the result.
pub fn compile(schema: &[FormFieldConfig]) -> Vec<CompiledField> {
    schema.iter().map(compile_field).collect()
}

fn compile_field(config: &FormFieldConfig) -> CompiledField {
    let spec = config.validator.clone().unwrap_or_default();
    let mut rules = Vec::new();

    if spec.required {
        rules.push(FieldRule::Required);
    }

    match config.component {
        FormFieldComponent::Number => {
            if spec.min.is_some() || spec.max.is_some() {
                rules.push(FieldRule::Range {
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        FormFieldComponent::Input | FormFieldComponent::Textarea | FormFieldComponent::Url => {
            if let Some(max) = spec.max_length {
                rules.push(FieldRule::MaxLength(max));
            }
            if spec.url || config.component == FormFieldComponent::Url {
                rules.push(FieldRule::UrlFormat);
            }
        }
    }

    CompiledField {
        field: config.field.clone(),
        label: config.label.clone(),
        component: config.component,
        rules,
    }
}

/// Evaluate every compiled field against a raw value map.
///
/// Collects all violations in one pass so the caller can surface every form
/// error at once; nothing short-circuits. Fields absent from `raw` count as
/// having no value.
pub fn validate(fields: &[CompiledField], raw: &Map<String, Value>) -> ValidationReport {
    let mut errors = Vec::new();
    for field in fields {
        evaluate_field(field, raw.get(&field.field), &mut errors);
    }
    ValidationReport { errors }
}

fn evaluate_field(field: &CompiledField, value: Option<&Value>, errors: &mut Vec<FieldViolation>) {
    match field.component {
        FormFieldComponent::Number => evaluate_number(field, value, errors),
        _ => evaluate_text(field, value, errors),
    }
}

fn violation(field: &CompiledField, kind: ViolationKind, message: String) -> FieldViolation {
    FieldViolation {
        field: field.field.clone(),
        kind,
        message,
    }
}

fn evaluate_number(field: &CompiledField, value: Option<&Value>, errors: &mut Vec<FieldViolation>) {
    let number = match coerce_number(value) {
        Coerced::Absent => None,
        Coerced::Invalid => {
            errors.push(violation(
                field,
                ViolationKind::NotANumber,
                format!("{} must be a number", field.label),
            ));
            return;
        }
        Coerced::Value(n) => Some(n),
    };

    for rule in &field.rules {
        match rule {
            FieldRule::Required => {
                if number.is_none() {
                    errors.push(violation(
                        field,
                        ViolationKind::MissingRequiredField,
                        format!("{} is required", field.label),
                    ));
                }
            }
            FieldRule::Range { min, max } => {
                if let Some(n) = number {
                    let below = min.is_some_and(|m| n < m);
                    let above = max.is_some_and(|m| n > m);
                    if below || above {
                        errors.push(violation(
                            field,
                            ViolationKind::OutOfRange,
                            range_message(&field.label, *min, *max),
                        ));
                    }
                }
            }
            _ => {}
        }
    }
}

fn evaluate_text(field: &CompiledField, value: Option<&Value>, errors: &mut Vec<FieldViolation>) {
    let text = value.and_then(Value::as_str).unwrap_or_default();
    let present = !text.trim().is_empty();

    for rule in &field.rules {
        match rule {
            FieldRule::Required => {
                if !present {
                    errors.push(violation(
                        field,
                        ViolationKind::MissingRequiredField,
                        format!("{} is required", field.label),
                    ));
                }
            }
            FieldRule::MaxLength(max) => {
                if present && text.chars().count() > *max {
                    errors.push(violation(
                        field,
                        ViolationKind::TooLong,
                        format!("{} must be at most {max} characters", field.label),
                    ));
                }
            }
            FieldRule::UrlFormat => {
                if present && !text.validate_url() {
                    errors.push(violation(
                        field,
                        ViolationKind::InvalidUrl,
                        format!("{} must be a valid URL", field.label),
                    ));
                }
            }
            _ => {}
        }
    }
}

fn range_message(label: &str, min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{label} must be between {min} and {max}"),
        (Some(min), None) => format!("{label} must be at least {min}"),
        (None, Some(max)) => format!("{label} must be at most {max}"),
        (None, None) => format!("{label} is out of range"),
    }
}

pub(super) enum Coerced {
    /// No value: absent, null, or an empty string.
    Absent,
    /// Present but not a finite number.
    Invalid,
    Value(f64),
}

/// Numeric coercion shared by validation and normalization: empty string,
/// null, and absent all mean "no value"; numeric strings parse; anything
/// else is a type violation.
pub(super) fn coerce_number(value: Option<&Value>) -> Coerced {
    match value {
        None | Some(Value::Null) => Coerced::Absent,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(n) if n.is_finite() => Coerced::Value(n),
            _ => Coerced::Invalid,
        },
        Some(Value::String(s)) if s.trim().is_empty() => Coerced::Absent,
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Coerced::Value(n),
            _ => Coerced::Invalid,
        },
        Some(_) => Coerced::Invalid,
    }
}
