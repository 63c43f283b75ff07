//! Field rule evaluator
//!
//! Checks run in a fixed order and the first failure wins:
//! visibility, required, length, type format, custom pattern.

use regex::Regex;
use std::sync::LazyLock;

use super::visibility::is_field_visible;
use crate::domain::value_objects::{
    FieldDefinition, FieldResult, FieldType, FieldValue, FormData, FormatKind, Violation,
};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 +\-()]+$").expect("phone regex compiles"));

/// Validate one field's value against its definition.
///
/// `data` is the complete snapshot, consulted only for the field's
/// conditional rule. A hidden field is always valid.
pub fn validate_field(
    field: &FieldDefinition,
    value: Option<&FieldValue>,
    data: &FormData,
) -> FieldResult {
    let result = evaluate(field, value, data);
    tracing::trace!(field_id = %field.id, is_valid = result.is_valid, "field validated");
    result
}

/// Same as [`validate_field`] with the value taken from `data`.
pub fn validate_field_in(field: &FieldDefinition, data: &FormData) -> FieldResult {
    validate_field(field, data.get(&field.id), data)
}

fn evaluate(field: &FieldDefinition, value: Option<&FieldValue>, data: &FormData) -> FieldResult {
    if !is_field_visible(field.conditional.as_ref(), data) {
        return FieldResult::valid(&field.id);
    }

    let value = match value.filter(|v| !v.is_empty()) {
        Some(value) => value,
        None if field.required => {
            let message = field
                .custom_message()
                .map(String::from)
                .unwrap_or_else(|| format!("{} is required", field.label));
            return FieldResult::invalid(&field.id, Violation::Required, message);
        }
        None => return FieldResult::valid(&field.id),
    };

    let text = value.to_text();

    if let Some(validation) = &field.validation {
        let length = text.chars().count();
        if let Some(min) = validation.min_length {
            if length < min {
                return FieldResult::invalid(
                    &field.id,
                    Violation::TooShort { min },
                    format!("{} must be at least {} characters", field.label, min),
                );
            }
        }
        if let Some(max) = validation.max_length {
            if length > max {
                return FieldResult::invalid(
                    &field.id,
                    Violation::TooLong { max },
                    format!("{} must be no more than {} characters", field.label, max),
                );
            }
        }
    }

    if let Some(format) = format_for(field.field_type) {
        if !format_matches(format, value, &text) {
            return FieldResult::invalid(
                &field.id,
                Violation::InvalidFormat { format },
                format_message(format, &field.label),
            );
        }
    }

    match field.compiled_pattern() {
        Some(Ok(re)) if !re.is_match(&text) => {
            let message = field.custom_message().map(String::from).unwrap_or_else(|| {
                format!("{} doesn't match the required format", field.label)
            });
            return FieldResult::invalid(&field.id, Violation::PatternMismatch, message);
        }
        Some(Err(e)) => {
            tracing::warn!(field_id = %field.id, error = %e, "skipping invalid field pattern");
        }
        Some(Ok(_)) | None => {}
    }

    FieldResult::valid(&field.id)
}

/// Built-in format check for a field type, if it has one.
pub fn format_for(field_type: FieldType) -> Option<FormatKind> {
    match field_type {
        FieldType::Email => Some(FormatKind::Email),
        FieldType::Phone => Some(FormatKind::Phone),
        FieldType::Url => Some(FormatKind::Url),
        FieldType::Number => Some(FormatKind::Number),
        _ => None,
    }
}

fn format_matches(format: FormatKind, value: &FieldValue, text: &str) -> bool {
    match format {
        FormatKind::Email => EMAIL.is_match(text),
        FormatKind::Phone => PHONE.is_match(text),
        FormatKind::Url => url::Url::parse(text).is_ok(),
        FormatKind::Number => match value {
            FieldValue::Number(n) => n.is_finite(),
            FieldValue::Text(s) => s.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false),
            FieldValue::Bool(_) | FieldValue::List(_) => false,
        },
    }
}

fn format_message(format: FormatKind, label: &str) -> String {
    match format {
        FormatKind::Email => "Please enter a valid email address".to_string(),
        FormatKind::Phone => "Please enter a valid phone number".to_string(),
        FormatKind::Url => "Please enter a valid URL".to_string(),
        FormatKind::Number => format!("{} must be a valid number", label),
    }
}
