//! Validation results
//!
//! Immutable records built bottom-up: fields, then sections, then the whole
//! application. Violations are data so the UI can render every one inline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a field failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidFormat { format: FormatKind },
    PatternMismatch,
}

/// Built-in format checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Email,
    Phone,
    Url,
    Number,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
            Self::Url => write!(f, "url"),
            Self::Number => write!(f, "number"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    pub field_id: String,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

impl FieldResult {
    pub fn valid(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            is_valid: true,
            error: None,
            violation: None,
        }
    }

    pub fn invalid(
        field_id: impl Into<String>,
        violation: Violation,
        error: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            is_valid: false,
            error: Some(error.into()),
            violation: Some(violation),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section_id: String,
    pub is_valid: bool,
    pub field_results: Vec<FieldResult>,
    /// 0.0 to 100.0, unrounded.
    pub progress: f64,
    pub completed_required_fields: usize,
    pub required_fields: usize,
    /// Set when the section's minimum-completed threshold was not met.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_error: Option<String>,
}

impl SectionResult {
    /// Field-level messages in field order.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.field_results.iter().filter_map(|r| r.error.as_deref())
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldResult> {
        self.field_results.iter().find(|r| r.field_id == field_id)
    }

    pub fn is_complete(&self) -> bool {
        self.completed_required_fields >= self.required_fields
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub is_valid: bool,
    pub section_results: Vec<SectionResult>,
    /// Weighted, rounded, 0 to 100.
    pub overall_progress: u8,
    pub can_submit: bool,
    pub errors: Vec<String>,
}

impl ApplicationResult {
    pub fn section(&self, section_id: &str) -> Option<&SectionResult> {
        self.section_results.iter().find(|s| s.section_id == section_id)
    }

    /// First section, in declared order, that is not valid.
    pub fn first_invalid_section(&self) -> Option<&SectionResult> {
        self.section_results.iter().find(|s| !s.is_valid)
    }

    /// Field messages plus the threshold message for one section.
    pub fn errors_for(&self, section_id: &str) -> Vec<&str> {
        self.section(section_id)
            .map(|s| s.errors().chain(s.threshold_error.as_deref()).collect())
            .unwrap_or_default()
    }
}
