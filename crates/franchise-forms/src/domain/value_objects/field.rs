//! Field definitions
//!
//! One input on the application form, as delivered by the content backend.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::condition::ConditionalRule;

/// Definition of a single form input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Unique within the owning section.
    pub id: String,
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ConditionalRule>,
    #[serde(default)]
    pub width: FieldWidth,
}

impl FieldDefinition {
    /// Optional field with no constraints.
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            help_text: None,
            required: false,
            validation: None,
            options: Vec::new(),
            conditional: None,
            width: FieldWidth::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(FieldOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    pub fn shown_when(mut self, rule: ConditionalRule) -> Self {
        self.conditional = Some(rule);
        self
    }

    /// Label of the option whose value is `value`.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub fn custom_message(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.custom_error.as_deref())
    }

    pub fn pattern(&self) -> Option<&str> {
        self.validation.as_ref().and_then(|v| v.pattern.as_deref())
    }

    pub fn compiled_pattern(&self) -> Option<Result<&Regex, &regex::Error>> {
        self.validation
            .as_ref()
            .and_then(FieldValidation::compiled_pattern)
    }
}

/// Input types understood by the engine. The wire names are the HTML-ish
/// tags the content backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "text")]
    ShortText,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "tel")]
    Phone,
    #[serde(rename = "textarea")]
    LongText,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "checkbox")]
    MultiSelect,
    #[serde(rename = "radio")]
    SingleChoice,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "file")]
    File,
}

impl FieldType {
    /// Types whose stored value is one or more option values.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect | Self::SingleChoice)
    }
}

/// Per-field constraints. All optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Unanchored regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Replaces the default required / pattern messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_error: Option<String>,
    #[serde(skip)]
    pub(crate) compiled: CompiledPattern,
}

impl FieldValidation {
    pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min_length: min,
            max_length: max,
            ..Self::default()
        }
    }

    pub fn pattern(pattern: impl Into<String>, custom_error: Option<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            custom_error,
            ..Self::default()
        }
    }

    /// `pattern` compiled on first use and reused afterwards.
    ///
    /// The cache is not invalidated when `pattern` is reassigned in place;
    /// replace the whole validation instead.
    pub fn compiled_pattern(&self) -> Option<Result<&Regex, &regex::Error>> {
        let pattern = self.pattern.as_deref()?;
        Some(self.compiled.0.get_or_init(|| Regex::new(pattern)).as_ref())
    }
}

/// Lazily compiled custom pattern. Never serialized, ignored by equality.
#[derive(Clone, Debug, Default)]
pub(crate) struct CompiledPattern(OnceLock<Result<Regex, regex::Error>>);

impl PartialEq for CompiledPattern {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Layout hint. Has no effect on validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidth {
    #[default]
    Full,
    Half,
}
