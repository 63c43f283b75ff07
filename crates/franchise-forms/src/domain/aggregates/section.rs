//! Section aggregate
//!
//! An ordered group of fields with its own completion weight and threshold
//! policy. Defined once per configuration and never mutated in a session.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FieldDefinition;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Minimum number of required fields that must be completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_required_completed: Option<usize>,
    /// Shown when `min_required_completed` is not met.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_message: Option<String>,
    /// Relative contribution to overall progress. Normalized against the sum
    /// of all weights, so any positive scale works.
    #[serde(default = "default_weight")]
    pub progress_weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl SectionDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
            min_required_completed: None,
            threshold_message: None,
            progress_weight: default_weight(),
        }
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.progress_weight = weight;
        self
    }

    pub fn with_threshold(
        mut self,
        min_required_completed: usize,
        message: Option<String>,
    ) -> Self {
        self.min_required_completed = Some(min_required_completed);
        self.threshold_message = message;
        self
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn required_field_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }

    /// Message for a failed threshold: the configured one, else a default.
    pub fn threshold_error(&self, min_required_completed: usize) -> String {
        match &self.threshold_message {
            Some(message) => message.clone(),
            None => {
                let name = if self.title.is_empty() { &self.id } else { &self.title };
                format!(
                    "Please complete at least {} required fields in {}",
                    min_required_completed, name
                )
            }
        }
    }
}
