//! Application aggregate
//!
//! The full multi-section application form plus its submission settings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::section::SectionDefinition;
use crate::domain::value_objects::{ConditionalOperator, FieldDefinition};
use crate::error::{FormsError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub sections: Vec<SectionDefinition>,
    #[serde(default)]
    pub submission: SubmissionSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSettings {
    #[serde(default)]
    pub success_message: String,
    #[serde(default)]
    pub field_note: String,
}

impl ApplicationDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sections: Vec::new(),
            submission: SubmissionSettings::default(),
        }
    }

    pub fn with_section(mut self, section: SectionDefinition) -> Self {
        self.sections.push(section);
        self
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionDefinition> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn field(&self, section_id: &str, field_id: &str) -> Option<&FieldDefinition> {
        self.section(section_id).and_then(|s| s.field(field_id))
    }

    /// Every field in declared section-then-field order.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn total_weight(&self) -> f64 {
        self.sections.iter().map(|s| s.progress_weight).sum()
    }

    /// Verify structural invariants before the definition is used.
    ///
    /// Custom patterns are compiled here and cached on the field, so
    /// validation never recompiles them. Conditional rules pointing at
    /// unknown fields are only warned about; at validation time they
    /// simply never match.
    pub fn check(&self) -> Result<()> {
        let mut section_ids = HashSet::new();
        let known_fields: HashSet<&str> = self.all_fields().map(|f| f.id.as_str()).collect();

        for section in &self.sections {
            if section.id.is_empty() {
                return Err(FormsError::EmptyId(format!("application {}", self.id)));
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(FormsError::DuplicateSection(section.id.clone()));
            }
            if !section.progress_weight.is_finite() || section.progress_weight < 0.0 {
                return Err(FormsError::InvalidWeight {
                    section_id: section.id.clone(),
                    weight: section.progress_weight,
                });
            }

            let mut field_ids = HashSet::new();
            for field in &section.fields {
                if field.id.is_empty() {
                    return Err(FormsError::EmptyId(format!("section {}", section.id)));
                }
                if !field_ids.insert(field.id.as_str()) {
                    return Err(FormsError::DuplicateField {
                        section_id: section.id.clone(),
                        field_id: field.id.clone(),
                    });
                }
                if let Some(Err(e)) = field.compiled_pattern() {
                    return Err(FormsError::InvalidPattern {
                        field_id: field.id.clone(),
                        message: e.to_string(),
                    });
                }
                if let Some(rule) = &field.conditional {
                    if rule.operator == ConditionalOperator::Unknown {
                        tracing::warn!(
                            field_id = %field.id,
                            "unknown conditional operator; field will always be shown"
                        );
                    }
                    if !known_fields.contains(rule.source_field_id.as_str()) {
                        tracing::warn!(
                            field_id = %field.id,
                            source_field_id = %rule.source_field_id,
                            "conditional rule references an unknown field; it will never match"
                        );
                    }
                }
            }

            if let Some(min) = section.min_required_completed {
                if min > section.required_field_count() {
                    tracing::warn!(
                        section_id = %section.id,
                        min,
                        required = section.required_field_count(),
                        "section threshold exceeds its required field count and can never be met"
                    );
                }
            }
        }

        for (section, field) in self.cross_section_rules() {
            tracing::warn!(
                section_id = %section.id,
                field_id = %field.id,
                "conditional rule reads another section and needs a shared snapshot"
            );
        }

        Ok(())
    }

    /// Fields whose conditional rule reads a field declared in a different
    /// section. Such rules never match when each section is validated
    /// against its own snapshot.
    pub fn cross_section_rules(&self) -> Vec<(&SectionDefinition, &FieldDefinition)> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter().map(move |field| (section, field)))
            .filter(|(section, field)| {
                field.conditional.as_ref().is_some_and(|rule| {
                    section.field(&rule.source_field_id).is_none()
                        && self.all_fields().any(|f| f.id == rule.source_field_id)
                })
            })
            .collect()
    }
}
