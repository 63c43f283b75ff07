//! Validation engine
//!
//! Bundles a loaded [`EngineConfig`] with the domain services so the UI
//! layer has one entry point whose threshold and display settings always
//! agree.

use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::domain::aggregates::{ApplicationDefinition, SectionDefinition};
use crate::domain::services::{self, ApplicationValidator, RenderedAnswer, ValueFormatter};
use crate::domain::value_objects::{
    ApplicationResult, ConditionalRule, FieldDefinition, FieldResult, FieldValue, FormData,
    RawFormData, SectionResult,
};

#[derive(Clone, Debug, Default)]
pub struct ValidationEngine {
    config: EngineConfig,
    validator: ApplicationValidator,
    formatter: ValueFormatter,
}

impl ValidationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            validator: ApplicationValidator::new(config.submission),
            formatter: ValueFormatter::new(config.display.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validate_field(
        &self,
        field: &FieldDefinition,
        value: Option<&FieldValue>,
        data: &FormData,
    ) -> FieldResult {
        services::validate_field(field, value, data)
    }

    pub fn validate_section(&self, section: &SectionDefinition, data: &FormData) -> SectionResult {
        services::validate_section(section, data)
    }

    pub fn validate_application(
        &self,
        application: &ApplicationDefinition,
        snapshots: &HashMap<String, FormData>,
    ) -> ApplicationResult {
        self.validator.validate(application, snapshots)
    }

    pub fn validate_application_snapshot(
        &self,
        application: &ApplicationDefinition,
        data: &FormData,
    ) -> ApplicationResult {
        self.validator.validate_snapshot(application, data)
    }

    pub fn is_field_visible(&self, rule: Option<&ConditionalRule>, data: &FormData) -> bool {
        services::is_field_visible(rule, data)
    }

    pub fn sanitize(&self, raw: &RawFormData) -> FormData {
        services::sanitize(raw)
    }

    pub fn format_value(&self, field: &FieldDefinition, value: &FieldValue) -> String {
        self.formatter.format(field, value)
    }

    pub fn render(
        &self,
        application: &ApplicationDefinition,
        data: &FormData,
    ) -> Vec<RenderedAnswer> {
        self.formatter.render(application, data)
    }
}
