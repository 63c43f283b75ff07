//! Value sanitizer and display formatter

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use std::fmt::Write;

use crate::config::DisplaySettings;
use crate::domain::aggregates::ApplicationDefinition;
use crate::domain::value_objects::{FieldDefinition, FieldType, FieldValue, FormData, RawFormData};

/// Clean a raw UI snapshot before storage.
///
/// Drops `null`/missing entries and strings that are empty after trimming;
/// trims every other string. Non-string values pass through unchanged.
pub fn sanitize(raw: &RawFormData) -> FormData {
    raw.iter()
        .filter_map(|(field_id, value)| {
            let value = match value.as_ref()? {
                FieldValue::Text(s) => {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        return None;
                    }
                    FieldValue::Text(trimmed.to_string())
                }
                other => other.clone(),
            };
            Some((field_id.clone(), value))
        })
        .collect()
}

/// Renders stored values for confirmation screens and notification emails.
#[derive(Clone, Debug, Default)]
pub struct ValueFormatter {
    settings: DisplaySettings,
}

/// One answered field, ready to show.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedAnswer {
    pub section_id: String,
    pub field_id: String,
    pub label: String,
    pub display: String,
}

impl ValueFormatter {
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    /// Human-readable string for `value` as an answer to `field`.
    pub fn format(&self, field: &FieldDefinition, value: &FieldValue) -> String {
        match field.field_type {
            FieldType::Select | FieldType::SingleChoice => option_label(field, value),
            FieldType::MultiSelect => match value {
                FieldValue::List(items) => items
                    .iter()
                    .map(|item| field.option_label(item).unwrap_or(item.as_str()))
                    .collect::<Vec<_>>()
                    .join(self.settings.list_separator.as_str()),
                single => option_label(field, single),
            },
            FieldType::Date => self.format_date(value),
            _ => value.to_text(),
        }
    }

    /// Every answered field of the application in declared order.
    pub fn render(
        &self,
        application: &ApplicationDefinition,
        data: &FormData,
    ) -> Vec<RenderedAnswer> {
        application
            .sections
            .iter()
            .flat_map(|section| {
                section.fields.iter().filter_map(move |field| {
                    let value = data.get(&field.id).filter(|v| !v.is_empty())?;
                    Some(RenderedAnswer {
                        section_id: section.id.clone(),
                        field_id: field.id.clone(),
                        label: field.label.clone(),
                        display: self.format(field, value),
                    })
                })
            })
            .collect()
    }

    fn format_date(&self, value: &FieldValue) -> String {
        let raw = value.to_text();
        let Some(date) = parse_date(raw.trim()) else {
            return raw;
        };

        // A bad format string surfaces as a fmt error rather than a panic.
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.settings.date_format)) {
            Ok(()) => out,
            Err(_) => raw,
        }
    }
}

fn option_label(field: &FieldDefinition, value: &FieldValue) -> String {
    let raw = value.to_text();
    field.option_label(&raw).map(String::from).unwrap_or(raw)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Format with default display settings.
pub fn format_value(field: &FieldDefinition, value: &FieldValue) -> String {
    ValueFormatter::default().format(field, value)
}
