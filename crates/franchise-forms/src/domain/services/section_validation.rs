//! Section aggregator
//!
//! Runs every field of a section, tallies required-field completion, and
//! applies the section's minimum-completed threshold.

use super::field_validation::validate_field;
use crate::domain::aggregates::SectionDefinition;
use crate::domain::value_objects::{FormData, SectionResult};

/// Validate all fields of `section` against `data`.
///
/// Required fields hidden by a conditional rule still count toward
/// `required_fields` even though they always validate. An empty hidden
/// required field therefore holds progress below 100. The 90 point
/// submission threshold in `ApplicationValidator` absorbs this.
pub fn validate_section(section: &SectionDefinition, data: &FormData) -> SectionResult {
    let field_results: Vec<_> = section
        .fields
        .iter()
        .map(|field| validate_field(field, data.get(&field.id), data))
        .collect();

    let mut is_valid = field_results.iter().all(|r| r.is_valid);

    let required_fields = section.required_field_count();
    let completed_required_fields = section
        .fields
        .iter()
        .zip(&field_results)
        .filter(|(field, result)| {
            field.required
                && result.is_valid
                && data.get(&field.id).is_some_and(|v| !v.is_empty())
        })
        .count();

    let progress = if required_fields == 0 {
        100.0
    } else {
        completed_required_fields as f64 / required_fields as f64 * 100.0
    };

    let mut threshold_error = None;
    if let Some(min) = section.min_required_completed {
        if completed_required_fields < min {
            is_valid = false;
            threshold_error = Some(section.threshold_error(min));
        }
    }

    tracing::debug!(
        section_id = %section.id,
        is_valid,
        progress,
        completed_required_fields,
        required_fields,
        "section validated"
    );

    SectionResult {
        section_id: section.id.clone(),
        is_valid,
        field_results,
        progress,
        completed_required_fields,
        required_fields,
        threshold_error,
    }
}
