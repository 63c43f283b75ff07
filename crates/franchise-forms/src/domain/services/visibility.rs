//! Conditional visibility resolver

use crate::domain::aggregates::SectionDefinition;
use crate::domain::value_objects::{ConditionalOperator, ConditionalRule, FieldDefinition, FormData};

/// Whether a field governed by `rule` currently counts.
///
/// No rule means always visible. A rule whose source field has no value in
/// the snapshot is not satisfied, so the field is hidden. This also covers
/// rules that name a field that does not exist.
pub fn is_field_visible(rule: Option<&ConditionalRule>, data: &FormData) -> bool {
    match rule {
        None => true,
        Some(rule) => rule_matches(rule, data),
    }
}

/// Evaluate one rule against the snapshot.
pub fn rule_matches(rule: &ConditionalRule, data: &FormData) -> bool {
    // Unknown operators fail open.
    if rule.operator == ConditionalOperator::Unknown {
        tracing::debug!(
            source_field_id = %rule.source_field_id,
            "unknown conditional operator, treating as visible"
        );
        return true;
    }

    let Some(actual) = data.get(&rule.source_field_id) else {
        return false;
    };

    match rule.operator {
        ConditionalOperator::Equals => *actual == rule.value,
        ConditionalOperator::NotEquals => *actual != rule.value,
        ConditionalOperator::Contains => actual.to_text().contains(&rule.value.to_text()),
        // NaN on either side makes both comparisons false.
        ConditionalOperator::GreaterThan => actual.as_number() > rule.value.as_number(),
        ConditionalOperator::LessThan => actual.as_number() < rule.value.as_number(),
        ConditionalOperator::Unknown => true,
    }
}

/// Fields of `section` that are visible under `data`, in declared order.
pub fn visible_fields<'a>(
    section: &'a SectionDefinition,
    data: &'a FormData,
) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
    section
        .fields
        .iter()
        .filter(move |f| is_field_visible(f.conditional.as_ref(), data))
}
