//! Application aggregator
//!
//! A single fold over sections in declared order, accumulating weighted
//! progress, total weight, error messages, and overall validity.

use std::collections::HashMap;

use super::section_validation::validate_section;
use crate::config::SubmissionPolicy;
use crate::domain::aggregates::{ApplicationDefinition, SectionDefinition};
use crate::domain::value_objects::{ApplicationResult, FormData, SectionResult};

/// Validates whole applications under a submission policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApplicationValidator {
    policy: SubmissionPolicy,
}

#[derive(Default)]
struct Tally {
    weighted_progress: f64,
    total_weight: f64,
    errors: Vec<String>,
    all_valid: bool,
    sections: Vec<SectionResult>,
}

impl ApplicationValidator {
    pub fn new(policy: SubmissionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Validate with one snapshot per section, keyed by section id. A section
    /// without a snapshot is validated against an empty one.
    pub fn validate(
        &self,
        application: &ApplicationDefinition,
        snapshots: &HashMap<String, FormData>,
    ) -> ApplicationResult {
        let empty = FormData::new();
        self.fold(application, |section| snapshots.get(&section.id).unwrap_or(&empty))
    }

    /// Validate with a single snapshot shared by every section.
    pub fn validate_snapshot(
        &self,
        application: &ApplicationDefinition,
        data: &FormData,
    ) -> ApplicationResult {
        self.fold(application, |_| data)
    }

    fn fold<'a, F>(&self, application: &ApplicationDefinition, snapshot_for: F) -> ApplicationResult
    where
        F: Fn(&SectionDefinition) -> &'a FormData,
    {
        let tally = application.sections.iter().fold(
            Tally {
                all_valid: true,
                ..Tally::default()
            },
            |mut tally, section| {
                let result = validate_section(section, snapshot_for(section));
                let weight = effective_weight(section);

                tally.weighted_progress += result.progress * (weight / 100.0);
                tally.total_weight += weight;
                tally.all_valid &= result.is_valid;
                tally.errors.extend(result.errors().map(String::from));
                if let Some(message) = &result.threshold_error {
                    tally.errors.push(message.clone());
                }
                tally.sections.push(result);
                tally
            },
        );

        let overall_progress = overall_progress(tally.weighted_progress, tally.total_weight);
        let can_submit = tally.all_valid && overall_progress >= self.policy.min_progress;

        tracing::debug!(
            application_id = %application.id,
            overall_progress,
            is_valid = tally.all_valid,
            can_submit,
            errors = tally.errors.len(),
            "application validated"
        );

        ApplicationResult {
            is_valid: tally.all_valid,
            section_results: tally.sections,
            overall_progress,
            can_submit,
            errors: tally.errors,
        }
    }
}

/// Negative or non-finite weights contribute nothing.
fn effective_weight(section: &SectionDefinition) -> f64 {
    if section.progress_weight.is_finite() && section.progress_weight > 0.0 {
        section.progress_weight
    } else {
        0.0
    }
}

/// Normalized, rounded progress. Zero total weight yields 0.
fn overall_progress(weighted_progress: f64, total_weight: f64) -> u8 {
    if total_weight <= 0.0 {
        return 0;
    }
    (weighted_progress / total_weight * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Validate with the default submission policy.
pub fn validate_application(
    application: &ApplicationDefinition,
    snapshots: &HashMap<String, FormData>,
) -> ApplicationResult {
    ApplicationValidator::default().validate(application, snapshots)
}

/// Validate with the default submission policy and one shared snapshot.
pub fn validate_application_snapshot(
    application: &ApplicationDefinition,
    data: &FormData,
) -> ApplicationResult {
    ApplicationValidator::default().validate_snapshot(application, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ConditionalRule, FieldDefinition, FieldType};

    fn two_field_section(id: &str, weight: f64) -> SectionDefinition {
        SectionDefinition::new(id, id)
            .with_weight(weight)
            .with_field(FieldDefinition::new("first", FieldType::ShortText, "First").required())
            .with_field(FieldDefinition::new("second", FieldType::ShortText, "Second").required())
    }

    fn snapshots(entries: &[(&str, FormData)]) -> HashMap<String, FormData> {
        entries.iter().map(|(id, data)| (id.to_string(), data.clone())).collect()
    }

    #[test]
    fn test_weighted_progress_below_threshold() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 40.0))
            .with_section(
                SectionDefinition::new("b", "b")
                    .with_weight(60.0)
                    .with_field(
                        FieldDefinition::new("first", FieldType::ShortText, "First").required(),
                    )
                    .with_field(
                        FieldDefinition::new("second", FieldType::ShortText, "Second")
                            .required()
                            .shown_when(ConditionalRule::equals("first", "more")),
                    ),
            );
        let data = snapshots(&[
            ("a", FormData::new().with("first", "x").with("second", "y")),
            ("b", FormData::new().with("first", "x")),
        ]);

        let result = validate_application(&app, &data);

        assert!(result.is_valid);
        assert_eq!(result.section_results[0].progress, 100.0);
        assert_eq!(result.section_results[1].progress, 50.0);
        assert_eq!(result.overall_progress, 70);
        assert!(!result.can_submit);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_complete_application_can_submit() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 1.0))
            .with_section(two_field_section("b", 3.0));
        let full = FormData::new().with("first", "x").with("second", "y");
        let data = snapshots(&[("a", full.clone()), ("b", full)]);

        let result = validate_application(&app, &data);
        assert!(result.is_valid);
        assert_eq!(result.overall_progress, 100);
        assert!(result.can_submit);
    }

    #[test]
    fn test_missing_snapshot_is_empty() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 50.0))
            .with_section(two_field_section("b", 50.0));
        let data = snapshots(&[("a", FormData::new().with("first", "x").with("second", "y"))]);

        let result = validate_application(&app, &data);
        assert!(!result.is_valid);
        assert_eq!(result.overall_progress, 50);
        assert_eq!(result.section("b").map(|s| s.progress), Some(0.0));
        assert_eq!(result.errors, vec!["First is required", "Second is required"]);
    }

    #[test]
    fn test_errors_in_section_then_field_order() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 1.0))
            .with_section(
                SectionDefinition::new("b", "Second section")
                    .with_field(FieldDefinition::new("email", FieldType::Email, "Email"))
                    .with_field(FieldDefinition::new("x", FieldType::ShortText, "X"))
                    .with_threshold(1, Some("Fill in at least one".into())),
            );
        let data = snapshots(&[
            ("a", FormData::new().with("second", "y")),
            ("b", FormData::new().with("email", "nope")),
        ]);

        let result = validate_application(&app, &data);
        assert_eq!(
            result.errors,
            vec![
                "First is required",
                "Please enter a valid email address",
                "Fill in at least one",
            ]
        );
        assert_eq!(result.first_invalid_section().map(|s| s.section_id.as_str()), Some("a"));
    }

    #[test]
    fn test_zero_total_weight_is_zero_progress() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 0.0))
            .with_section(two_field_section("b", 0.0));
        let full = FormData::new().with("first", "x").with("second", "y");

        let result = validate_application_snapshot(&app, &full);
        assert!(result.is_valid);
        assert_eq!(result.overall_progress, 0);
        assert!(!result.can_submit);
    }

    #[test]
    fn test_no_sections() {
        let app = ApplicationDefinition::new("app", "App");
        let result = validate_application(&app, &HashMap::new());
        assert!(result.is_valid);
        assert_eq!(result.overall_progress, 0);
        assert!(result.section_results.is_empty());
    }

    #[test]
    fn test_negative_weight_contributes_nothing() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 10.0))
            .with_section(two_field_section("b", -10.0));
        let data = snapshots(&[("a", FormData::new().with("first", "x").with("second", "y"))]);

        let result = validate_application(&app, &data);
        assert_eq!(result.overall_progress, 100);
        assert!(!result.can_submit);
    }

    #[test]
    fn test_shared_snapshot_resolves_cross_section_rules() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(
                SectionDefinition::new("about", "About")
                    .with_field(
                        FieldDefinition::new("owner", FieldType::SingleChoice, "Owner?").required(),
                    ),
            )
            .with_section(
                SectionDefinition::new("business", "Business").with_field(
                    FieldDefinition::new("business_name", FieldType::ShortText, "Business name")
                        .shown_when(ConditionalRule::equals("owner", "yes"))
                        .required(),
                ),
            );

        let data = FormData::new().with("owner", "yes");
        let result = validate_application_snapshot(&app, &data);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Business name is required"]);

        let data = data.with("business_name", "Ada's Bakery");
        let result = validate_application_snapshot(&app, &data);
        assert!(result.is_valid);
        assert!(result.can_submit);
    }

    #[test]
    fn test_custom_policy_threshold() {
        let app = ApplicationDefinition::new("app", "App")
            .with_section(two_field_section("a", 40.0))
            .with_section(
                SectionDefinition::new("b", "b")
                    .with_weight(60.0)
                    .with_field(
                        FieldDefinition::new("first", FieldType::ShortText, "First").required(),
                    )
                    .with_field(
                        FieldDefinition::new("second", FieldType::ShortText, "Second")
                            .required()
                            .shown_when(ConditionalRule::equals("first", "more")),
                    ),
            );
        let data = snapshots(&[
            ("a", FormData::new().with("first", "x").with("second", "y")),
            ("b", FormData::new().with("first", "x")),
        ]);

        let lenient = ApplicationValidator::new(SubmissionPolicy { min_progress: 70 });
        assert!(lenient.validate(&app, &data).can_submit);

        let strict = ApplicationValidator::new(SubmissionPolicy { min_progress: 71 });
        assert!(!strict.validate(&app, &data).can_submit);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(overall_progress(66.666, 100.0), 67);
        assert_eq!(overall_progress(0.4, 1.0), 40);
        assert_eq!(overall_progress(10.0, 0.0), 0);
    }
}
