//! Property tests for the validation pipeline.

use proptest::prelude::*;
use proptest::sample::select;

use crate::domain::services::{
    sanitize, validate_application_snapshot, validate_field, validate_section,
};
use crate::domain::value_objects::{
    ConditionalOperator, ConditionalRule, FieldDefinition, FieldType, FieldValidation, FieldValue,
    FormData, RawFormData,
};
use crate::{ApplicationDefinition, SectionDefinition};

const FIELD_TYPES: [FieldType; 11] = [
    FieldType::ShortText,
    FieldType::Email,
    FieldType::Phone,
    FieldType::LongText,
    FieldType::Select,
    FieldType::MultiSelect,
    FieldType::SingleChoice,
    FieldType::Date,
    FieldType::Url,
    FieldType::Number,
    FieldType::File,
];

fn arb_field_type() -> impl Strategy<Value = FieldType> {
    select(FIELD_TYPES.to_vec())
}

fn arb_validation() -> impl Strategy<Value = Option<FieldValidation>> {
    proptest::option::of(
        (
            proptest::option::of(0usize..50),
            proptest::option::of(0usize..50),
            proptest::option::of(select(vec![r"^\d+$", "^[A-Z]", "x{3}", "@"])),
        )
            .prop_map(|(min_length, max_length, pattern)| FieldValidation {
                min_length,
                max_length,
                pattern: pattern.map(String::from),
                ..FieldValidation::default()
            }),
    )
}

fn arb_field(required: bool) -> impl Strategy<Value = FieldDefinition> {
    (arb_field_type(), arb_validation()).prop_map(move |(field_type, validation)| {
        FieldDefinition {
            required,
            validation,
            ..FieldDefinition::new("target", field_type, "Target")
        }
    })
}

fn arb_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        "[ a-zA-Z0-9@.+()-]{0,24}".prop_map(FieldValue::Text),
        any::<f64>().prop_map(FieldValue::Number),
        any::<bool>().prop_map(FieldValue::Bool),
        proptest::collection::vec("[a-z]{1,6}", 0..4).prop_map(FieldValue::List),
    ]
}

fn arb_empty() -> impl Strategy<Value = Option<FieldValue>> {
    select(vec![
        None,
        Some(FieldValue::Text(String::new())),
        Some(FieldValue::List(vec![])),
    ])
}

fn arb_field_id() -> impl Strategy<Value = &'static str> {
    select(vec!["a", "b", "c", "d"])
}

fn arb_snapshot() -> impl Strategy<Value = FormData> {
    proptest::collection::btree_map(arb_field_id().prop_map(String::from), arb_value(), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_application() -> impl Strategy<Value = ApplicationDefinition> {
    let field = (arb_field_id(), arb_field_type(), any::<bool>());
    let section = (
        proptest::collection::vec(field, 0..4),
        0.0f64..100.0,
        proptest::option::of(0usize..3),
    );
    proptest::collection::vec(section, 0..4).prop_map(|sections| {
        let mut app = ApplicationDefinition::new("app", "App");
        for (i, (fields, weight, threshold)) in sections.into_iter().enumerate() {
            let mut section = SectionDefinition::new(format!("s{}", i), format!("Section {}", i))
                .with_weight(weight);
            section.min_required_completed = threshold;
            for (id, field_type, required) in fields {
                let mut field = FieldDefinition::new(id, field_type, id.to_uppercase());
                field.required = required;
                section.fields.push(field);
            }
            app.sections.push(section);
        }
        app
    })
}

proptest! {
    #[test]
    fn optional_empty_field_is_always_valid(
        field in arb_field(false),
        value in arb_empty(),
        data in arb_snapshot(),
    ) {
        let result = validate_field(&field, value.as_ref(), &data);
        prop_assert!(result.is_valid);
        prop_assert!(result.error.is_none());
    }

    #[test]
    fn hidden_field_is_always_valid(
        field in arb_field(true),
        value in proptest::option::of(arb_value()),
        source in "[a-z]{1,8}",
    ) {
        let rule = ConditionalRule::new("toggle", ConditionalOperator::Equals, "show");
        let field = field.shown_when(rule);
        let data = FormData::new().with("toggle", format!("{}-hidden", source));
        prop_assert!(validate_field(&field, value.as_ref(), &data).is_valid);
    }

    #[test]
    fn section_without_required_fields_is_fully_complete(
        types in proptest::collection::vec(arb_field_type(), 0..6),
        data in arb_snapshot(),
    ) {
        let mut section = SectionDefinition::new("s", "S");
        for (i, field_type) in types.into_iter().enumerate() {
            section = section.with_field(FieldDefinition::new(format!("f{}", i), field_type, "F"));
        }
        prop_assert_eq!(validate_section(&section, &data).progress, 100.0);
    }

    #[test]
    fn zero_weight_application_has_zero_progress(app in arb_application(), data in arb_snapshot()) {
        let mut app = app;
        for section in &mut app.sections {
            section.progress_weight = 0.0;
        }
        let result = validate_application_snapshot(&app, &data);
        prop_assert_eq!(result.overall_progress, 0);
        prop_assert!(!result.can_submit);
    }

    #[test]
    fn progress_is_bounded_and_validation_is_idempotent(
        app in arb_application(),
        data in arb_snapshot(),
    ) {
        let first = validate_application_snapshot(&app, &data);
        let second = validate_application_snapshot(&app, &data);
        prop_assert!(first.overall_progress <= 100);
        for section in &first.section_results {
            prop_assert!((0.0..=100.0).contains(&section.progress));
        }
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sanitize_preserves_untrimmed_validation(
        field in arb_field(true),
        text in "[a-zA-Z0-9@.+()-]{0,24}",
    ) {
        let original = FormData::new().with("target", text.clone());
        let raw: RawFormData = [("target".to_string(), Some(FieldValue::Text(text)))]
            .into_iter()
            .collect();
        let cleaned = sanitize(&raw);

        prop_assert_eq!(
            validate_field(&field, cleaned.get("target"), &cleaned),
            validate_field(&field, original.get("target"), &original)
        );
    }
}
