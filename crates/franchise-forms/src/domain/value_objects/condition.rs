//! Conditional visibility rules
//!
//! A rule is plain data: which field to look at, how to compare, and what to
//! compare against. Evaluation lives in `domain::services::visibility`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::FieldValue;

/// Show a field only while `source_field_id` satisfies `operator value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionalRule {
    pub source_field_id: String,
    pub operator: ConditionalOperator,
    pub value: FieldValue,
}

impl ConditionalRule {
    pub fn new(
        source_field_id: impl Into<String>,
        operator: ConditionalOperator,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            source_field_id: source_field_id.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn equals(source_field_id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(source_field_id, ConditionalOperator::Equals, value)
    }
}

/// Closed operator set. Anything else in a definition file lands on
/// `Unknown`, which always resolves to visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalOperator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ConditionalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_wire_names() {
        let rule: ConditionalRule = serde_json::from_str(
            r#"{"source_field_id": "has_capital", "operator": "not_equals", "value": "no"}"#,
        )
        .unwrap();
        assert_eq!(rule.operator, ConditionalOperator::NotEquals);
        assert_eq!(rule.value, FieldValue::from("no"));
    }

    #[test]
    fn test_unrecognised_operator_is_unknown() {
        let rule: ConditionalRule = serde_json::from_str(
            r#"{"source_field_id": "x", "operator": "starts_with", "value": "a"}"#,
        )
        .unwrap();
        assert_eq!(rule.operator, ConditionalOperator::Unknown);
    }
}
