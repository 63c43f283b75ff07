//! Field Value and Form Data Snapshot
//!
//! The live, mutable side of a session: whatever the applicant has typed so
//! far, keyed by field id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single stored answer.
///
/// Deserialized untagged, so `"abc"`, `["a", "b"]`, `true` and `42` all map
/// to the obvious variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Empty means an empty string or an empty list.
    ///
    /// `0` and `false` are answers, not absences.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Numeric coercion used by comparisons and numeric fields.
    ///
    /// Text is parsed after trimming; anything that does not parse, and every
    /// non-numeric variant, yields `NaN`.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            Self::Bool(_) | Self::List(_) => f64::NAN,
        }
    }

    /// Borrow the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// String coercion: lists are comma-joined, numbers print without a
    /// trailing `.0`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "{}", items.join(",")),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

/// Unsanitized snapshot straight from the UI. `None` stands for `null` or
/// `undefined`.
pub type RawFormData = BTreeMap<String, Option<FieldValue>>;

/// Form Data Snapshot: field id to current value.
///
/// Validation always receives one of these by reference and never mutates
/// it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, FieldValue>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field_id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field_id, value);
        self
    }

    pub fn insert(
        &mut self,
        field_id: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(field_id.into(), value.into())
    }

    pub fn remove(&mut self, field_id: &str) -> Option<FieldValue> {
        self.0.remove(field_id)
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.0.get(field_id)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.0.contains_key(field_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for FormData {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FormData {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_false_are_not_empty() {
        assert!(!FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(FieldValue::from(" 42 ").as_number(), 42.0);
        assert_eq!(FieldValue::Number(3.5).as_number(), 3.5);
        assert!(FieldValue::from("abc").as_number().is_nan());
        assert!(FieldValue::from("").as_number().is_nan());
        assert!(FieldValue::Bool(true).as_number().is_nan());
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(FieldValue::Number(5.0).to_text(), "5");
        assert_eq!(FieldValue::Number(2.5).to_text(), "2.5");
        assert_eq!(FieldValue::from(vec!["a", "b"]).to_text(), "a,b");
        assert_eq!(FieldValue::Bool(true).to_text(), "true");
    }

    #[test]
    fn test_untagged_deserialization() {
        let raw: RawFormData = serde_json::from_str(
            r#"{"name": "Ada", "units": 3, "agree": true, "regions": ["north"], "gone": null}"#,
        )
        .unwrap();

        assert_eq!(raw["name"], Some(FieldValue::from("Ada")));
        assert_eq!(raw["units"], Some(FieldValue::Number(3.0)));
        assert_eq!(raw["agree"], Some(FieldValue::Bool(true)));
        assert_eq!(raw["regions"], Some(FieldValue::from(vec!["north"])));
        assert_eq!(raw["gone"], None);
    }

    #[test]
    fn test_form_data_builder() {
        let data = FormData::new().with("email", "a@b.com").with("units", 2i64);
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("email"), Some(&FieldValue::from("a@b.com")));
        assert!(!data.contains("phone"));
    }
}
