//! Value Objects module
//!
//! Immutable domain primitives: field definitions, visibility rules,
//! stored values and validation results.

pub mod condition;
pub mod field;
pub mod results;
pub mod value;

pub use condition::{ConditionalOperator, ConditionalRule};
pub use field::{FieldDefinition, FieldOption, FieldType, FieldValidation, FieldWidth};
pub use results::{ApplicationResult, FieldResult, FormatKind, SectionResult, Violation};
pub use value::{FieldValue, FormData, RawFormData};
