//! Domain services
//!
//! Pure functions over definitions and snapshots. Data flows bottom-up:
//! field, section, application.

pub mod application_validation;
pub mod field_validation;
pub mod formatting;
pub mod section_validation;
pub mod visibility;

pub use application_validation::{
    validate_application, validate_application_snapshot, ApplicationValidator,
};
pub use field_validation::{validate_field, validate_field_in};
pub use formatting::{format_value, sanitize, RenderedAnswer, ValueFormatter};
pub use section_validation::validate_section;
pub use visibility::{is_field_visible, rule_matches, visible_fields};
