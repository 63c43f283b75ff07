//! Franchise Application Forms
//!
//! Validation and progress engine for the multi-section franchise
//! recruitment application.
//!
//! ## Architecture
//!
//! ```text
//! raw snapshot ──sanitize──► FormData
//!                               │
//!            ┌──────────────────┼──────────────────┐
//!            ▼                  ▼                  ▼
//!      Field evaluator ──► Section aggregator ──► Application aggregator
//!            ▲                  ▲
//!            └── visibility ────┘
//! ```
//!
//! - **Domain Layer**: field/section/application definitions, values and
//!   results (`domain::value_objects`, `domain::aggregates`)
//! - **Services**: pure validation, visibility and formatting functions
//!   (`domain::services`)
//! - **Engine**: [`ValidationEngine`] bundles the services with a loaded
//!   [`EngineConfig`]
//!
//! Validation never fails: every violation is returned as data so the UI can
//! show all of them at once. Only loading and definition checks return
//! [`Result`].

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod loader;

#[cfg(test)]
mod proptests;

pub use config::{DisplaySettings, EngineConfig, SubmissionPolicy, DEFAULT_MIN_SUBMIT_PROGRESS};
pub use domain::aggregates::{ApplicationDefinition, SectionDefinition, SubmissionSettings};
pub use domain::services::{
    format_value, is_field_visible, sanitize, validate_application, validate_application_snapshot,
    validate_field, validate_section, visible_fields, ApplicationValidator, RenderedAnswer,
    ValueFormatter,
};
pub use domain::value_objects::{
    ApplicationResult, ConditionalOperator, ConditionalRule, FieldDefinition, FieldOption,
    FieldResult, FieldType, FieldValidation, FieldValue, FieldWidth, FormData, FormatKind,
    RawFormData, SectionResult, Violation,
};
pub use engine::ValidationEngine;
pub use error::{FormsError, Result};
pub use loader::{
    load_definition, load_section_snapshots, load_snapshot, parse_definition, DefinitionFormat,
};
