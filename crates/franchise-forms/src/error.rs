//! Error types
//!
//! Only loading and structural checks can fail. Validation outcomes are
//! data, see `domain::value_objects::results`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to parse {format}: {message}")]
    Parse { format: &'static str, message: String },

    #[error("unsupported definition format: {0}")]
    UnsupportedFormat(String),

    #[error("section or field with empty id in {0}")]
    EmptyId(String),

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("duplicate field id {field_id} in section {section_id}")]
    DuplicateField { section_id: String, field_id: String },

    #[error("section {section_id} has invalid progress weight {weight}")]
    InvalidWeight { section_id: String, weight: f64 },

    #[error("field {field_id} has invalid pattern: {message}")]
    InvalidPattern { field_id: String, message: String },
}

pub type Result<T> = std::result::Result<T, FormsError>;
