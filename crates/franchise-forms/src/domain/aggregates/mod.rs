//! Aggregates module

pub mod application;
pub mod section;

pub use application::{ApplicationDefinition, SubmissionSettings};
pub use section::SectionDefinition;
