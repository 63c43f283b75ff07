//! CLI Commands

pub mod check;
pub mod config;
pub mod render;
pub mod validate;

use franchise_forms::{load_definition, ApplicationDefinition};
use std::path::Path;

/// How a successful command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Validation ran but the application cannot be submitted yet.
    NotSubmittable,
}

pub fn read_definition(path: &Path) -> Result<ApplicationDefinition, String> {
    load_definition(path).map_err(|e| format!("{}: {}", path.display(), e))
}
