//! Render command

use franchise_forms::{load_snapshot, RenderedAnswer, ValidationEngine};
use std::path::Path;

use super::{read_definition, Outcome};
use crate::output::OutputFormat;

pub fn handle(
    definition: &Path,
    data: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<Outcome, String> {
    let engine = ValidationEngine::new(crate::config::load(config_path)?);
    let answers = answers(&engine, definition, data)?;
    format.print_answers(&answers);
    Ok(Outcome::Done)
}

fn answers(
    engine: &ValidationEngine,
    definition: &Path,
    data: &Path,
) -> Result<Vec<RenderedAnswer>, String> {
    let app = read_definition(definition)?;
    let raw = load_snapshot(data).map_err(|e| format!("{}: {}", data.display(), e))?;
    Ok(engine.render(&app, &engine.sanitize(&raw)))
}
