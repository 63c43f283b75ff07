//! Validate command

use franchise_forms::{
    load_section_snapshots, load_snapshot, ApplicationDefinition, ApplicationResult, FormData,
    ValidationEngine,
};
use std::collections::HashMap;
use std::path::Path;

use super::{read_definition, Outcome};
use crate::output::OutputFormat;

pub fn handle(
    definition: &Path,
    data: &Path,
    by_section: bool,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<Outcome, String> {
    let app = read_definition(definition)?;
    let engine = ValidationEngine::new(crate::config::load(config_path)?);
    let result = run(&engine, &app, data, by_section)?;

    format.print_report(&result);
    Ok(if result.can_submit {
        Outcome::Done
    } else {
        Outcome::NotSubmittable
    })
}

fn run(
    engine: &ValidationEngine,
    app: &ApplicationDefinition,
    data: &Path,
    by_section: bool,
) -> Result<ApplicationResult, String> {
    let err = |e: franchise_forms::FormsError| format!("{}: {}", data.display(), e);

    if by_section {
        let snapshots: HashMap<String, FormData> = load_section_snapshots(data)
            .map_err(err)?
            .iter()
            .map(|(section_id, raw)| (section_id.clone(), engine.sanitize(raw)))
            .collect();
        Ok(engine.validate_application(app, &snapshots))
    } else {
        let raw = load_snapshot(data).map_err(err)?;
        Ok(engine.validate_application_snapshot(app, &engine.sanitize(&raw)))
    }
}
