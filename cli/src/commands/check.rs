//! Definition check command

use colored::Colorize;
use franchise_forms::ApplicationDefinition;
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

use super::{read_definition, Outcome};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
pub struct DefinitionSummary {
    pub id: String,
    pub title: String,
    pub sections: Vec<SectionSummary>,
    pub total_weight: f64,
    /// `section/field` ids whose visibility rule reads another section.
    pub cross_section_rules: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct SectionSummary {
    #[tabled(rename = "Section")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Fields")]
    pub fields: usize,
    #[tabled(rename = "Required")]
    pub required: usize,
    #[tabled(rename = "Weight")]
    pub weight: f64,
}

impl DefinitionSummary {
    pub fn of(app: &ApplicationDefinition) -> Self {
        Self {
            id: app.id.clone(),
            title: app.title.clone(),
            sections: app
                .sections
                .iter()
                .map(|s| SectionSummary {
                    id: s.id.clone(),
                    title: s.title.clone(),
                    fields: s.fields.len(),
                    required: s.required_field_count(),
                    weight: s.progress_weight,
                })
                .collect(),
            total_weight: app.total_weight(),
            cross_section_rules: app
                .cross_section_rules()
                .into_iter()
                .map(|(section, field)| format!("{}/{}", section.id, field.id))
                .collect(),
        }
    }
}

pub fn handle(definition: &Path, format: OutputFormat) -> Result<Outcome, String> {
    let app = read_definition(definition)?;
    let summary = DefinitionSummary::of(&app);

    match format {
        OutputFormat::Table => {
            println!("{} {}", "OK".green().bold(), summary.title);
            println!("{}", Table::new(&summary.sections));
            println!("Total weight: {}", summary.total_weight);
            for id in &summary.cross_section_rules {
                println!(
                    "{} {} depends on another section; use a shared snapshot",
                    "warning:".yellow().bold(),
                    id
                );
            }
        }
        _ => format.print(&summary),
    }
    Ok(Outcome::Done)
}
