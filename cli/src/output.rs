//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use franchise_forms::{ApplicationResult, RenderedAnswer};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Print structured data. Table falls back to pretty JSON for types
    /// without a dedicated table layout.
    pub fn print<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
            OutputFormat::Json | OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
        }
    }

    pub fn print_report(&self, result: &ApplicationResult) {
        match self {
            OutputFormat::Table => print_report_table(result),
            _ => self.print(result),
        }
    }

    pub fn print_answers(&self, answers: &[RenderedAnswer]) {
        match self {
            OutputFormat::Table => {
                let rows: Vec<AnswerRow> = answers
                    .iter()
                    .map(|a| AnswerRow {
                        section: a.section_id.clone(),
                        question: a.label.clone(),
                        answer: a.display.clone(),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
            _ => self.print(&answers),
        }
    }
}

#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Valid")]
    valid: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Errors")]
    errors: usize,
}

#[derive(Tabled)]
struct AnswerRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Question")]
    question: String,
    #[tabled(rename = "Answer")]
    answer: String,
}

fn print_report_table(result: &ApplicationResult) {
    let rows: Vec<SectionRow> = result
        .section_results
        .iter()
        .map(|s| SectionRow {
            section: s.section_id.clone(),
            valid: if s.is_valid { "yes".into() } else { "no".into() },
            progress: format!("{:.0}%", s.progress),
            required: format!("{}/{}", s.completed_required_fields, s.required_fields),
            errors: s.errors().count() + usize::from(s.threshold_error.is_some()),
        })
        .collect();
    println!("{}", Table::new(rows));

    for error in &result.errors {
        println!("  {} {}", "-".red(), error);
    }

    let verdict = if result.can_submit {
        "ready to submit".green().bold()
    } else {
        "not ready to submit".red().bold()
    };
    println!("Overall progress: {}% ({})", result.overall_progress, verdict);
}
