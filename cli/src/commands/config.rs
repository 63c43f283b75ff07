//! Config commands

use franchise_forms::EngineConfig;
use std::path::Path;

use super::Outcome;
use crate::config;
use crate::output::OutputFormat;
use crate::ConfigCommands;

pub fn handle(
    action: ConfigCommands,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<Outcome, String> {
    match action {
        ConfigCommands::Init { force } => {
            let path = config::config_path(config_path)?;
            if path.exists() && !force {
                return Err(format!("{} already exists (use --force to overwrite)", path.display()));
            }
            config::save(&EngineConfig::default(), &path)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Show => {
            let effective = config::load(config_path)?;
            match format {
                OutputFormat::Table => {
                    print!("{}", effective.to_toml_string().map_err(|e| e.to_string())?);
                }
                _ => format.print(&effective),
            }
        }
    }
    Ok(Outcome::Done)
}
