//! Franchise Forms CLI
//!
//! Command-line front end for the franchise application validation engine.
//!
//! # Usage
//!
//! ```bash
//! franchise-forms check application.yaml
//! franchise-forms validate application.yaml answers.json
//! franchise-forms validate application.yaml by-section.json --by-section --format json
//! franchise-forms render application.yaml answers.json
//! franchise-forms config init
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "franchise-forms")]
#[command(author = "Franchise Forms")]
#[command(version)]
#[command(about = "Validate franchise applications and report progress", long_about = None)]
struct Cli {
    /// Engine configuration file
    #[arg(long, global = true, env = "FRANCHISE_FORMS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and check an application definition
    Check {
        /// Definition file (.json, .yaml, .yml or .toml)
        definition: PathBuf,
    },
    /// Validate a snapshot of answers against a definition
    Validate {
        definition: PathBuf,
        /// Answers as JSON
        data: PathBuf,
        /// Answers are keyed by section id
        #[arg(long)]
        by_section: bool,
    },
    /// Print every answered field as display text
    Render { definition: PathBuf, data: PathBuf },
    /// Manage the engine configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Check { definition } => commands::check::handle(&definition, cli.format),
        Commands::Validate {
            definition,
            data,
            by_section,
        } => commands::validate::handle(&definition, &data, by_section, config_path, cli.format),
        Commands::Render { definition, data } => {
            commands::render::handle(&definition, &data, config_path, cli.format)
        }
        Commands::Config { action } => commands::config::handle(action, config_path, cli.format),
    };

    match result {
        Ok(commands::Outcome::Done) => {}
        Ok(commands::Outcome::NotSubmittable) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_by_section() {
        let cli = Cli::try_parse_from([
            "franchise-forms",
            "validate",
            "app.yaml",
            "answers.json",
            "--by-section",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(matches!(cli.format, output::OutputFormat::Json));
        match cli.command {
            Commands::Validate {
                definition,
                data,
                by_section,
            } => {
                assert_eq!(definition, PathBuf::from("app.yaml"));
                assert_eq!(data, PathBuf::from("answers.json"));
                assert!(by_section);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_parse_config_init_force() {
        let cli = Cli::try_parse_from([
            "franchise-forms",
            "--config",
            "/tmp/ff.toml",
            "config",
            "init",
            "--force",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ff.toml")));
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Init { force: true }
            }
        ));
    }

    #[test]
    fn test_validate_requires_data() {
        assert!(Cli::try_parse_from(["franchise-forms", "validate", "app.yaml"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let args = ["franchise-forms", "--format", "xml", "check", "app.yaml"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
