//! Definition and snapshot loading
//!
//! Application definitions arrive as JSON, YAML or TOML, picked by file
//! extension. Snapshots are always JSON, matching what the UI posts.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::aggregates::ApplicationDefinition;
use crate::domain::value_objects::RawFormData;
use crate::error::{FormsError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
    Toml,
}

impl DefinitionFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(FormsError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

/// Parse a definition without checking it.
pub fn parse_definition(content: &str, format: DefinitionFormat) -> Result<ApplicationDefinition> {
    let parsed = match format {
        DefinitionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DefinitionFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        DefinitionFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| FormsError::Parse {
        format: format.name(),
        message,
    })
}

/// Read, parse and [`check`](ApplicationDefinition::check) a definition file.
pub fn load_definition(path: impl AsRef<Path>) -> Result<ApplicationDefinition> {
    let path = path.as_ref();
    let format = DefinitionFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let definition = parse_definition(&content, format)?;
    definition.check()?;
    tracing::debug!(
        path = %path.display(),
        application_id = %definition.id,
        sections = definition.sections.len(),
        "loaded application definition"
    );
    Ok(definition)
}

/// A flat raw snapshot: `{"field_id": value, ...}`.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<RawFormData> {
    read_json(path.as_ref())
}

/// Raw snapshots keyed by section id: `{"section_id": {"field_id": value}}`.
pub fn load_section_snapshots(path: impl AsRef<Path>) -> Result<HashMap<String, RawFormData>> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| FormsError::Parse {
        format: "json",
        message: e.to_string(),
    })
}
