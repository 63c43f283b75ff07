//! CLI Configuration
//!
//! Resolves which engine config file to use: `--config` /
//! `FRANCHISE_FORMS_CONFIG`, else `~/.franchise-forms/config.toml`.

use franchise_forms::EngineConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, String> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let home = dirs::home_dir().ok_or("Cannot find home directory")?;
    Ok(home.join(".franchise-forms").join("config.toml"))
}

/// Load the effective config.
///
/// A missing file under the home directory means defaults. A path given
/// with `--config` or `FRANCHISE_FORMS_CONFIG` must exist.
pub fn load(explicit: Option<&Path>) -> Result<EngineConfig, String> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(format!("config file not found: {}", path.display()));
        }
        return EngineConfig::load(path).map_err(|e| format!("{}: {}", path.display(), e));
    }

    let path = match config_path(None) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(error = %e, "no config location, using defaults");
            return Ok(EngineConfig::default());
        }
    };
    EngineConfig::load_or_default(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn save(config: &EngineConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let content = config.to_toml_string().map_err(|e| e.to_string())?;
    fs::write(path, content).map_err(|e| e.to_string())
}
