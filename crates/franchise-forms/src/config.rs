//! Engine configuration
//!
//! ```toml
//! [submission]
//! min_progress = 90
//!
//! [display]
//! date_format = "%-m/%-d/%Y"
//! list_separator = ", "
//! ```

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FormsError, Result};

/// Overall progress an otherwise valid application needs before it may be
/// submitted. Leaves room for hidden required fields that hold section
/// progress below 100.
pub const DEFAULT_MIN_SUBMIT_PROGRESS: u8 = 90;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub submission: SubmissionPolicy,
    pub display: DisplaySettings,
}

/// Submission gate applied by `ApplicationValidator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionPolicy {
    /// 0 to 100.
    pub min_progress: u8,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            min_progress: DEFAULT_MIN_SUBMIT_PROGRESS,
        }
    }
}

/// Rendering parameters for `ValueFormatter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// chrono strftime format for date answers.
    pub date_format: String,
    /// Joins the labels of a multi-select answer.
    pub list_separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            list_separator: ", ".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Like [`EngineConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| FormsError::Parse {
            format: "toml",
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FormsError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.submission.min_progress > 100 {
            return Err(FormsError::Config(format!(
                "submission.min_progress must be at most 100, got {}",
                self.submission.min_progress
            )));
        }
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FormsError::Config(format!(
                "display.date_format is not a valid strftime format: {}",
                self.display.date_format
            )));
        }
        Ok(())
    }
}
