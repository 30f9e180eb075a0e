//! jazik configuration
//!
//! Loaded from `config.toml`; a missing file or missing keys fall back to
//! defaults.

use crate::adaptive::AdaptiveConfig;
use crate::error::{JazikError, Result};
use crate::grammar::{GrammarValidator, Lexicon};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "config.toml";

/// Written by `jazik init`; parses to `JazikConfig::default()`
pub const DEFAULT_CONFIG: &str = r#"# jazik configuration

[adaptive]
# Number of recent answers used for rolling accuracy
window_size = 5
# Accuracy at or above which difficulty steps up (0-1)
increase_threshold = 0.8
# Accuracy at or below which difficulty steps down (0-1)
decrease_threshold = 0.4
# Maximum number of difficulty changes per session
max_adjustments = 3
# Answers required before any adjustment
warmup_period = 3

[validation]
# Report adjectives missing from the lexicon as errors
strict = false
# Extra lexicon JSON overlaid on the builtin one, relative to this file
# lexicon_path = "lexicon.json"
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JazikConfig {
    pub adaptive: AdaptiveConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report adjectives missing from the lexicon as errors
    pub strict: bool,
    /// Extra lexicon file overlaid on the builtin one
    pub lexicon_path: Option<PathBuf>,
}

impl ValidationConfig {
    /// Builtin lexicon plus the configured overlay, if any
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let builtin = Lexicon::builtin();
        match &self.lexicon_path {
            Some(path) => Ok(builtin.merged(Lexicon::load(path)?)),
            None => Ok(builtin),
        }
    }

    pub fn build_validator(&self) -> Result<GrammarValidator> {
        let lexicon = self.load_lexicon()?;
        Ok(if self.strict {
            GrammarValidator::strict(lexicon)
        } else {
            GrammarValidator::new(lexicon)
        })
    }
}

/// Load configuration from file
pub fn load_config(config_path: &Path) -> Result<JazikConfig> {
    if !config_path.exists() {
        debug!("No config at {:?}, using defaults", config_path);
        return Ok(JazikConfig::default());
    }

    let content = std::fs::read_to_string(config_path).map_err(|source| JazikError::File {
        path: config_path.to_path_buf(),
        source,
    })?;
    let mut config: JazikConfig = toml::from_str(&content)?;

    // relative lexicon paths are relative to the config file
    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    config.validation.lexicon_path = config.validation.lexicon_path.map(|path| {
        if path.is_relative() {
            base.join(path)
        } else {
            path
        }
    });
    Ok(config)
}

/// Write the commented default config, creating parent directories
pub fn write_default_config(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

/// Save configuration to file
pub fn save_config(config: &JazikConfig, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(config_path, content)?;
    Ok(())
}

/// Config file used when none is given: `.jazik/config.toml` in the working
/// directory if that directory exists, otherwise under the home directory
pub fn default_config_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let project_dir = cwd.join(".jazik");
    if project_dir.exists() {
        return Ok(project_dir.join(CONFIG_FILE));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        JazikError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not find home directory",
        ))
    })?;
    Ok(home.join(".jazik").join(CONFIG_FILE))
}
