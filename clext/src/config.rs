//! Configuration module for the clext CLI.
//!
//! Settings come from a `clext.toml` file when one is found; every field
//! has a default, so a partial file is fine. Command-line flags override
//! the loaded values.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{ClextError, Result};
use crate::report::ReportFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clext.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Report selection.
    #[serde(default)]
    pub output: OutputConfig,

    /// Table layout.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Which report to produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Report format.
    #[serde(default)]
    pub format: ReportFormat,

    /// Print the token total after the table.
    #[serde(default = "default_true")]
    pub summary: bool,
}

/// Column layout of the table report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Lexemes longer than this many characters are shortened.
    #[serde(default = "default_max_lexeme_len")]
    pub max_lexeme_len: usize,

    /// Width of the category column.
    #[serde(default = "default_category_width")]
    pub category_width: usize,

    /// Length of the horizontal rules.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_lexeme_len() -> usize {
    clex_lex::DISPLAY_LEXEME_MAX
}

fn default_category_width() -> usize {
    15
}

fn default_rule_width() -> usize {
    60
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            summary: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: default_max_lexeme_len(),
            category_width: default_category_width(),
            rule_width: default_rule_width(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then `~/.config/clext`, then the
    /// platform configuration directory. Returns the defaults if no file is
    /// found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ClextError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Rejects layouts the table renderer cannot honor.
    fn validate(&self) -> Result<()> {
        if self.display.max_lexeme_len < 4 {
            return Err(ClextError::Config(format!(
                "display.max_lexeme_len must be at least 4, got {}",
                self.display.max_lexeme_len
            )));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
