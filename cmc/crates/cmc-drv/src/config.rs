//! Configuration for the scanner driver.
//!
//! Settings come from an optional `cmscan.toml`; command-line flags are
//! applied on top by the binary.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use cmc_lex::{LexerConfig, OverlongPolicy, DEFAULT_MAX_LEXEME_LEN};
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::report::Format;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cmscan.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Maximum characters kept in an identifier or number lexeme.
    #[serde(default = "default_max_lexeme_len")]
    pub max_lexeme_len: usize,

    /// What to do with longer runs.
    #[serde(default)]
    pub overlong: Overlong,
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Token listing format.
    #[serde(default)]
    pub format: Format,
}

/// Config-file spelling of [`OverlongPolicy`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Overlong {
    /// Drop characters past the maximum.
    #[default]
    Truncate,
    /// Report the lexeme as malformed.
    Reject,
}

impl From<Overlong> for OverlongPolicy {
    fn from(value: Overlong) -> Self {
        match value {
            Overlong::Truncate => OverlongPolicy::Truncate,
            Overlong::Reject => OverlongPolicy::Reject,
        }
    }
}

fn default_max_lexeme_len() -> usize {
    DEFAULT_MAX_LEXEME_LEN.get()
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_lexeme_len: default_max_lexeme_len(),
            overlong: Overlong::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/cmscan/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ScanError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScanError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds the lexer configuration, validating the length cap.
    pub fn lexer_config(&self) -> Result<LexerConfig> {
        let max_lexeme_len = NonZeroUsize::new(self.lexer.max_lexeme_len).ok_or_else(|| {
            ScanError::Config("max_lexeme_len must be at least 1".to_string())
        })?;
        Ok(LexerConfig {
            max_lexeme_len,
            overlong: self.lexer.overlong.into(),
        })
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cmscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cmscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
