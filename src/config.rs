//! Runtime configuration
//!
//! Optional TOML file for values the CLI does not expose as flags.
//!
//! ```
//! use wordle_hints::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     max_rounds = 8
//!
//!     [feedback]
//!     exact = "g"
//!     present = "y"
//!     absent = " "
//!
//!     [weights.letter]
//!     e = 20.0
//! "#).unwrap();
//!
//! assert_eq!(config.max_rounds, 8);
//! assert_eq!(config.symbols().unwrap().absent, ' ');
//! ```

use crate::core::FeedbackSymbols;
use crate::ranking::LetterWeights;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Guesses allowed per game
    pub max_rounds: usize,

    pub archive: ArchiveConfig,

    pub feedback: FeedbackConfig,

    pub weights: WeightsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rounds: 6,
            archive: ArchiveConfig::default(),
            feedback: FeedbackConfig::default(),
            weights: WeightsConfig::default(),
        }
    }
}

/// Where and how to fetch past answers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    pub url: String,
    /// Heading text that precedes the answer list
    pub needle: String,
    /// Heading element name
    pub tag: String,
    pub timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            url: "https://www.rockpapershotgun.com/wordle-past-answers".to_string(),
            needle: "All Wordle answers".to_string(),
            tag: "h2".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ArchiveConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Symbols used to type feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedbackConfig {
    pub exact: char,
    pub present: char,
    pub absent: char,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        let symbols = FeedbackSymbols::default();
        Self {
            exact: symbols.exact,
            present: symbols.present,
            absent: symbols.absent,
        }
    }
}

/// Per-letter overrides of the frequency tables
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightsConfig {
    pub first: BTreeMap<String, f64>,
    pub letter: BTreeMap<String, f64>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or holds
    /// values that fail validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` if it exists, otherwise the defaults
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for a file that exists.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// `Toml` for malformed input, `Invalid` for values that fail validation.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value can be turned into its runtime type
    ///
    /// # Errors
    ///
    /// `Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::Invalid(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        if self.archive.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "archive.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.archive.needle.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "archive.needle must not be empty".to_string(),
            ));
        }
        let tag = &self.archive.tag;
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Invalid(format!(
                "archive.tag {:?} is not an element name",
                self.archive.tag
            )));
        }
        self.symbols()?;
        self.weights()?;
        Ok(())
    }

    /// Feedback alphabet
    ///
    /// # Errors
    ///
    /// `Invalid` if two verdicts share a symbol.
    pub fn symbols(&self) -> Result<FeedbackSymbols, ConfigError> {
        let FeedbackConfig {
            exact,
            present,
            absent,
        } = self.feedback;
        FeedbackSymbols::new(exact, present, absent)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Frequency tables with any overrides applied
    ///
    /// # Errors
    ///
    /// `Invalid` for a bad letter key or weight.
    pub fn weights(&self) -> Result<LetterWeights, ConfigError> {
        LetterWeights::with_overrides(&self.weights.first, &self.weights.letter)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
