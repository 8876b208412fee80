//! Engine configuration.
//!
//! Everything a catalog needs beyond its compiled patterns lives here and
//! is passed in explicitly; there is no process-wide configuration state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path of the protocol-cache snapshot consulted by the
    /// documentation rule.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Path fragments excluded from traversal by callers.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Documentation-rule configuration.
    #[serde(default)]
    pub documentation: DocumentationConfig,

    /// Case-indent configuration.
    #[serde(default)]
    pub case_indent: CaseIndentConfig,
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Configuration for the documentation-requirement rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationConfig {
    /// Patterns naming external contracts whose conforming types are
    /// exempt from documentation requirements.
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            denylist: default_denylist(),
        }
    }
}

/// Configuration for the case-indent sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseIndentConfig {
    /// Required indentation step between a construct header and its
    /// member lines.
    #[serde(default = "default_indent_step")]
    pub indent_step: usize,
}

impl Default for CaseIndentConfig {
    fn default() -> Self {
        Self {
            indent_step: default_indent_step(),
        }
    }
}

fn default_indent_step() -> usize {
    4
}

/// Delegate and data-source contracts of the host frameworks. Conforming
/// types document the contract, not each member.
fn default_denylist() -> Vec<String> {
    [
        "^ABKInAppMessageControllerDelegate$",
        "^CardIOPaymentViewControllerDelegate$",
        "^CLLocationManagerDelegate$",
        "^GMSMapViewDelegate$",
        "^TuneDelegate$",
        "^UI\\w+(Delegate|DataSource)\\w*$",
        "^UISearchResultsUpdating$",
    ]
    .iter()
    .map(|pattern| (*pattern).to_string())
    .collect()
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_denylist_and_step() {
        let config = Config::default();
        assert_eq!(config.case_indent.indent_step, 4);
        assert!(config
            .documentation
            .denylist
            .iter()
            .any(|p| p.contains("Delegate")));
        assert!(config.cache_path.is_none());
    }

    #[test]
    fn parses_partial_toml() {
        let config = Config::parse(
            r#"
cache_path = "/tmp/protocols.json"

[case_indent]
indent_step = 2
"#,
        )
        .expect("valid toml");
        assert_eq!(config.cache_path.as_deref(), Some(Path::new("/tmp/protocols.json")));
        assert_eq!(config.case_indent.indent_step, 2);
        // Untouched sections keep their defaults.
        assert!(!config.documentation.denylist.is_empty());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("cache_path = [broken").is_err());
    }
}
