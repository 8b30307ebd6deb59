//! Configuration types for effect-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Severity;

/// Top-level configuration for effect-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "all").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit code (default: "error").
    /// Diagnostics at or above this severity fail the check.
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
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

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Resolves the `fail_on` threshold, defaulting to [`Severity::Error`].
    #[must_use]
    pub fn fail_on_severity(&self) -> Severity {
        match self.fail_on.as_deref() {
            Some("info") => Severity::Info,
            Some("warning") => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled (default: true).
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for the rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("failed to read config at {path}: {source}")]
    Io {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid TOML.
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
    fn parses_full_config() {
        let config = Config::parse(
            r#"
preset = "recommended"
fail_on = "warning"

[analyzer]
root = "./src"
exclude = ["**/vendor/**"]

[rules.named-effect-with-cleanup]
enabled = true
severity = "error"
"#,
        )
        .unwrap();

        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert_eq!(config.fail_on_severity(), Severity::Warning);
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(
            config.rule_severity("named-effect-with-cleanup"),
            Some(Severity::Error)
        );
        assert!(config.is_rule_enabled("named-effect-with-cleanup"));
    }

    #[test]
    fn unknown_rules_are_enabled_by_default() {
        let config = Config::default();
        assert!(config.is_rule_enabled("named-effect-with-cleanup"));
        assert_eq!(config.rule_severity("named-effect-with-cleanup"), None);
    }

    #[test]
    fn disabled_rule() {
        let config = Config::parse("[rules.named-effect-with-cleanup]\nenabled = false\n").unwrap();
        assert!(!config.is_rule_enabled("named-effect-with-cleanup"));
    }

    #[test]
    fn fail_on_defaults_to_error() {
        assert_eq!(Config::default().fail_on_severity(), Severity::Error);
        let config = Config::parse("fail_on = \"bogus\"\n").unwrap();
        assert_eq!(config.fail_on_severity(), Severity::Error);
    }

    #[test]
    fn default_excludes_cover_node_modules() {
        let config = Config::default();
        assert!(config
            .analyzer
            .exclude
            .iter()
            .any(|p| p.contains("node_modules")));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(Config::parse("preset = [").is_err());
    }
}
