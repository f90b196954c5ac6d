//! Configuration schema for patchbump
//!
//! Global configuration is stored at `~/.config/patchbump/config.toml`;
//! a project may override it with a `.patchbump.toml`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Command output settings
    pub output: OutputConfig,
}

/// General application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format for diagnostics on stderr
    pub log_format: LogFormat,
}

/// Command output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format when `--format` is not given
    pub format: OutputFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.general.log_format, LogFormat::Text);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn parse_partial_config() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.general.log_format, LogFormat::Text);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(toml::from_str::<Config>("[general]\nlog_format = \"yaml\"\n").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml.contains("log_format = \"text\""));
        assert!(toml.contains("[output]"));
    }
}
