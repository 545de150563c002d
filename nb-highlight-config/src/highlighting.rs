//! Top-level highlighting configuration.
//!
//! Maps to a standalone YAML or TOML file, or to a section embedded in a host
//! application's own config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::FormatOption;

/// Style used when none is configured.
pub const DEFAULT_STYLE: &str = "InspiredGitHub";

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

// ---------------------------------------------------------------------------
// HighlightingConfig
// ---------------------------------------------------------------------------

/// Serializable highlighting settings.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightingConfig {
    /// Guess the grammar from content when a code cell has neither a declared
    /// language nor a recognised MIME type.
    #[serde(default)]
    pub guess_language: bool,

    /// Name of the visual style (theme) handed to the markup engine.
    #[serde(default = "default_style")]
    pub style: String,

    /// Formatter settings, passed through unchanged. Each entry is a one-key
    /// map in both YAML and TOML.
    #[serde(default, with = "serde_yaml_ng::with::singleton_map_recursive")]
    pub format_options: Vec<FormatOption>,
}

impl Default for HighlightingConfig {
    fn default() -> Self {
        Self {
            guess_language: false,
            style: default_style(),
            format_options: Vec::new(),
        }
    }
}

impl HighlightingConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file, choosing the parser from the file extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, `.toml` as TOML. Anything else
    /// is rejected before the file is read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let text = std::fs::read_to_string(path)?;
        let config = parse(&text)?;
        log::debug!(
            "loaded highlighting config from {}: style={}, guess_language={}, {} format option(s)",
            path.display(),
            config.style,
            config.guess_language,
            config.format_options.len()
        );
        Ok(config)
    }
}
