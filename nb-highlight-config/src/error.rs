//! Typed error variants for the nb-highlight-config crate.

use std::path::PathBuf;

/// Errors that can occur when loading a highlighting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred reading the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config contained invalid YAML.
    #[error("YAML parse error in config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The config contained invalid TOML.
    #[error("TOML parse error in config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported config format for {}: expected .yaml, .yml or .toml", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = ConfigError::UnsupportedFormat(PathBuf::from("highlight.json"));
        assert_eq!(
            err.to_string(),
            "unsupported config format for highlight.json: expected .yaml, .yml or .toml"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConfigError = io.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("I/O error reading config"));
    }
}
