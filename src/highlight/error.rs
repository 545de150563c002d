//! Errors surfaced to the host pipeline.

/// Errors that can occur while constructing the extension or rendering a cell.
///
/// An unresolved cell is not an error; see [`super::Resolution::Unresolved`].
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The engine has no grammar for an identifier the resolver produced.
    #[error("unknown grammar: {0}")]
    UnknownGrammar(String),

    /// The configured style is not known to the engine.
    #[error("unknown style {name:?} (available: {})", .available.join(", "))]
    UnknownStyle {
        /// The requested style name.
        name: String,
        /// Styles the engine ships with.
        available: Vec<String>,
    },

    /// A formatter option has a value the formatter cannot use.
    #[error("invalid format option: {0}")]
    InvalidFormatOption(String),

    /// The engine failed while formatting.
    #[error("highlighting engine failed: {0}")]
    Engine(#[from] syntect::Error),

    /// The engine failed while lexing.
    #[error("failed to lex content: {0}")]
    Parsing(#[from] syntect::parsing::ParsingError),

    /// Writing the markup to the render stream failed.
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),

    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] nb_highlight_config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HighlightError::UnknownGrammar("brainfudge".to_string());
        assert_eq!(err.to_string(), "unknown grammar: brainfudge");

        let err = HighlightError::UnknownStyle {
            name: "monokay".to_string(),
            available: vec!["InspiredGitHub".to_string(), "base16-ocean.dark".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown style \"monokay\" (available: InspiredGitHub, base16-ocean.dark)"
        );

        let err = HighlightError::InvalidFormatOption("tab width must be non-zero".to_string());
        assert_eq!(
            err.to_string(),
            "invalid format option: tab width must be non-zero"
        );
    }
}
