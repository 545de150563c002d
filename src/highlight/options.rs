//! Extension options.
//!
//! [`Options`] is built once, validated, and never changed afterwards. It is
//! assembled either from a sequence of [`HighlightOption`]s applied in order
//! (later ones replace what earlier ones set) or from a loaded
//! [`HighlightingConfig`].

use nb_highlight_config::{DEFAULT_STYLE, FormatOption, HighlightingConfig};

use super::error::HighlightError;
use super::markup::Engine;

/// One construction-time setting. This is the complete set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightOption {
    /// Guess the grammar of code cells that declare no language and carry no
    /// recognised MIME type. Off by default.
    GuessLanguage(bool),
    /// Visual style (theme) name. Must be known to the engine.
    Style(String),
    /// Formatter settings, passed to the markup engine unchanged.
    FormatOptions(Vec<FormatOption>),
}

/// Frozen extension settings, shared read-only by every render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    guess_language: bool,
    style: String,
    format_options: Vec<FormatOption>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            guess_language: false,
            style: DEFAULT_STYLE.to_string(),
            format_options: Vec::new(),
        }
    }
}

impl Options {
    /// Apply `options` in order on top of the defaults, then validate.
    ///
    /// Fails with [`HighlightError::UnknownStyle`] when the style is not
    /// shipped by the engine, and with [`HighlightError::InvalidFormatOption`]
    /// for a zero tab width. Nothing is silently replaced by a default.
    pub fn new(options: impl IntoIterator<Item = HighlightOption>) -> Result<Self, HighlightError> {
        let mut built = Self::default();
        for option in options {
            built.apply(option);
        }
        built.validate()?;
        Ok(built)
    }

    /// Build options from a loaded configuration file.
    pub fn from_config(config: &HighlightingConfig) -> Result<Self, HighlightError> {
        Self::new([
            HighlightOption::GuessLanguage(config.guess_language),
            HighlightOption::Style(config.style.clone()),
            HighlightOption::FormatOptions(config.format_options.clone()),
        ])
    }

    fn apply(&mut self, option: HighlightOption) {
        match option {
            HighlightOption::GuessLanguage(enabled) => self.guess_language = enabled,
            HighlightOption::Style(name) => self.style = name,
            HighlightOption::FormatOptions(opts) => self.format_options = opts,
        }
    }

    fn validate(&self) -> Result<(), HighlightError> {
        let engine = Engine::shared();
        if engine.theme(&self.style).is_none() {
            debug_error!("HIGHLIGHT", "unknown style {:?}", self.style);
            return Err(HighlightError::UnknownStyle {
                name: self.style.clone(),
                available: engine.style_names(),
            });
        }
        if self
            .format_options
            .iter()
            .any(|o| matches!(o, FormatOption::TabWidth(0)))
        {
            return Err(HighlightError::InvalidFormatOption(
                "tab_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether content guessing is enabled for code cells.
    pub fn guess_language(&self) -> bool {
        self.guess_language
    }

    /// The validated style name.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Formatter settings, in the order given.
    pub fn format_options(&self) -> &[FormatOption] {
        &self.format_options
    }
}
