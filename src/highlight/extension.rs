//! The extension the host pipeline holds and calls once per cell.

use std::io::Write;

use nb_highlight_config::{FormatOption, HighlightingConfig};

use super::error::HighlightError;
use super::markup::{self, Engine};
use super::options::{HighlightOption, Options};
use super::resolver::{Resolver, cell_text};
use super::traits::{Cell, CellRenderer};
use super::types::{RenderStatus, Resolution};

/// Syntax highlighting for code cells and JSON/XML outputs.
///
/// Immutable after construction; share one instance across renderers and
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Highlighting {
    options: Options,
}

impl Highlighting {
    /// Construct from a sequence of options applied in order.
    pub fn new(options: impl IntoIterator<Item = HighlightOption>) -> Result<Self, HighlightError> {
        Ok(Self::with_options(Options::new(options)?))
    }

    /// Start a builder with default settings.
    pub fn builder() -> HighlightingBuilder {
        HighlightingBuilder::default()
    }

    /// Construct from a loaded configuration file.
    pub fn from_config(config: &HighlightingConfig) -> Result<Self, HighlightError> {
        Ok(Self::with_options(Options::from_config(config)?))
    }

    fn with_options(options: Options) -> Self {
        debug_info!(
            "HIGHLIGHT",
            "highlighting enabled: style={}, guess_language={}, {} format option(s)",
            options.style(),
            options.guess_language(),
            options.format_options().len()
        );
        Self { options }
    }

    /// The frozen settings.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Decide the grammar for `cell` without rendering anything.
    pub fn resolve(&self, cell: &dyn Cell) -> Resolution {
        Resolver::new(self.options.guess_language()).resolve(cell)
    }

    /// CSS for the configured style; needed when `FormatOption::Classes(true)` is set.
    pub fn stylesheet(&self) -> Result<String, HighlightError> {
        Engine::shared().stylesheet(self.options.style())
    }
}

impl CellRenderer for Highlighting {
    fn render_cell(
        &self,
        cell: &dyn Cell,
        out: &mut dyn Write,
    ) -> Result<RenderStatus, HighlightError> {
        let Resolution::Resolved { grammar, via } = self.resolve(cell) else {
            return Ok(RenderStatus::Unhandled);
        };

        let markup = markup::highlight(&grammar, &cell_text(cell), &self.options).inspect_err(
            |e| debug_error!("HIGHLIGHT", "{grammar} (via {via:?}) failed: {e}"),
        )?;
        out.write_all(markup.as_bytes())?;
        Ok(RenderStatus::Handled)
    }
}

/// Chained-setter construction of [`Highlighting`].
///
/// Each setter records one [`HighlightOption`]; `build` applies them in call
/// order and validates the result.
#[derive(Debug, Clone, Default)]
pub struct HighlightingBuilder {
    options: Vec<HighlightOption>,
}

impl HighlightingBuilder {
    /// Enable or disable content guessing for code cells.
    pub fn guess_language(self, enabled: bool) -> Self {
        self.option(HighlightOption::GuessLanguage(enabled))
    }

    /// Select the visual style by name.
    pub fn style(self, name: impl Into<String>) -> Self {
        self.option(HighlightOption::Style(name.into()))
    }

    /// Set the formatter settings, replacing any set earlier.
    pub fn format_options(self, options: impl IntoIterator<Item = FormatOption>) -> Self {
        self.option(HighlightOption::FormatOptions(options.into_iter().collect()))
    }

    /// Record an arbitrary option.
    pub fn option(mut self, option: HighlightOption) -> Self {
        self.options.push(option);
        self
    }

    /// Apply the recorded options and validate them.
    pub fn build(self) -> Result<Highlighting, HighlightError> {
        Highlighting::new(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::cell::NotebookCell;
    use crate::highlight::types::{CellType, Evidence};

    fn render(highlighting: &Highlighting, cell: &NotebookCell) -> (RenderStatus, String) {
        let mut out = Vec::new();
        let status = highlighting.render_cell(cell, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_unresolved_writes_nothing() {
        let cell = NotebookCell::other(CellType::Markdown, "# Title", "text/markdown");
        let (status, out) = render(&Highlighting::default(), &cell);
        assert_eq!(status, RenderStatus::Unhandled);
        assert!(out.is_empty());
    }

    #[test]
    fn test_resolved_writes_markup() {
        let cell = NotebookCell::code("x = 1\n", Some("python"), "text/x-python");
        let (status, out) = render(&Highlighting::default(), &cell);
        assert_eq!(status, RenderStatus::Handled);
        assert!(out.starts_with("<pre"));
    }

    #[test]
    fn test_unknown_declared_language_is_error() {
        let cell = NotebookCell::code("x", Some("klingon"), "text/plain");
        let mut out = Vec::new();
        let err = Highlighting::default()
            .render_cell(&cell, &mut out)
            .unwrap_err();
        assert!(matches!(err, HighlightError::UnknownGrammar(g) if g == "klingon"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_is_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let cell = NotebookCell::display_data("{}", "application/json");
        let err = Highlighting::default()
            .render_cell(&cell, &mut Broken)
            .unwrap_err();
        assert!(matches!(err, HighlightError::Io(_)));
    }

    #[test]
    fn test_builder_order() {
        let highlighting = Highlighting::builder()
            .style("Solarized (dark)")
            .guess_language(true)
            .format_options([FormatOption::Classes(true)])
            .style("base16-ocean.dark")
            .build()
            .unwrap();
        let options = highlighting.options();
        assert!(options.guess_language());
        assert_eq!(options.style(), "base16-ocean.dark");
        assert_eq!(options.format_options(), &[FormatOption::Classes(true)]);
    }

    #[test]
    fn test_builder_rejects_unknown_style() {
        let err = Highlighting::builder().style("monokay").build().unwrap_err();
        assert!(matches!(err, HighlightError::UnknownStyle { .. }));
    }

    #[test]
    fn test_monokai_style_renders() {
        let highlighting = Highlighting::builder().style("monokai").build().unwrap();
        let cell = NotebookCell::code("x = 1\n", Some("python"), "text/x-python");
        let (status, out) = render(&highlighting, &cell);
        assert_eq!(status, RenderStatus::Handled);
        assert!(out.starts_with("<pre style=\"background-color:#272822"));
    }

    #[test]
    fn test_resolve_uses_guess_flag() {
        let cell = NotebookCell::code("def f():\n    return 1\n", None, "text/plain");
        assert_eq!(Highlighting::default().resolve(&cell), Resolution::Unresolved);

        let guessing = Highlighting::builder().guess_language(true).build().unwrap();
        assert_eq!(
            guessing.resolve(&cell).evidence(),
            Some(Evidence::ContentGuess)
        );
    }

    #[test]
    fn test_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Highlighting>();
    }
}
