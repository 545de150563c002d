//! Syntax-aware rendering of notebook cells.
//!
//! `nb-highlight` plugs into a notebook-to-HTML renderer and replaces the
//! plain-text rendering of code cells and of JSON/XML data outputs with
//! highlighted markup. The host pipeline owns the document model and calls
//! [`CellRenderer::render_cell`] once per cell; the extension either writes
//! markup and reports [`RenderStatus::Handled`] or abstains with
//! [`RenderStatus::Unhandled`].
//!
//! ```no_run
//! use nb_highlight::{CellRenderer, Highlighting, NotebookCell};
//!
//! # fn main() -> Result<(), nb_highlight::HighlightError> {
//! let highlighting = Highlighting::builder()
//!     .guess_language(true)
//!     .style("base16-ocean.dark")
//!     .build()?;
//!
//! let cell = NotebookCell::code("print('hi')", Some("python"), "text/x-python");
//! let mut out = Vec::new();
//! highlighting.render_cell(&cell, &mut out)?;
//! # Ok(())
//! # }
//! ```

/// Crate version, for embedders that report extension versions.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
mod debug;

pub mod highlight;

pub use highlight::*;
pub use nb_highlight_config::{ConfigError, DEFAULT_STYLE, FormatOption, HighlightingConfig};
