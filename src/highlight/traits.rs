//! Core traits at the boundary with the host renderer.

use std::io::Write;

use super::error::HighlightError;
use super::types::{CellType, RenderStatus};

/// A notebook cell as seen by the extension.
///
/// Implemented by the host document model. The extension only reads cells.
pub trait Cell {
    /// The cell's classification.
    fn cell_type(&self) -> CellType;

    /// The MIME type of the cell content (e.g. `"application/json"`).
    fn mime_type(&self) -> &str;

    /// Raw cell content.
    fn text(&self) -> &[u8];

    /// Language declared by the notebook for a code cell, if any.
    fn language(&self) -> Option<&str> {
        None
    }
}

/// An extension invoked by the host pipeline once per cell.
///
/// Implementations must be `Send + Sync`: one instance is shared by every
/// renderer built from the same configuration.
pub trait CellRenderer: Send + Sync {
    /// Render `cell` into `out`, or abstain.
    ///
    /// Returns [`RenderStatus::Unhandled`] without writing anything when the
    /// extension has no opinion about the cell. Errors are never swallowed:
    /// a cell that resolved to a grammar the engine then rejects fails the
    /// render.
    fn render_cell(
        &self,
        cell: &dyn Cell,
        out: &mut dyn Write,
    ) -> Result<RenderStatus, HighlightError>;
}
