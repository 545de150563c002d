//! An owned [`Cell`] implementation.

use super::traits::Cell;
use super::types::CellType;

/// A self-contained notebook cell.
///
/// Hosts with their own document model implement [`Cell`] directly; this
/// type covers everyone else (and the tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookCell {
    /// The cell's classification.
    pub cell_type: CellType,
    /// MIME type of `source`.
    pub mime: String,
    /// Raw content.
    pub source: Vec<u8>,
    /// Declared language (code cells only).
    pub language: Option<String>,
    /// Execution count (execute results only).
    pub execution_count: Option<u32>,
}

impl NotebookCell {
    /// A code cell. Pass `None` for `language` when the notebook declares none.
    pub fn code(source: impl Into<Vec<u8>>, language: Option<&str>, mime: &str) -> Self {
        Self {
            cell_type: CellType::Code,
            mime: mime.to_string(),
            source: source.into(),
            language: language.map(str::to_string),
            execution_count: None,
        }
    }

    /// A `display_data` output.
    pub fn display_data(content: impl Into<Vec<u8>>, mime: &str) -> Self {
        Self {
            cell_type: CellType::DisplayData,
            mime: mime.to_string(),
            source: content.into(),
            language: None,
            execution_count: None,
        }
    }

    /// An `execute_result` output.
    pub fn execute_result(content: impl Into<Vec<u8>>, mime: &str, execution_count: u32) -> Self {
        Self {
            cell_type: CellType::ExecuteResult,
            mime: mime.to_string(),
            source: content.into(),
            language: None,
            execution_count: Some(execution_count),
        }
    }

    /// A cell of any other type.
    pub fn other(cell_type: CellType, content: impl Into<Vec<u8>>, mime: &str) -> Self {
        Self {
            cell_type,
            mime: mime.to_string(),
            source: content.into(),
            language: None,
            execution_count: None,
        }
    }
}

impl Cell for NotebookCell {
    fn cell_type(&self) -> CellType {
        self.cell_type
    }

    fn mime_type(&self) -> &str {
        &self.mime
    }

    fn text(&self) -> &[u8] {
        &self.source
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
