//! Formatter settings forwarded to the markup engine.

use serde::{Deserialize, Serialize};

/// A single formatter setting.
///
/// The extension never interprets these; they are handed to the markup
/// generator as-is. When the same setting appears more than once, the last
/// occurrence wins.
///
/// In a config file each entry is a one-key map; [`crate::HighlightingConfig`]
/// reads YAML lists of them through `singleton_map_recursive`:
///
/// ```yaml
/// format_options:
///   - classes: true
///   - line_numbers: true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatOption {
    /// Emit CSS classes instead of inline `style` attributes.
    Classes(bool),
    /// Prefix each line with its line number.
    LineNumbers(bool),
    /// Number assigned to the first line when line numbers are shown.
    BaseLineNumber(usize),
    /// Expand tabs to this many spaces before lexing. Must be non-zero.
    TabWidth(usize),
    /// Emit only the token spans, without the enclosing `<pre>`.
    PreventSurroundingPre(bool),
}
