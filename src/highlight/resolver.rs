//! Grammar resolution.
//!
//! Maps a cell to a grammar identifier, or to [`Resolution::Unresolved`].
//! For code cells the signals are tried in a fixed order of decreasing
//! certainty: declared language, MIME type, content guess (only when
//! enabled). Data outputs are matched on MIME type alone.
//!
//! Resolution is a pure function of the cell, the guess flag and the static
//! tables below.

use std::borrow::Cow;

use super::guesser::GrammarGuesser;
use super::mime;
use super::traits::Cell;
use super::types::{CellType, Evidence, Resolution};

/// MIME patterns of code cells, with the grammar each one implies.
/// Checked in order; the first match wins.
pub const CODE_MIME_TYPES: &[(&str, &str)] = &[
    ("text/x-python", "python"),
    ("application/x-python", "python"),
    ("text/x-ipython", "python"),
    ("text/x-rsrc", "r"),
    ("text/javascript", "javascript"),
    ("application/javascript", "javascript"),
    ("application/x-javascript", "javascript"),
    ("text/x-sh", "sh"),
    ("application/x-sh", "sh"),
    ("text/x-shellscript", "sh"),
    ("application/x-shellscript", "sh"),
    ("text/x-csrc", "c"),
    ("text/x-c++src", "cpp"),
    ("text/x-java", "java"),
    ("text/x-go", "go"),
    ("text/x-ruby", "ruby"),
    ("text/x-sql", "sql"),
    ("application/sql", "sql"),
    ("text/rust", "rust"),
    ("text/x-rustsrc", "rust"),
    ("text/markdown", "markdown"),
    ("text/x-markdown", "markdown"),
    ("text/html", "html"),
    ("text/x-yaml", "yaml"),
    ("application/x-yaml", "yaml"),
    ("application/yaml", "yaml"),
    ("text/x-lua", "lua"),
    ("text/x-perl", "perl"),
    ("text/x-php", "php"),
    ("application/x-httpd-php", "php"),
    ("text/x-scala", "scala"),
    ("text/x-haskell", "haskell"),
];

/// Grammar used for JSON outputs.
pub const JSON_GRAMMAR: &str = "json";
/// MIME patterns of JSON outputs.
pub const JSON_MIME_TYPES: &[&str] = &["application/json", "text/json", "application/*+json"];

/// Grammar used for XML outputs.
pub const XML_GRAMMAR: &str = "xml";
/// MIME patterns of XML outputs. `application/*+xml` needs the separate bare
/// `application/xml` entry: the wildcard never matches an empty segment.
pub const XML_MIME_TYPES: &[&str] = &["text/xml", "application/xml", "application/*+xml"];

/// Structured-output families, tested in order.
const OUTPUT_FAMILIES: &[(&[&str], &str)] = &[
    (JSON_MIME_TYPES, JSON_GRAMMAR),
    (XML_MIME_TYPES, XML_GRAMMAR),
];

/// Resolves cells to grammars.
#[derive(Clone, Copy)]
pub struct Resolver<'g> {
    guess_language: bool,
    guesser: &'g GrammarGuesser,
}

impl Resolver<'static> {
    /// A resolver backed by the built-in content classifier.
    pub fn new(guess_language: bool) -> Self {
        Self::with_guesser(guess_language, GrammarGuesser::builtin())
    }
}

impl<'g> Resolver<'g> {
    /// A resolver backed by a custom content classifier.
    pub fn with_guesser(guess_language: bool, guesser: &'g GrammarGuesser) -> Self {
        Self {
            guess_language,
            guesser,
        }
    }

    /// Whether content guessing is enabled.
    pub fn guess_language(&self) -> bool {
        self.guess_language
    }

    /// Decide the grammar for `cell`.
    pub fn resolve(&self, cell: &dyn Cell) -> Resolution {
        let resolution = match cell.cell_type() {
            CellType::Code => self.resolve_code(cell),
            CellType::DisplayData | CellType::ExecuteResult => resolve_output(cell.mime_type()),
            _ => Resolution::Unresolved,
        };
        debug_log!(
            "RESOLVE",
            "{:?} cell (mime={:?}, language={:?}) -> {:?}",
            cell.cell_type(),
            cell.mime_type(),
            cell.language(),
            resolution
        );
        resolution
    }

    fn resolve_code(&self, cell: &dyn Cell) -> Resolution {
        if let Some(language) = cell.language().map(str::trim).filter(|l| !l.is_empty()) {
            return Resolution::resolved(language, Evidence::DeclaredLanguage);
        }

        if let Some(grammar) = mime::lookup(CODE_MIME_TYPES, cell.mime_type()) {
            return Resolution::resolved(*grammar, Evidence::MimeType);
        }

        if !self.guess_language {
            return Resolution::Unresolved;
        }

        let content = cell_text(cell);
        match self.guesser.guess(&content) {
            Some(guess) => Resolution::resolved(guess.grammar, Evidence::ContentGuess),
            None => Resolution::Unresolved,
        }
    }
}

/// Data outputs: MIME type only, first matching family wins.
fn resolve_output(mime_type: &str) -> Resolution {
    OUTPUT_FAMILIES
        .iter()
        .find(|(patterns, _)| mime::matches_any(patterns, mime_type))
        .map_or(Resolution::Unresolved, |(_, grammar)| {
            Resolution::resolved(*grammar, Evidence::MimeType)
        })
}

/// Cell content as text. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn cell_text(cell: &dyn Cell) -> Cow<'_, str> {
    String::from_utf8_lossy(cell.text())
}
