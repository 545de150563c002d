//! Core data types for notebook cell highlighting.

/// Classification of a notebook cell.
///
/// Outputs of a code cell (display data, execute results, streams, errors)
/// are rendered as cells of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// A Markdown text cell.
    Markdown,
    /// A raw cell, passed through untouched by the renderer.
    Raw,
    /// Source code.
    Code,
    /// Rich output published by `display()`.
    DisplayData,
    /// The value of the last expression of an executed code cell.
    ExecuteResult,
    /// Text written to stdout/stderr.
    Stream,
    /// A traceback.
    Error,
}

impl CellType {
    /// Whether the resolver ever acts on cells of this type.
    pub fn is_highlightable(self) -> bool {
        matches!(
            self,
            CellType::Code | CellType::DisplayData | CellType::ExecuteResult
        )
    }
}

/// Which signal decided the grammar of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// The cell declared its language explicitly.
    DeclaredLanguage,
    /// The cell's MIME type matched a registered pattern.
    MimeType,
    /// The content classifier picked the grammar.
    ContentGuess,
}

/// Outcome of resolving a cell to a grammar.
///
/// `Unresolved` is not an error: it means "leave this cell alone".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A grammar identifier for the markup engine.
    Resolved {
        /// Grammar identifier, looked up by the engine.
        grammar: String,
        /// The signal that produced it.
        via: Evidence,
    },
    /// No grammar applies.
    Unresolved,
}

impl Resolution {
    pub(crate) fn resolved(grammar: impl Into<String>, via: Evidence) -> Self {
        Resolution::Resolved {
            grammar: grammar.into(),
            via,
        }
    }

    /// The resolved grammar, if any.
    pub fn grammar(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { grammar, .. } => Some(grammar),
            Resolution::Unresolved => None,
        }
    }

    /// The deciding signal, if resolved.
    pub fn evidence(&self) -> Option<Evidence> {
        match self {
            Resolution::Resolved { via, .. } => Some(*via),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// What the extension did with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Markup was written; the host must not render the cell itself.
    Handled,
    /// Nothing was written; the host renders the cell as usual.
    Unhandled,
}

/// Best guess of the content classifier.
#[derive(Debug, Clone)]
pub struct Guess {
    /// Grammar identifier of the winning detector.
    pub grammar: String,
    /// Confidence score from 0.0 to 1.0.
    pub confidence: f32,
    /// Which detection rules matched.
    pub matched_rules: Vec<String>,
}

/// A single regex rule contributing to a grammar guess.
///
/// Note: `Clone` is not derived because `regex::Regex` does not implement `Clone`
/// cheaply. Use `DetectionRule::id` for identification instead.
#[derive(Debug)]
pub struct DetectionRule {
    /// Unique ID for this rule, reported in `Guess::matched_rules`.
    pub id: String,
    /// The compiled regex pattern.
    pub pattern: regex::Regex,
    /// How much confidence this rule contributes when matched (0.0–1.0).
    pub weight: f32,
    /// Where in the content to apply this pattern.
    pub scope: RuleScope,
    /// Whether this rule alone can decide the grammar.
    pub strength: RuleStrength,
}

/// Where in the content a detection rule should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Match against any line.
    AnyLine,
    /// Match only the first N lines (shebangs, declarations).
    FirstLines(usize),
    /// Match against the entire content as a single string (multi-line regex).
    FullBlock,
}

/// How strong a signal a detection rule provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStrength {
    /// A definitive signal: on its own it is sufficient to identify the grammar.
    Definitive,
    /// A strong signal; high confidence on its own, stronger with corroboration.
    Strong,
    /// A supporting signal; never enough on its own.
    Supporting,
}
