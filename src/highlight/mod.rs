//! Notebook cell highlighting.
//!
//! Decides, per cell, which grammar and style to apply and produces the
//! highlighted markup. Built on the same split the cells themselves suggest:
//! resolution is pure and cheap, markup generation is delegated to the
//! engine.
//!
//! # Module Structure
//!
//! ## Cell model
//! - [`types`]: Shared data types: `CellType`, `Resolution`, `Evidence`,
//!   `RenderStatus`, detection rules and guesses.
//! - [`traits`]: `Cell` (implemented by the host document model) and
//!   `CellRenderer` (implemented by this extension).
//! - [`cell`]: `NotebookCell`, an owned `Cell` for embedders and tests.
//!
//! ## Resolution Layer
//! - [`mime`]: MIME pattern matching with a single leading wildcard segment.
//! - [`resolver`]: `Resolver`: explicit language > MIME match > content
//!   guess > unresolved.
//! - [`regex_detector`]: Weighted regex detector for one grammar.
//! - [`detectors`]: Built-in per-language detectors.
//! - [`guesser`]: `GrammarGuesser`: runs all detectors, keeps the best guess.
//!
//! ## Rendering Layer
//! - [`options`]: Immutable `Options` and the `HighlightOption` set.
//! - [`themes`]: Styles registered on top of the engine's bundled set.
//! - [`markup`]: `Engine` and `highlight()`: lexing and HTML formatting.
//! - [`extension`]: `Highlighting`: the adapter the host pipeline invokes.
//!
//! ## Errors
//! - [`error`]: `HighlightError`.

pub mod cell;
pub mod detectors;
pub mod error;
pub mod extension;
pub mod guesser;
pub mod markup;
pub mod mime;
pub mod options;
pub mod regex_detector;
pub mod resolver;
pub mod themes;
pub mod traits;
pub mod types;

pub use cell::*;
pub use error::*;
pub use extension::*;
pub use guesser::*;
pub use markup::*;
pub use mime::MimePattern;
pub use options::*;
pub use regex_detector::*;
pub use resolver::*;
pub use traits::*;
pub use types::*;
