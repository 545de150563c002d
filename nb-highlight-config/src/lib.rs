//! Configuration model for the nb-highlight extension.
//!
//! This crate holds the serializable side of the highlighting settings:
//!
//! - [`HighlightingConfig`]: guess-language toggle, style name and formatter options
//! - [`FormatOption`]: the closed set of formatter settings passed through to the
//!   markup engine
//! - [`ConfigError`]: typed failures for loading a config file
//!
//! Validation against the engine (does the style exist?) happens when the
//! extension is constructed from a config, not here.

pub mod error;
pub mod format;
pub mod highlighting;

pub use error::ConfigError;
pub use format::FormatOption;
pub use highlighting::{DEFAULT_STYLE, HighlightingConfig};
