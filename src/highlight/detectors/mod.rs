//! Built-in grammar detectors for content guessing.
//!
//! Each submodule builds one `RegexDetector` whose grammar identifier is
//! known to the markup engine.

pub mod javascript;
pub mod json;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod shell;
pub mod sql;
pub mod xml;
