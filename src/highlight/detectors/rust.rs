//! Built-in Rust detection rules.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in Rust detector.
///
/// `fn` items, `use` paths and type definitions anchor the guess; `let mut`,
/// macros and `&mut`/`&self` references support it.
pub fn create_rust_detector() -> RegexDetector {
    RegexDetectorBuilder::new("rust")
        .rule(rule(
            "rs_fn",
            r"^\s*(pub(\([\w:]+\))?\s+)?(async\s+)?(unsafe\s+)?fn\s+\w+\s*(<[^>]*>)?\s*\(",
            0.4,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "rs_use",
            r"^\s*(pub\s+)?use\s+[\w:]+(::\{[^}]*\}|::\*)?\s*;",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "rs_item",
            r"^\s*(pub(\([\w:]+\))?\s+)?(struct|enum|trait|impl|mod)\b",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "rs_let",
            r"\blet\s+(mut\s+)?\w+\s*(:\s*[\w<>&']+\s*)?=",
            0.15,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "rs_macro",
            r"\b(println|eprintln|format|vec|assert|assert_eq|panic|write|writeln)!\s*[\(\[]",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "rs_ref",
            r"&(mut\s+|'\w+\s+)?self\b|&mut\s+\w+",
            0.1,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .build()
}
