//! Built-in JavaScript detection rules.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in JavaScript detector.
pub fn create_javascript_detector() -> RegexDetector {
    RegexDetectorBuilder::new("javascript")
        .rule(rule(
            "js_shebang",
            r"^#!.*\bnode\b",
            1.0,
            RuleScope::FirstLines(1),
            RuleStrength::Definitive,
        ))
        .rule(rule(
            "js_declaration",
            r"\b(const|let|var)\s+[\w$]+\s*=",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "js_function",
            r"\bfunction\s*[\w$]*\s*\(",
            0.4,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "js_module",
            r#"^\s*(import\s+.+\s+from\s+['"]|export\s+(default|const|function|class)\b)|\brequire\(\s*['"]"#,
            0.4,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "js_arrow",
            r"(\([^)]*\)|\b[\w$]+)\s*=>",
            0.2,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "js_console",
            r"\b(console\.\w+|document\.\w+|window\.\w+)",
            0.2,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "js_semicolon",
            r";\s*$",
            0.05,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .build()
}
