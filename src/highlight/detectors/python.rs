//! Built-in Python detection rules.
//!
//! A `python` shebang is definitive. Function and class headers ending in a
//! colon and import statements anchor the guess; block headers, `self.`
//! access, f-strings and comprehensions add supporting weight.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in Python detector.
pub fn create_python_detector() -> RegexDetector {
    RegexDetectorBuilder::new("python")
        .rule(rule(
            "py_shebang",
            r"^#!.*\bpython",
            1.0,
            RuleScope::FirstLines(1),
            RuleStrength::Definitive,
        ))
        .rule(rule(
            "py_def",
            r"^\s*(async\s+)?def\s+\w+\s*\(.*\)\s*(->\s*[^:]+)?:\s*(#.*)?$",
            0.4,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "py_import",
            r"^\s*(import\s+[\w.]+(\s+as\s+\w+)?(\s*,\s*[\w.]+)*|from\s+[\w.]+\s+import\s+.+)\s*$",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "py_class",
            r"^\s*class\s+\w+(\(.*\))?:\s*$",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "py_block",
            r"^\s*(if|elif|else|while|for|with|try|except|finally)\b.*:\s*$",
            0.15,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "py_self",
            r"\bself\.\w+",
            0.1,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "py_fstring",
            r#"\bf["'][^"']*\{"#,
            0.1,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "py_comprehension",
            r"\[.+\bfor\s+\w+\s+in\s+.+\]",
            0.1,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .build()
}
