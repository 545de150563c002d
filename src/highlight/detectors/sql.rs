//! Built-in SQL detection rules (case-insensitive).

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in SQL detector.
pub fn create_sql_detector() -> RegexDetector {
    RegexDetectorBuilder::new("sql")
        .rule(rule(
            "sql_statement",
            r"(?i)^\s*(select\s+.+|insert\s+into|update\s+\w+\s+set|delete\s+from|create\s+(table|view|index|schema)|drop\s+(table|view|index)|alter\s+table)\b",
            0.5,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "sql_from",
            r"(?i)\bfrom\s+[\w.]+",
            0.15,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "sql_clause",
            r"(?i)\b(where|group\s+by|order\s+by|having|inner\s+join|left\s+join|limit)\b",
            0.15,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "sql_terminator",
            r";\s*$",
            0.05,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .build()
}
