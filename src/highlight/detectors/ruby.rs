//! Built-in Ruby detection rules.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in Ruby detector.
///
/// `def` lines without a trailing colon and bare `end` lines tell Ruby apart
/// from Python.
pub fn create_ruby_detector() -> RegexDetector {
    RegexDetectorBuilder::new("ruby")
        .rule(rule(
            "rb_shebang",
            r"^#!.*\bruby\b",
            1.0,
            RuleScope::FirstLines(1),
            RuleStrength::Definitive,
        ))
        .rule(rule(
            "rb_def",
            r"^\s*def\s+(self\.)?\w+[?!]?(\s*\([^)]*\))?\s*$",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "rb_end",
            r"^\s*end\s*$",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "rb_require",
            r#"^\s*require(_relative)?\s+['"]"#,
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "rb_block",
            r"\bdo(\s*\|[^|]*\|)?\s*$",
            0.2,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "rb_puts",
            r"^\s*puts\s",
            0.15,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "rb_ivar",
            r"@\w+\s*=",
            0.1,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::regex_detector::Sample;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(create_ruby_detector().detection_rules().len(), 7);
    }

    #[test]
    fn test_method_definition() {
        let detector = create_ruby_detector();
        let sample = Sample::new("def greet(name)\n  puts \"Hello, #{name}\"\nend\n");
        let result = detector.detect(&sample).unwrap();
        assert_eq!(result.matched_rules, vec!["rb_def", "rb_end", "rb_puts"]);
    }

    #[test]
    fn test_python_def_is_not_ruby() {
        let detector = create_ruby_detector();
        let sample = Sample::new("def greet(name):\n    print(name)\n");
        assert!(detector.detect(&sample).is_none());
    }
}
