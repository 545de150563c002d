//! Built-in JSON detection rules.
//!
//! A whole-block object or array anchors the guess; quoted keys and JSON
//! literals support it.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in JSON detector.
pub fn create_json_detector() -> RegexDetector {
    RegexDetectorBuilder::new("json")
        .rule(rule(
            "json_container",
            r"(?s)\A\s*(\{\s*(\x22.*)?\}|\[.*\])\s*\z",
            0.4,
            RuleScope::FullBlock,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "json_key",
            r#""[^"\\]*(\\.[^"\\]*)*"\s*:"#,
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "json_literal",
            r":\s*(true|false|null|-?\d+(\.\d+)?([eE][+-]?\d+)?)\s*[,}\]]?\s*$|:\s*(true|false|null)\b",
            0.2,
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
        assert_eq!(create_json_detector().detection_rules().len(), 3);
    }

    #[test]
    fn test_single_line_object() {
        let detector = create_json_detector();
        let sample = Sample::new(r#"{"name": "John", "age": 30, "car": null}"#);
        let result = detector.detect(&sample).unwrap();
        assert_eq!(
            result.matched_rules,
            vec!["json_container", "json_key", "json_literal"]
        );
        assert!((result.confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_pretty_printed_array() {
        let detector = create_json_detector();
        let sample = Sample::new("[\n  {\"id\": 1},\n  {\"id\": 2}\n]\n");
        let result = detector.detect(&sample).unwrap();
        assert!(result.matched_rules.contains(&"json_container".to_string()));
    }

    #[test]
    fn test_code_block_is_not_json() {
        let detector = create_json_detector();
        assert!(detector.detect(&Sample::new("{ x = 1; }")).is_none());
        assert!(detector.detect(&Sample::new("name: value")).is_none());
    }
}
