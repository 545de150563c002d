//! Built-in XML detection rules.
//!
//! An `<?xml` declaration is definitive; opening tags anchor, closing and
//! self-closing tags provide supporting evidence.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in XML detector.
pub fn create_xml_detector() -> RegexDetector {
    RegexDetectorBuilder::new("xml")
        .rule(rule(
            "xml_declaration",
            r"^\s*<\?xml\s+",
            1.0,
            RuleScope::FirstLines(3),
            RuleStrength::Definitive,
        ))
        .rule(rule(
            "xml_opening_tag",
            r"^\s*<[a-zA-Z][\w:.-]*(\s+[\w:.-]+\s*=\s*(\x22[^\x22]*\x22|'[^']*'))*\s*/?>",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "xml_closing_tag",
            r"</[a-zA-Z][\w:.-]*>\s*$",
            0.2,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "xml_self_closing",
            r"/>\s*$",
            0.15,
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
        assert_eq!(create_xml_detector().detection_rules().len(), 4);
    }

    #[test]
    fn test_xml_declaration_detected() {
        let detector = create_xml_detector();
        let sample = Sample::new(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<note>\n  <to>Tove</to>\n</note>",
        );
        let result = detector.detect(&sample).unwrap();
        assert_eq!(result.matched_rules, vec!["xml_declaration"]);
    }

    #[test]
    fn test_xml_tags_detected() {
        let detector = create_xml_detector();
        let sample = Sample::new("<root>\n  <item name=\"test\">value</item>\n  <empty />\n</root>");
        let result = detector.detect(&sample).unwrap();
        assert_eq!(
            result.matched_rules,
            vec!["xml_opening_tag", "xml_closing_tag", "xml_self_closing"]
        );
    }

    #[test]
    fn test_comparison_is_not_xml() {
        let detector = create_xml_detector();
        assert!(detector.detect(&Sample::new("if a <b and c> d:")).is_none());
    }
}
