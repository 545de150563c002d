//! Regex-based grammar detector with weighted confidence scoring.
//!
//! `RegexDetector` scores one grammar against a piece of content. It
//! evaluates a set of `DetectionRule`s, accumulates the weights of the rules
//! that match, and returns a `Guess` when at least one anchoring
//! (non-supporting) rule matched.

use super::types::{DetectionRule, Guess, RuleScope, RuleStrength};

/// Content prepared once for all detectors.
#[derive(Debug)]
pub struct Sample<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> Sample<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: text.lines().collect(),
        }
    }

    /// The entire content.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// All lines, without line terminators.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The first N lines.
    pub fn first_lines(&self, n: usize) -> &[&'a str] {
        &self.lines[..n.min(self.lines.len())]
    }

    /// Whether there is nothing but whitespace to look at.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A regex-based detector for a single grammar.
///
/// Supporting rules add confidence but never produce a guess on their own;
/// at least one Strong or Definitive rule has to match.
#[derive(Debug)]
pub struct RegexDetector {
    /// Grammar identifier reported on a match (e.g. "python").
    grammar: String,
    /// The detection rules to evaluate.
    rules: Vec<DetectionRule>,
    /// Minimum number of rules that must match before returning a guess.
    min_matching_rules: usize,
    /// If true, a Definitive rule match immediately returns confidence 1.0.
    definitive_rule_shortcircuit: bool,
}

impl RegexDetector {
    /// Grammar identifier this detector votes for.
    pub fn grammar(&self) -> &str {
        &self.grammar
    }

    /// The rules powering this detector.
    pub fn detection_rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Test a single rule against the sample.
    fn rule_matches(&self, rule: &DetectionRule, sample: &Sample<'_>) -> bool {
        match rule.scope {
            RuleScope::FullBlock => rule.pattern.is_match(sample.text()),
            RuleScope::AnyLine => sample.lines().iter().any(|l| rule.pattern.is_match(l)),
            RuleScope::FirstLines(n) => sample
                .first_lines(n)
                .iter()
                .any(|l| rule.pattern.is_match(l)),
        }
    }

    /// Score the sample. Returns `None` when this grammar is not a candidate.
    pub fn detect(&self, sample: &Sample<'_>) -> Option<Guess> {
        let mut total_weight: f32 = 0.0;
        let mut anchored = false;
        let mut matched_rules: Vec<String> = Vec::new();

        for rule in &self.rules {
            if !self.rule_matches(rule, sample) {
                continue;
            }

            if self.definitive_rule_shortcircuit && rule.strength == RuleStrength::Definitive {
                return Some(Guess {
                    grammar: self.grammar.clone(),
                    confidence: 1.0,
                    matched_rules: vec![rule.id.clone()],
                });
            }

            total_weight += rule.weight;
            anchored |= rule.strength != RuleStrength::Supporting;
            matched_rules.push(rule.id.clone());
        }

        if !anchored || matched_rules.len() < self.min_matching_rules {
            return None;
        }

        Some(Guess {
            grammar: self.grammar.clone(),
            confidence: total_weight.min(1.0),
            matched_rules,
        })
    }
}

/// Builder for constructing `RegexDetector` instances with sensible defaults.
pub struct RegexDetectorBuilder {
    grammar: String,
    rules: Vec<DetectionRule>,
    min_matching_rules: usize,
    definitive_rule_shortcircuit: bool,
}

impl RegexDetectorBuilder {
    /// Create a new builder for the given grammar identifier.
    pub fn new(grammar: impl Into<String>) -> Self {
        Self {
            grammar: grammar.into(),
            rules: Vec::new(),
            min_matching_rules: 1,
            definitive_rule_shortcircuit: true,
        }
    }

    /// Add a detection rule.
    pub fn rule(mut self, rule: DetectionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the minimum number of matching rules (default: 1).
    pub fn min_matching_rules(mut self, min: usize) -> Self {
        self.min_matching_rules = min;
        self
    }

    /// Set whether definitive rules short-circuit detection (default: true).
    pub fn definitive_rule_shortcircuit(mut self, enabled: bool) -> Self {
        self.definitive_rule_shortcircuit = enabled;
        self
    }

    /// Build the `RegexDetector`.
    pub fn build(self) -> RegexDetector {
        RegexDetector {
            grammar: self.grammar,
            rules: self.rules,
            min_matching_rules: self.min_matching_rules,
            definitive_rule_shortcircuit: self.definitive_rule_shortcircuit,
        }
    }
}

/// Shorthand for the built-in rule tables.
///
/// Patterns are compile-time constants, so a failure to compile is a bug in
/// the table and panics on first use.
pub(crate) fn rule(
    id: &str,
    pattern: &str,
    weight: f32,
    scope: RuleScope,
    strength: RuleStrength,
) -> DetectionRule {
    DetectionRule {
        id: id.to_string(),
        pattern: regex::Regex::new(pattern)
            .unwrap_or_else(|e| panic!("built-in rule {id} has an invalid pattern: {e}")),
        weight,
        scope,
        strength,
    }
}
