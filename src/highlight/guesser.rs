//! Content classifier.
//!
//! `GrammarGuesser` holds the per-grammar detectors and picks the single
//! best guess for a piece of content. There is no confidence threshold: any
//! detector that produces a guess can win.

use std::sync::OnceLock;

use crate::debug::{self, DebugLevel};

use super::detectors;
use super::regex_detector::{RegexDetector, Sample};
use super::types::Guess;

/// Runs grammar detectors and keeps the best guess.
///
/// Detectors are stored in priority-descending order. Within the same
/// priority they are checked in registration order, and the earlier one
/// wins on equal confidence.
pub struct GrammarGuesser {
    /// Detectors sorted by priority (highest first). Each entry is (priority, detector).
    detectors: Vec<(i32, RegexDetector)>,
}

impl GrammarGuesser {
    /// Create an empty guesser.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// A guesser with every built-in detector registered.
    pub fn with_builtin_detectors() -> Self {
        let mut guesser = Self::new();
        // Formats with unambiguous structure first, so they win ties.
        guesser.register_detector(60, detectors::xml::create_xml_detector());
        guesser.register_detector(60, detectors::json::create_json_detector());
        guesser.register_detector(50, detectors::python::create_python_detector());
        guesser.register_detector(50, detectors::rust::create_rust_detector());
        guesser.register_detector(50, detectors::javascript::create_javascript_detector());
        guesser.register_detector(50, detectors::ruby::create_ruby_detector());
        guesser.register_detector(40, detectors::shell::create_shell_detector());
        guesser.register_detector(40, detectors::sql::create_sql_detector());
        guesser
    }

    /// The process-wide built-in guesser. Built on first use, never mutated.
    pub fn builtin() -> &'static GrammarGuesser {
        static BUILTIN: OnceLock<GrammarGuesser> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtin_detectors)
    }

    /// Register a detector at the given priority (higher = checked first).
    pub fn register_detector(&mut self, priority: i32, detector: RegexDetector) {
        let idx = self.detectors.partition_point(|(p, _)| *p >= priority);
        self.detectors.insert(idx, (priority, detector));
    }

    /// Number of registered detectors.
    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Grammars this guesser can produce, in check order.
    pub fn grammars(&self) -> Vec<&str> {
        self.detectors.iter().map(|(_, d)| d.grammar()).collect()
    }

    /// Return the highest-confidence guess for `content`, if any detector
    /// considers it a candidate. Blank content never yields a guess.
    pub fn guess(&self, content: &str) -> Option<Guess> {
        let sample = Sample::new(content);
        if sample.is_blank() {
            return None;
        }

        let trace = debug::is_enabled(DebugLevel::Trace, "GUESS");
        let mut best: Option<Guess> = None;
        for (priority, detector) in &self.detectors {
            let Some(result) = detector.detect(&sample) else {
                continue;
            };
            if trace {
                debug_trace!(
                    "GUESS",
                    "{} (priority={}) confidence={:.3}, rules={:?}",
                    result.grammar,
                    priority,
                    result.confidence,
                    result.matched_rules
                );
            }
            let better = match &best {
                Some(current) => result.confidence > current.confidence,
                None => true,
            };
            if better {
                best = Some(result);
            }
        }

        match &best {
            Some(g) => debug_log!(
                "GUESS",
                "best guess {} (confidence={:.3}) over {} lines",
                g.grammar,
                g.confidence,
                sample.lines().len()
            ),
            None => debug_log!("GUESS", "no detector matched"),
        }
        best
    }
}

impl Default for GrammarGuesser {
    fn default() -> Self {
        Self::new()
    }
}
