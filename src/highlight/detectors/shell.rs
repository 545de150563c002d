//! Built-in shell script detection rules.

use crate::highlight::regex_detector::{RegexDetector, RegexDetectorBuilder, rule};
use crate::highlight::types::{RuleScope, RuleStrength};

/// Create the built-in shell detector.
///
/// A `sh`/`bash`/`zsh` shebang is definitive; test brackets and block
/// terminators anchor; variable expansion and common builtins support.
pub fn create_shell_detector() -> RegexDetector {
    RegexDetectorBuilder::new("sh")
        .rule(rule(
            "sh_shebang",
            r"^#!\s*/(usr/)?bin/(env\s+)?(ba|z|k|da)?sh\b",
            1.0,
            RuleScope::FirstLines(1),
            RuleStrength::Definitive,
        ))
        .rule(rule(
            "sh_test",
            r"^\s*(el)?if\s+\[\[?\s",
            0.4,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "sh_block_end",
            r"^\s*(fi|done|esac)\s*(;.*)?$",
            0.3,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "sh_prompt_command",
            r"^\s*(echo|export|source|cd|mkdir|chmod|grep|sudo|apt-get|pip|curl)\s+\S",
            0.2,
            RuleScope::AnyLine,
            RuleStrength::Strong,
        ))
        .rule(rule(
            "sh_expansion",
            r"\$(\{\w+[^}]*\}|\(\w[^)]*\)|\w+)",
            0.15,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .rule(rule(
            "sh_pipe",
            r"\s\|\s+\w+|\s&&\s",
            0.1,
            RuleScope::AnyLine,
            RuleStrength::Supporting,
        ))
        .build()
}
