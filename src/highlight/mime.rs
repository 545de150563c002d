//! MIME pattern matching.
//!
//! A pattern is `type/subtype`. The subtype may start with a single `*`
//! wildcard segment, in which case the rest of the pattern (usually a `+xml`
//! style structured-syntax suffix) must end the candidate's subtype:
//! `application/*+xml` matches `application/atom+xml` but not
//! `application/xml`. Nothing more general is supported.

/// A parsed MIME pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimePattern<'a> {
    type_: &'a str,
    subtype: Subtype<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subtype<'a> {
    Exact(&'a str),
    /// Leading wildcard; holds the remainder that must end the candidate.
    Suffix(&'a str),
}

impl<'a> MimePattern<'a> {
    /// Parse a pattern. Returns `None` when it is not `type/subtype`, or when
    /// a `*` appears anywhere but at the start of the subtype.
    pub fn parse(pattern: &'a str) -> Option<Self> {
        let (type_, subtype) = split(pattern)?;
        if type_.contains('*') {
            return None;
        }
        let subtype = match subtype.strip_prefix('*') {
            Some(rest) if rest.contains('*') => return None,
            Some(rest) => Subtype::Suffix(rest),
            None if subtype.contains('*') => return None,
            None => Subtype::Exact(subtype),
        };
        Some(Self { type_, subtype })
    }

    /// Whether `candidate` matches this pattern. Comparison is case-sensitive.
    pub fn matches(&self, candidate: &str) -> bool {
        let Some((type_, subtype)) = split(candidate) else {
            return false;
        };
        if type_ != self.type_ {
            return false;
        }
        match self.subtype {
            Subtype::Exact(expected) => subtype == expected,
            // The wildcard stands for at least one character.
            Subtype::Suffix(suffix) => subtype.len() > suffix.len() && subtype.ends_with(suffix),
        }
    }
}

/// Split `type/subtype`, rejecting empty halves and extra slashes.
fn split(mime: &str) -> Option<(&str, &str)> {
    let (type_, subtype) = mime.split_once('/')?;
    if type_.is_empty() || subtype.is_empty() || subtype.contains('/') {
        return None;
    }
    Some((type_, subtype))
}

/// Test `candidate` against `pattern`. A malformed pattern never matches.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    MimePattern::parse(pattern).is_some_and(|p| p.matches(candidate))
}

/// Return the first `(pattern, value)` entry whose pattern matches `candidate`.
pub fn lookup<'t, T>(table: &'t [(&str, T)], candidate: &str) -> Option<&'t T> {
    table
        .iter()
        .find(|(pattern, _)| matches(pattern, candidate))
        .map(|(_, value)| value)
}

/// Whether any pattern in `patterns` matches `candidate`.
pub fn matches_any(patterns: &[&str], candidate: &str) -> bool {
    patterns.iter().any(|pattern| matches(pattern, candidate))
}
