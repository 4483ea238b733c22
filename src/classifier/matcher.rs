//! Literal pattern matching
//!
//! Every pattern in the rule tables is a case-sensitive literal. There are no
//! regular expressions and no normalization, so table entries can be compared
//! byte-for-byte against the log conventions they were written for.

/// A literal predicate over a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Text contains the pattern anywhere
    Contains(&'static str),
    /// Text begins with the pattern
    StartsWith(&'static str),
    /// Text ends with the pattern
    EndsWith(&'static str),
    /// Text is exactly the pattern
    Exactly(&'static str),
    /// Every inner matcher holds
    All(&'static [Matcher]),
    /// At least one inner matcher holds
    Any(&'static [Matcher]),
    /// Inner matcher does not hold
    Not(&'static Matcher),
}

impl Matcher {
    /// Test `text` against this matcher.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Contains(pattern) => text.contains(pattern),
            Matcher::StartsWith(pattern) => text.starts_with(pattern),
            Matcher::EndsWith(pattern) => text.ends_with(pattern),
            Matcher::Exactly(pattern) => text == *pattern,
            Matcher::All(inner) => inner.iter().all(|m| m.matches(text)),
            Matcher::Any(inner) => inner.iter().any(|m| m.matches(text)),
            Matcher::Not(inner) => !inner.matches(text),
        }
    }
}

/// True when any matcher in `table` accepts `text`.
pub fn any_match(table: &[Matcher], text: &str) -> bool {
    table.iter().any(|m| m.matches(text))
}

/// Index of the first duplicated entry in `table`, if any.
pub fn first_duplicate(table: &[Matcher]) -> Option<usize> {
    table
        .iter()
        .enumerate()
        .find(|(i, entry)| table[..*i].contains(entry))
        .map(|(i, _)| i)
}
