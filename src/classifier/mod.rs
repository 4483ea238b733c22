//! Line classification engine
//!
//! Turns each line of application server output into a [`Category`]. The
//! engine is synchronous and total: any input yields a category, and state
//! only flows forward through the [`History`] window and the
//! [`DetectorState`] the caller owns.
//!
//! # Example
//!
//! ```
//! use atg_log_colorizer::classifier::{Category, LineClassifier};
//!
//! let mut classifier = LineClassifier::new();
//! assert_eq!(classifier.classify("   "), None);
//! assert_eq!(
//!     classifier.classify("10:00:00,000 ERROR [atg.Foo] broken"),
//!     Some(Category::Error)
//! );
//! ```

pub mod category;
pub mod detectors;
pub mod engine;
pub mod history;
pub mod known_errors;
pub mod matcher;
pub mod rules;

pub use category::Category;
pub use detectors::{BlockKind, DetectorState, ServerType};
pub use engine::classify;
pub use history::{History, LineRecord, HISTORY_CAPACITY};
pub use matcher::Matcher;

/// ASCII whitespace as understood by C `isspace`, including vertical tab.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Strip leading and trailing whitespace. Non-ASCII characters are never
/// treated as whitespace.
pub fn trim_line(raw: &str) -> &str {
    raw.trim_matches(is_space)
}

/// A raw line paired with its trimmed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    start: usize,
    end: usize,
}

impl Line {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let start = raw.len() - raw.trim_start_matches(is_space).len();
        let end = start + trim_line(&raw).len();
        Self { raw, start, end }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn trimmed(&self) -> &str {
        &self.raw[self.start..self.end]
    }

    /// Empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.start == self.end
    }

    /// Consume into a history record carrying `category`.
    pub fn into_record(self, category: Category) -> LineRecord {
        let trimmed = self.trimmed().to_string();
        LineRecord::new(self.raw, trimmed, category)
    }
}

/// Stateful classifier for one stream of lines.
///
/// Owns the history window and detector state. Blank lines are reported as
/// `None` and leave both untouched, so look-back offsets count only
/// non-blank lines.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    history: History,
    state: DetectorState,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next line of the stream. Returns `None` for blank lines.
    pub fn classify(&mut self, raw: &str) -> Option<Category> {
        let line = Line::new(raw);
        if line.is_blank() {
            return None;
        }
        let category = engine::classify(&line, &self.history, &mut self.state);
        self.history.push(line.into_record(category));
        Some(category)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    /// Server identified so far.
    pub fn server(&self) -> ServerType {
        self.state.server()
    }
}
