//! Bounded window of recently classified lines
//!
//! The history is the classifier's only memory of past input. Index 0 is the
//! most recent line; offsets past what has been seen resolve to an empty
//! record so look-back rules never fail at startup.

use super::category::Category;
use std::collections::VecDeque;

/// Number of lines retained for look-back rules.
///
/// The environment-dump rule reads as far back as offset 13, so this must
/// stay above 13.
pub const HISTORY_CAPACITY: usize = 20;

/// One previously classified line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineRecord {
    /// Line as received (NUL bytes already replaced)
    pub raw: String,
    /// Line with surrounding ASCII whitespace removed
    pub trimmed: String,
    /// Category assigned when the line was classified
    pub category: Category,
}

impl LineRecord {
    pub fn new(raw: impl Into<String>, trimmed: impl Into<String>, category: Category) -> Self {
        Self {
            raw: raw.into(),
            trimmed: trimmed.into(),
            category,
        }
    }
}

/// Returned for offsets that have no line yet.
static EMPTY_RECORD: LineRecord = LineRecord {
    raw: String::new(),
    trimmed: String::new(),
    category: Category::Other,
};

/// Most-recent-first ring of [`LineRecord`]s.
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<LineRecord>,
    capacity: usize,
}

impl History {
    /// Create a history holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at offset 0, evicting the oldest record past capacity.
    pub fn push(&mut self, record: LineRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() >= self.capacity {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    /// Record at `offset` (0 = most recent), or an empty `Other` record.
    pub fn get(&self, offset: usize) -> &LineRecord {
        self.records.get(offset).unwrap_or(&EMPTY_RECORD)
    }

    /// Trimmed text at `offset`, empty when unseen.
    pub fn trimmed(&self, offset: usize) -> &str {
        &self.get(offset).trimmed
    }

    /// Category at `offset`, `Other` when unseen.
    pub fn category(&self, offset: usize) -> Category {
        self.get(offset).category
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &LineRecord> {
        self.records.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, category: Category) -> LineRecord {
        LineRecord::new(text, text, category)
    }

    #[test]
    fn test_unseen_offsets_are_empty_other() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.trimmed(0), "");
        assert_eq!(history.category(0), Category::Other);
        assert_eq!(history.trimmed(HISTORY_CAPACITY + 5), "");
    }

    #[test]
    fn test_push_is_most_recent_first() {
        let mut history = History::default();
        history.push(record("first", Category::Info));
        history.push(record("second", Category::Error));

        assert_eq!(history.trimmed(0), "second");
        assert_eq!(history.category(0), Category::Error);
        assert_eq!(history.trimmed(1), "first");
        assert_eq!(history.category(1), Category::Info);
        assert_eq!(history.trimmed(2), "");
    }

    #[test]
    fn test_oldest_evicted_at_capacity() {
        let mut history = History::new(3);
        for text in ["a", "b", "c", "d"] {
            history.push(record(text, Category::Info));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.trimmed(0), "d");
        assert_eq!(history.trimmed(2), "b");
        assert_eq!(history.trimmed(3), "");
    }

    #[test]
    fn test_default_capacity_covers_lookback() {
        let mut history = History::default();
        for i in 0..HISTORY_CAPACITY + 10 {
            history.push(record(&i.to_string(), Category::Other));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.trimmed(HISTORY_CAPACITY - 1), "10");
    }

    #[test]
    fn test_iter_order() {
        let mut history = History::new(5);
        history.push(record("x", Category::Debug));
        history.push(record("y", Category::Warning));
        let texts: Vec<_> = history.iter().map(|r| r.trimmed.as_str()).collect();
        assert_eq!(texts, vec!["y", "x"]);
    }
}
