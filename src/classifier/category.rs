//! Semantic line categories

use std::fmt;

/// Classification assigned to every non-blank line.
///
/// The caller decides how each category is displayed; the classifier only
/// ever produces one of these six values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Info,
    Warning,
    Debug,
    Error,
    /// ATG Nucleus lifecycle messages (startup, shutdown)
    Nucleus,
    /// Could not be classified
    #[default]
    Other,
}

impl Category {
    /// All categories in legend order.
    pub const ALL: [Category; 6] = [
        Category::Info,
        Category::Warning,
        Category::Debug,
        Category::Error,
        Category::Nucleus,
        Category::Other,
    ];

    /// Human-readable label used in the legend.
    pub fn label(self) -> &'static str {
        match self {
            Category::Info => "Information",
            Category::Warning => "Warning",
            Category::Debug => "Debug",
            Category::Error => "Error",
            Category::Nucleus => "Nucleus",
            Category::Other => "Other",
        }
    }

    /// Stable lowercase slug, matching the palette configuration keys.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Debug => "debug",
            Category::Error => "error",
            Category::Nucleus => "nucleus",
            Category::Other => "other",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Info => 0,
            Category::Warning => 1,
            Category::Debug => 2,
            Category::Error => 3,
            Category::Nucleus => 4,
            Category::Other => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_display_uses_slug() {
        assert_eq!(Category::Nucleus.to_string(), "nucleus");
        assert_eq!(Category::Info.label(), "Information");
    }
}
