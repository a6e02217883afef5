// File: crates/nobel-chart/src/group.rs
// Summary: STEM / Non-STEM classification of Nobel prize categories.

use std::collections::BTreeSet;
use std::fmt;

/// Categories counted as STEM unless configured otherwise.
pub const DEFAULT_STEM_CATEGORIES: [&str; 3] = ["medicine", "physics", "chemistry"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    Stem,
    NonStem,
}

impl CategoryGroup {
    /// Legend text.
    pub const fn label(self) -> &'static str {
        match self {
            CategoryGroup::Stem => "STEM",
            CategoryGroup::NonStem => "Non-STEM",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of category names classified as STEM. Matching is exact and
/// case-sensitive; anything outside the set is Non-STEM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StemCategories(BTreeSet<String>);

impl StemCategories {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(categories.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    pub fn classify(&self, category: &str) -> CategoryGroup {
        if self.contains(category) {
            CategoryGroup::Stem
        } else {
            CategoryGroup::NonStem
        }
    }
}

impl Default for StemCategories {
    fn default() -> Self {
        Self::new(DEFAULT_STEM_CATEGORIES)
    }
}
