// File: crates/nobel-chart/src/colors.rs
// Summary: Ordinal color assignment for category groups.

use chart_core::theme::category10;
use chart_core::Color;

use crate::group::CategoryGroup;

/// Group -> color, following the order groups were handed in. The i-th group
/// gets the i-th Category10 color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorAssignment {
    entries: Vec<(CategoryGroup, Color)>,
}

impl ColorAssignment {
    pub fn from_groups<I: IntoIterator<Item = CategoryGroup>>(groups: I) -> Self {
        let mut entries: Vec<(CategoryGroup, Color)> = Vec::new();
        for group in groups {
            if entries.iter().all(|(g, _)| *g != group) {
                let color = category10(entries.len());
                entries.push((group, color));
            }
        }
        Self { entries }
    }

    pub fn color_for(&self, group: CategoryGroup) -> Option<Color> {
        self.entries.iter().find(|(g, _)| *g == group).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
