// File: crates/nobel-chart/src/reshape.rs
// Summary: Group laureate records into per-(category group, year) counts and derive scale inputs.
//
// Layout:
//   records ──classify──▶ CategoryGroup ──year──▶ count
//
// A (group, year) pair with no records has no entry; lines skip that year
// instead of dropping to zero. A group with no records is not a key at all.

use std::collections::{BTreeSet, HashMap};

use crate::colors::ColorAssignment;
use crate::error::DataError;
use crate::group::{CategoryGroup, StemCategories};
use crate::record::LaureateRecord;

pub type Year = i32;
pub type Count = u32;

/// Year -> number of laureates. Hashed, so iteration order carries no meaning.
pub type CountsByYear = HashMap<Year, Count>;

/// Group -> year counts. Groups enumerate in the order they first appeared
/// in the input; that order drives color assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountsByGroup {
    groups: Vec<(CategoryGroup, CountsByYear)>,
}

impl CountsByGroup {
    pub fn from_records<'a, I>(records: I, stem: &StemCategories) -> Self
    where
        I: IntoIterator<Item = &'a LaureateRecord>,
    {
        let mut out = Self::default();
        for record in records {
            out.bump(stem.classify(&record.category), record.year);
        }
        out
    }

    fn bump(&mut self, group: CategoryGroup, year: Year) {
        let idx = match self.groups.iter().position(|(g, _)| *g == group) {
            Some(idx) => idx,
            None => {
                self.groups.push((group, CountsByYear::new()));
                self.groups.len() - 1
            }
        };
        *self.groups[idx].1.entry(year).or_insert(0) += 1;
    }

    pub fn get(&self, group: CategoryGroup) -> Option<&CountsByYear> {
        self.groups.iter().find(|(g, _)| *g == group).map(|(_, counts)| counts)
    }

    pub fn contains(&self, group: CategoryGroup) -> bool {
        self.get(group).is_some()
    }

    pub fn groups(&self) -> impl Iterator<Item = CategoryGroup> + '_ {
        self.groups.iter().map(|(g, _)| *g)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryGroup, &CountsByYear)> {
        self.groups.iter().map(|(g, counts)| (*g, counts))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum over all buckets; equals the number of records reshaped.
    pub fn total(&self) -> u64 {
        self.groups
            .iter()
            .flat_map(|(_, counts)| counts.values())
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Every year present in at least one group.
    pub fn all_years(&self) -> BTreeSet<Year> {
        self.groups.iter().flat_map(|(_, counts)| counts.keys().copied()).collect()
    }

    /// Inclusive `[min, max]` over [`CountsByGroup::all_years`].
    pub fn year_domain(&self) -> Result<(Year, Year), DataError> {
        let years = self.all_years();
        match (years.first(), years.last()) {
            (Some(&lo), Some(&hi)) => Ok((lo, hi)),
            _ => Err(DataError::Empty),
        }
    }

    /// Largest single bucket across all groups and years.
    pub fn max_count(&self) -> Result<Count, DataError> {
        self.groups
            .iter()
            .flat_map(|(_, counts)| counts.values().copied())
            .max()
            .ok_or(DataError::Empty)
    }

    /// `(year, count)` pairs for `group`, ascending by year.
    pub fn series(&self, group: CategoryGroup) -> Option<Vec<(Year, Count)>> {
        self.get(group).map(sorted_series)
    }

    pub fn color_assignment(&self) -> ColorAssignment {
        ColorAssignment::from_groups(self.groups())
    }
}

/// Line points for one group. Year keys are unique, so the result is
/// strictly ascending.
pub fn sorted_series(counts: &CountsByYear) -> Vec<(Year, Count)> {
    let mut points: Vec<(Year, Count)> = counts.iter().map(|(&y, &c)| (y, c)).collect();
    points.sort_unstable_by_key(|&(year, _)| year);
    points
}

/// Reshaped counts plus the domains and colors derived from them, computed
/// once per load.
#[derive(Clone, Debug)]
pub struct ChartData {
    pub counts: CountsByGroup,
    pub year_domain: (Year, Year),
    pub max_count: Count,
    pub colors: ColorAssignment,
}

impl ChartData {
    /// Fails with [`DataError::Empty`] when there is nothing to scale.
    pub fn derive(counts: CountsByGroup) -> Result<Self, DataError> {
        let year_domain = counts.year_domain()?;
        let max_count = counts.max_count()?;
        let colors = counts.color_assignment();
        for (group, years) in counts.iter() {
            let records: u64 = years.values().map(|&c| u64::from(c)).sum();
            log::debug!("{group}: {records} laureates across {} years", years.len());
        }
        Ok(Self { counts, year_domain, max_count, colors })
    }

    pub fn from_records(records: &[LaureateRecord], stem: &StemCategories) -> Result<Self, DataError> {
        Self::derive(CountsByGroup::from_records(records, stem))
    }

    /// Y axis domain: zero up to one above the tallest bucket.
    pub fn y_domain(&self) -> (f64, f64) {
        (0.0, f64::from(self.max_count) + 1.0)
    }

    pub fn x_domain(&self) -> (f64, f64) {
        (f64::from(self.year_domain.0), f64::from(self.year_domain.1))
    }
}
