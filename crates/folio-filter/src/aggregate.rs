//! Year aggregation
//!
//! Single-pass grouping by raw year. Groups appear in first-occurrence order
//! of the input; nothing is sorted. Projects without a usable year are
//! skipped.

use folio_model::{Project, YearLabel};
use indexmap::IndexMap;
use serde::Serialize;

/// Number of projects sharing one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    /// Grouping key
    pub year: YearLabel,
    /// Projects in the group
    pub count: usize,
}

impl YearCount {
    /// Create a year count
    #[inline]
    #[must_use]
    pub fn new(year: impl Into<YearLabel>, count: usize) -> Self {
        Self {
            year: year.into(),
            count,
        }
    }
}

/// Ordered year counts driving the pie chart and legend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Aggregate {
    groups: Vec<YearCount>,
}

impl Aggregate {
    /// Groups in first-occurrence order
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[YearCount] {
        &self.groups
    }

    /// Number of groups (slices)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Count for `year`, zero when absent
    #[must_use]
    pub fn count_for(&self, year: &YearLabel) -> usize {
        self.groups
            .iter()
            .find(|g| &g.year == year)
            .map_or(0, |g| g.count)
    }

    /// Whether `year` has a group
    #[must_use]
    pub fn contains(&self, year: &YearLabel) -> bool {
        self.groups.iter().any(|g| &g.year == year)
    }

    /// Fraction of the total held by `year`, in `0.0..=1.0`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, year: &YearLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count_for(year) as f64 / total as f64
    }

    /// Iterate over groups
    pub fn iter(&self) -> std::slice::Iter<'_, YearCount> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Aggregate {
    type Item = &'a YearCount;
    type IntoIter = std::slice::Iter<'a, YearCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group `pool` by year
pub fn aggregate<'a, I>(pool: I) -> Aggregate
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut counts: IndexMap<&YearLabel, usize> = IndexMap::new();
    for project in pool {
        if let Some(year) = project.group_year() {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    Aggregate {
        groups: counts
            .into_iter()
            .map(|(year, count)| YearCount {
                year: year.clone(),
                count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::scenario_collection;

    #[test]
    fn groups_in_first_occurrence_order() {
        let pool = vec![
            Project::new("a").with_year(2024),
            Project::new("b").with_year(2021),
            Project::new("c").with_year(2024),
            Project::new("d").with_year(2022),
        ];
        let agg = aggregate(&pool);
        assert_eq!(
            agg.groups(),
            &[
                YearCount::new(2024, 2),
                YearCount::new(2021, 1),
                YearCount::new(2022, 1),
            ]
        );
    }

    #[test]
    fn scenario_counts() {
        let agg = aggregate(&scenario_collection());
        assert_eq!(agg.groups(), &[YearCount::new(2023, 2), YearCount::new(2024, 1)]);
        assert_eq!(agg.total(), 3);
    }

    #[test]
    fn empty_pool_gives_empty_aggregate() {
        let pool: Vec<Project> = Vec::new();
        let agg = aggregate(&pool);
        assert!(agg.is_empty());
        assert_eq!(agg.total(), 0);
        assert!((agg.share(&YearLabel::Number(2023)) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn projects_without_year_are_skipped() {
        let pool = vec![
            Project::new("a"),
            Project::new("b").with_year(""),
            Project::new("c").with_year("2020"),
        ];
        let agg = aggregate(&pool);
        assert_eq!(agg.groups(), &[YearCount::new("2020", 1)]);
    }

    #[test]
    fn raw_values_are_not_normalized() {
        let pool = vec![
            Project::new("a").with_year(2023),
            Project::new("b").with_year("2023"),
        ];
        let agg = aggregate(&pool);
        assert_eq!(agg.len(), 2);
        assert_eq!(agg.count_for(&YearLabel::Number(2023)), 1);
        assert_eq!(agg.count_for(&YearLabel::Text("2023".into())), 1);
    }

    #[test]
    fn share_of_year() {
        let agg = aggregate(&scenario_collection());
        let share = agg.share(&YearLabel::Number(2024));
        assert!((share - 1.0 / 3.0).abs() < 1e-12);
    }
}
