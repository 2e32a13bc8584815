//! Year selection
//!
//! At most one year is pinned. Selecting the pinned year clears it; selecting
//! any other year replaces it.
//!
//! | current | clicked | next |
//! |---------|---------|------|
//! | none    | Y       | Y    |
//! | Y       | Y       | none |
//! | Y       | Z       | Z    |

use folio_model::{Project, YearLabel};
use serde::Serialize;

/// Currently pinned year, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selection(Option<YearLabel>);

impl Selection {
    /// No year pinned
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// Pin `year` directly, without toggling
    #[inline]
    #[must_use]
    pub fn pinned(year: YearLabel) -> Self {
        Self(Some(year))
    }

    /// Apply a click on `year` (slice or legend entry)
    #[must_use]
    pub fn select(self, year: YearLabel) -> Self {
        match self.0 {
            Some(current) if current == year => Self(None),
            _ => Self(Some(year)),
        }
    }

    /// The pinned year
    #[inline]
    #[must_use]
    pub fn year(&self) -> Option<&YearLabel> {
        self.0.as_ref()
    }

    /// Check if no year is pinned
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Whether `year` is the pinned one
    #[inline]
    #[must_use]
    pub fn is_selected(&self, year: &YearLabel) -> bool {
        self.0.as_ref() == Some(year)
    }

    /// Whether `project` survives the selection filter
    ///
    /// With nothing pinned every project passes. With a year pinned only
    /// projects whose raw year equals it pass.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match &self.0 {
            None => true,
            Some(year) => project.year.as_ref() == Some(year),
        }
    }

    /// Consume into the pinned year
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Option<YearLabel> {
        self.0
    }
}

impl From<Option<YearLabel>> for Selection {
    fn from(value: Option<YearLabel>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn y(n: i64) -> YearLabel {
        YearLabel::Number(n)
    }

    #[test]
    fn transition_table() {
        assert_eq!(Selection::none().select(y(2023)), Selection::pinned(y(2023)));
        assert_eq!(Selection::pinned(y(2023)).select(y(2023)), Selection::none());
        assert_eq!(Selection::pinned(y(2023)).select(y(2024)), Selection::pinned(y(2024)));
    }

    #[test]
    fn toggle_twice_returns_to_none() {
        let s = Selection::none().select(y(2020)).select(y(2020));
        assert!(s.is_none());
    }

    #[test]
    fn number_and_text_years_do_not_toggle_each_other() {
        let s = Selection::none()
            .select(y(2023))
            .select(YearLabel::Text("2023".into()));
        assert_eq!(s.year(), Some(&YearLabel::Text("2023".into())));
    }

    #[test]
    fn matches_filters_by_raw_year() {
        let s = Selection::pinned(y(2023));
        assert!(s.matches(&Project::new("a").with_year(2023)));
        assert!(!s.matches(&Project::new("b").with_year(2024)));
        assert!(!s.matches(&Project::new("c").with_year("2023")));
        assert!(!s.matches(&Project::new("d")));
        assert!(Selection::none().matches(&Project::new("d")));
    }
}
