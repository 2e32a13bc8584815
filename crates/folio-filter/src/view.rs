//! Render-ready projection of the projects page
//!
//! A [`ProjectsView`] is recomputed from scratch on every state change and
//! handed to the renderer whole.

use crate::aggregate::Aggregate;
use crate::selection::Selection;
use folio_model::{Project, YearLabel};
use serde::Serialize;
use std::f64::consts::TAU;

/// Categorical palette for slices and legend swatches (d3 `schemeTableau10`)
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

/// Everything the renderer draws for one state
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsView<'a> {
    /// Projects for the list: query and selection applied
    pub visible: Vec<&'a Project>,
    /// Year counts for pie and legend: query applied, selection ignored
    pub aggregate: Aggregate,
    /// Pinned year for highlight styling
    pub selection: Selection,
    /// Size of the query-filtered pool, selection ignored
    pub title_count: usize,
}

/// One pie wedge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub year: YearLabel,
    pub count: usize,
    /// Radians, clockwise from twelve o'clock
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the total in percent
    pub percent: f64,
    pub color: &'static str,
    pub selected: bool,
}

/// One legend row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub year: YearLabel,
    pub count: usize,
    pub color: &'static str,
    pub selected: bool,
}

/// Owned, serializable copy of a view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub title: String,
    pub title_count: usize,
    pub selected: Option<YearLabel>,
    pub aggregate: Aggregate,
    pub visible: Vec<Project>,
}

impl ProjectsView<'_> {
    /// Heading text, e.g. `Projects (3)`
    #[must_use]
    pub fn title(&self) -> String {
        format!("Projects ({})", self.title_count)
    }

    /// Pinned year
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&YearLabel> {
        self.selection.year()
    }

    /// Pie layout in aggregate order
    ///
    /// Colours are assigned by position in the aggregate; selection is
    /// matched by year, never by position.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slices(&self) -> Vec<PieSlice> {
        let total = self.aggregate.total();
        if total == 0 {
            return Vec::new();
        }

        let mut start = 0.0;
        self.aggregate
            .iter()
            .enumerate()
            .map(|(idx, group)| {
                let fraction = group.count as f64 / total as f64;
                let end = start + fraction * TAU;
                let slice = PieSlice {
                    year: group.year.clone(),
                    count: group.count,
                    start_angle: start,
                    end_angle: end,
                    percent: fraction * 100.0,
                    color: color_for(idx),
                    selected: self.selection.is_selected(&group.year),
                };
                start = end;
                slice
            })
            .collect()
    }

    /// Legend rows, same order and colours as [`Self::slices`]
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.aggregate
            .iter()
            .enumerate()
            .map(|(idx, group)| LegendEntry {
                year: group.year.clone(),
                count: group.count,
                color: color_for(idx),
                selected: self.selection.is_selected(&group.year),
            })
            .collect()
    }

    /// Owned copy for logging, JSON output or assertions
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            title: self.title(),
            title_count: self.title_count,
            selected: self.selected().cloned(),
            aggregate: self.aggregate.clone(),
            visible: self.visible.iter().map(|p| (*p).clone()).collect(),
        }
    }
}

fn color_for(idx: usize) -> &'static str {
    TABLEAU10[idx % TABLEAU10.len()]
}

#[cfg(test)]
mod tests {
    use crate::state::{Event, ProjectsState};
    use folio_model::YearLabel;
    use folio_test_utils::scenario_collection;

    #[test]
    fn title_uses_query_pool_size() {
        let state = ProjectsState::new(scenario_collection())
            .apply(Event::SliceClicked(YearLabel::Number(2024)));
        let view = state.view();
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.title(), "Projects (3)");
    }

    #[test]
    fn slices_cover_full_circle() {
        let state = ProjectsState::new(scenario_collection());
        let slices = state.view().slices();
        assert_eq!(slices.len(), 2);
        assert!(slices[0].start_angle.abs() < 1e-12);
        assert!((slices[1].end_angle - std::f64::consts::TAU).abs() < 1e-9);
        assert!((slices[0].end_angle - slices[1].start_angle).abs() < 1e-12);
        let percent: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn slice_and_legend_agree_on_color_and_selection() {
        let state = ProjectsState::new(scenario_collection())
            .apply(Event::LegendClicked(YearLabel::Number(2024)));
        let view = state.view();
        let slices = view.slices();
        let legend = view.legend();
        for (slice, entry) in slices.iter().zip(&legend) {
            assert_eq!(slice.year, entry.year);
            assert_eq!(slice.color, entry.color);
            assert_eq!(slice.selected, entry.selected);
        }
        assert!(!legend[0].selected);
        assert!(legend[1].selected);
    }

    #[test]
    fn empty_collection_has_no_slices() {
        let state = ProjectsState::default();
        let view = state.view();
        assert!(view.slices().is_empty());
        assert!(view.legend().is_empty());
        assert_eq!(view.title(), "Projects (0)");
    }

    #[test]
    fn palette_wraps_after_ten_groups() {
        assert_eq!(super::color_for(0), super::color_for(10));
        assert_ne!(super::color_for(0), super::color_for(1));
    }

    #[test]
    fn snapshot_serializes_selected_year() {
        let state = ProjectsState::new(scenario_collection())
            .apply(Event::SliceClicked(YearLabel::Number(2023)));
        let json = serde_json::to_value(state.view().snapshot()).unwrap();
        assert_eq!(json["title"], "Projects (3)");
        assert_eq!(json["selected"], 2023);
        assert_eq!(json["visible"].as_array().unwrap().len(), 2);
        assert_eq!(json["aggregate"][0]["count"], 2);
    }
}
