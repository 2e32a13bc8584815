//! End-to-end scenarios for the projects page over the A/B/C collection.

use folio_filter::{Event, ProjectsPage, ProjectsState, RecordingRenderer, YearCount};
use folio_model::{LoadOutcome, YearLabel};
use folio_test_utils::{scenario_collection, site_collection, titles};
use pretty_assertions::assert_eq;

fn year(n: i64) -> YearLabel {
    YearLabel::Number(n)
}

#[test]
fn empty_query_shows_everything() {
    let state = ProjectsState::new(scenario_collection());
    let view = state.view();
    assert_eq!(
        view.aggregate.groups(),
        &[YearCount::new(2023, 2), YearCount::new(2024, 1)]
    );
    assert_eq!(view.visible.len(), 3);
    assert_eq!(view.title_count, 3);
}

#[test]
fn query_b_narrows_list_chart_and_title() {
    let state = ProjectsState::new(scenario_collection()).apply(Event::QueryChanged("b".into()));
    let view = state.view();
    assert_eq!(titles(view.visible.iter().copied()), vec!["B"]);
    assert_eq!(view.aggregate.groups(), &[YearCount::new(2023, 1)]);
    assert_eq!(view.title(), "Projects (1)");
}

#[test]
fn selecting_2023_keeps_both_slices() {
    let state =
        ProjectsState::new(scenario_collection()).apply(Event::SliceClicked(year(2023)));
    let view = state.view();
    assert_eq!(titles(view.visible.iter().copied()), vec!["A", "B"]);

    let slices = view.slices();
    assert_eq!(slices.len(), 2);
    assert_eq!((slices[0].year.clone(), slices[0].count), (year(2023), 2));
    assert_eq!((slices[1].year.clone(), slices[1].count), (year(2024), 1));
    assert!(slices[0].selected);
    assert!(!slices[1].selected);
}

#[test]
fn selecting_2023_twice_restores_full_list() {
    let state = ProjectsState::new(scenario_collection())
        .apply(Event::SliceClicked(year(2023)))
        .apply(Event::SliceClicked(year(2023)));
    assert!(state.selection().is_none());
    assert_eq!(state.view().visible.len(), 3);
}

#[test]
fn switching_selection_between_years() {
    let state = ProjectsState::new(scenario_collection())
        .apply(Event::SliceClicked(year(2023)))
        .apply(Event::LegendClicked(year(2024)));
    assert_eq!(titles(state.view().visible.iter().copied()), vec!["C"]);
}

#[test]
fn query_and_selection_compose() {
    let mut page = ProjectsPage::mount(site_collection(), RecordingRenderer::new());
    page.dispatch(Event::QueryChanged("MAP".into()));
    page.dispatch(Event::LegendClicked(YearLabel::Text("2024".into())));

    let frame = page.renderer().last().cloned().unwrap();
    assert_eq!(frame.title, "Projects (1)");
    assert_eq!(frame.visible.len(), 1);
    assert_eq!(frame.visible[0].title, "Bike Share Flow Map");
}

#[test]
fn yearless_projects_are_listed_but_not_charted() {
    let state = ProjectsState::new(site_collection());
    let view = state.view();
    assert_eq!(view.visible.len(), 5);
    assert_eq!(view.title_count, 5);
    assert_eq!(view.aggregate.total(), 4);
    assert!(view.visible.iter().any(|p| p.title == "Untitled Sketch"));
}

#[test]
fn failed_load_renders_empty_page() {
    let mut recorder = RecordingRenderer::new();
    let state = ProjectsState::from_outcome(LoadOutcome::Failed("HTTP 404".into()));
    let mut page = ProjectsPage::mount(state.collection().clone(), &mut recorder);
    page.dispatch(Event::QueryChanged("anything".into()));
    page.dispatch(Event::SliceClicked(year(2023)));
    drop(page);

    for frame in recorder.frames() {
        assert!(frame.visible.is_empty());
        assert!(frame.aggregate.is_empty());
        assert_eq!(frame.title, "Projects (0)");
    }
}
