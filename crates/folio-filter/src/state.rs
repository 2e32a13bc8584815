//! Projects page state and its transitions
//!
//! The only mutable data of the page is the triple (collection, query,
//! selection). Every input is an [`Event`]; [`ProjectsState::apply`] maps
//! `(state, event)` to the next state without side effects.

use crate::aggregate::aggregate;
use crate::query::filter_by_query;
use crate::selection::Selection;
use crate::view::ProjectsView;
use folio_model::{LoadOutcome, ProjectCollection, YearLabel};

/// Input to the projects page
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Search box edited
    QueryChanged(String),
    /// Pie slice clicked
    SliceClicked(YearLabel),
    /// Legend entry clicked; same effect as clicking the slice
    LegendClicked(YearLabel),
    /// Fetch collaborator finished
    CollectionLoaded(LoadOutcome),
}

impl Event {
    /// Short name for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "query_changed",
            Self::SliceClicked(_) => "slice_clicked",
            Self::LegendClicked(_) => "legend_clicked",
            Self::CollectionLoaded(_) => "collection_loaded",
        }
    }
}

/// Full state of the projects page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsState {
    collection: ProjectCollection,
    query: String,
    selection: Selection,
}

impl ProjectsState {
    /// Fresh state over a loaded collection: empty query, nothing selected
    #[must_use]
    pub fn new(collection: ProjectCollection) -> Self {
        Self {
            collection,
            query: String::new(),
            selection: Selection::none(),
        }
    }

    /// State for a load outcome; failure gives an empty collection
    #[must_use]
    pub fn from_outcome(outcome: LoadOutcome) -> Self {
        Self::new(ProjectCollection::from_outcome(outcome))
    }

    /// Next state after `event`
    #[must_use]
    pub fn apply(self, event: Event) -> Self {
        tracing::debug!(event = event.kind(), "applying projects event");
        match event {
            Event::QueryChanged(query) => Self { query, ..self },
            Event::SliceClicked(year) | Event::LegendClicked(year) => Self {
                selection: self.selection.select(year),
                ..self
            },
            Event::CollectionLoaded(outcome) => Self {
                collection: ProjectCollection::from_outcome(outcome),
                ..self
            },
        }
    }

    /// Project the state into everything the renderer needs
    #[must_use]
    pub fn view(&self) -> ProjectsView<'_> {
        let pool = filter_by_query(&self.collection, &self.query);
        let aggregate = aggregate(pool.iter().copied());
        let title_count = pool.len();
        let visible: Vec<_> = pool
            .into_iter()
            .filter(|p| self.selection.matches(p))
            .collect();

        tracing::debug!(
            query = %self.query,
            selected = ?self.selection.year(),
            visible = visible.len(),
            groups = aggregate.len(),
            "projects view recomputed"
        );

        ProjectsView {
            visible,
            aggregate,
            selection: self.selection.clone(),
            title_count,
        }
    }

    /// The project collection
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &ProjectCollection {
        &self.collection
    }

    /// Current query text
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current selection
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
