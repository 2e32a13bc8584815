//! Folio Filter
//!
//! State synchronization for the projects page: one immutable project
//! collection, two composable filters, three derived outputs.
//!
//! # Data Flow
//!
//! ```text
//! ProjectCollection ──▶ filter_by_query(query) ──┬──▶ aggregate()          ──▶ pie + legend
//!                                                ├──▶ len()                ──▶ "Projects (N)"
//!                                                └──▶ Selection::matches() ──▶ project list
//! ```
//!
//! The year selection narrows the list only. Aggregation always runs over the
//! query-filtered pool so every year slice stays visible and clickable.
//!
//! State changes are modelled as `(ProjectsState, Event) -> ProjectsState`
//! ([`ProjectsState::apply`]); rendering is a pure projection of the state
//! ([`ProjectsState::view`]). [`ProjectsPage`] ties the two together and hands
//! each complete view to a [`Renderer`].
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_filter::{Event, ProjectsState};
//!
//! let state = ProjectsState::new(collection)
//!     .apply(Event::QueryChanged("b".into()))
//!     .apply(Event::SliceClicked(2023.into()));
//! let view = state.view();
//! println!("{}", view.title());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod aggregate;
pub mod page;
pub mod query;
pub mod selection;
pub mod state;
pub mod view;

pub use aggregate::{aggregate, Aggregate, YearCount};
pub use page::{ProjectsPage, RecordingRenderer, Renderer};
pub use query::{filter_by_query, matches_query};
pub use selection::Selection;
pub use state::{Event, ProjectsState};
pub use view::{LegendEntry, PieSlice, ProjectsView, ViewSnapshot, TABLEAU10};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the projects page
    pub use crate::{
        aggregate, filter_by_query, matches_query, Event, ProjectsPage, ProjectsState,
        ProjectsView, Renderer, Selection,
    };
    pub use folio_model::{Project, ProjectCollection, YearLabel};
}
