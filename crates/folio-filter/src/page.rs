//! Event dispatch for the projects page
//!
//! [`ProjectsPage`] owns the state exclusively. Each dispatched event is
//! reduced and projected to completion before the renderer sees anything, so
//! a renderer only ever receives consistent views.

use crate::state::{Event, ProjectsState};
use crate::view::{ProjectsView, ViewSnapshot};
use folio_model::ProjectCollection;

/// Draws a complete view: project list, pie, legend and title
///
/// Implemented by the presentation layer (HTML fragments, terminal output,
/// test recorders).
pub trait Renderer {
    /// Replace whatever was drawn before with `view`
    fn render(&mut self, view: &ProjectsView<'_>);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, view: &ProjectsView<'_>) {
        (**self).render(view);
    }
}

/// Projects page: state plus the renderer it drives
#[derive(Debug)]
pub struct ProjectsPage<R: Renderer> {
    state: ProjectsState,
    renderer: R,
}

impl<R: Renderer> ProjectsPage<R> {
    /// Mount the page over `collection` and draw the initial view
    pub fn mount(collection: ProjectCollection, renderer: R) -> Self {
        let mut page = Self {
            state: ProjectsState::new(collection),
            renderer,
        };
        page.redraw();
        page
    }

    /// Apply `event` and redraw once
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
        self.redraw();
    }

    /// Apply events in order, redrawing after each
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ProjectsState {
        &self.state
    }

    /// Current view, recomputed
    #[must_use]
    pub fn view(&self) -> ProjectsView<'_> {
        self.state.view()
    }

    /// The renderer
    #[inline]
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Take the page apart
    #[must_use]
    pub fn into_parts(self) -> (ProjectsState, R) {
        (self.state, self.renderer)
    }

    fn redraw(&mut self) {
        let view = self.state.view();
        self.renderer.render(&view);
    }
}

/// Renderer that keeps a snapshot of every frame
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Vec<ViewSnapshot>,
}

impl RecordingRenderer {
    /// Create an empty recorder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames, oldest first
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[ViewSnapshot] {
        &self.frames
    }

    /// Most recent frame
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&ViewSnapshot> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &ProjectsView<'_>) {
        self.frames.push(view.snapshot());
    }
}
