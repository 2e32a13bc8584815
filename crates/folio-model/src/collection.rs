//! Immutable project collection
//!
//! Loaded once, never mutated. Clones share the same backing slice.

use crate::error::ModelError;
use crate::project::Project;
use std::sync::Arc;

/// Result of handing a project list to the core
///
/// The fetch collaborator reports failure explicitly instead of throwing
/// into the render path.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Projects in source order
    Loaded(Vec<Project>),
    /// Network or parse failure upstream
    Failed(String),
}

impl LoadOutcome {
    /// Check if the load failed
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<E: std::fmt::Display> From<Result<Vec<Project>, E>> for LoadOutcome {
    fn from(result: Result<Vec<Project>, E>) -> Self {
        match result {
            Ok(projects) => Self::Loaded(projects),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Ordered, immutable sequence of projects
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCollection {
    projects: Arc<[Project]>,
}

impl ProjectCollection {
    /// Wrap projects, keeping source order
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into(),
        }
    }

    /// Empty collection
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a JSON array of projects, logging and skipping bad records
    ///
    /// # Errors
    ///
    /// [`ModelError::Malformed`] if the document is not a JSON array.
    pub fn from_json(document: &str) -> Result<Self, ModelError> {
        let (collection, skipped) = Self::decode(document)?;
        for err in &skipped {
            tracing::warn!(error = %err, "skipping project record");
        }
        Ok(collection)
    }

    /// Decode a JSON array record by record
    ///
    /// Records that cannot be read as a project come back as
    /// [`ModelError::InvalidRecord`]; every other record is kept in source
    /// order. A blank title is kept too.
    ///
    /// # Errors
    ///
    /// [`ModelError::Malformed`] if the document is not a JSON array.
    pub fn decode(document: &str) -> Result<(Self, Vec<ModelError>), ModelError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(document)?;
        let mut projects = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Project>(record) {
                Ok(project) => {
                    if project.title.trim().is_empty() {
                        tracing::warn!(index, "project has a blank title");
                    }
                    projects.push(project);
                }
                Err(source) => skipped.push(ModelError::InvalidRecord { index, source }),
            }
        }
        Ok((Self::new(projects), skipped))
    }

    /// Collection for a load outcome; a failed load yields the empty collection
    #[must_use]
    pub fn from_outcome(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded(projects) => {
                tracing::info!(count = projects.len(), "project collection loaded");
                Self::new(projects)
            }
            LoadOutcome::Failed(reason) => {
                tracing::warn!(%reason, "project collection unavailable, using empty collection");
                Self::empty()
            }
        }
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects in source order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    /// Iterate in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// First `n` projects (fewer if the collection is shorter)
    #[must_use]
    pub fn first(&self, n: usize) -> &[Project] {
        &self.projects[..n.min(self.projects.len())]
    }
}

impl Default for ProjectCollection {
    fn default() -> Self {
        Self {
            projects: Arc::from(Vec::new()),
        }
    }
}

impl From<Vec<Project>> for ProjectCollection {
    fn from(projects: Vec<Project>) -> Self {
        Self::new(projects)
    }
}

impl<'a> IntoIterator for &'a ProjectCollection {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_keeps_source_order() {
        let c = ProjectCollection::from_json(
            r#"[{"title": "B", "year": 2024}, {"title": "A", "year": 2023}]"#,
        )
        .unwrap();
        let titles: Vec<_> = c.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn from_json_keeps_blank_title() {
        let c = ProjectCollection::from_json(r#"[{"title": "ok"}, {"title": ""}]"#).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.as_slice()[1].title, "");
    }

    #[test]
    fn decode_reports_skipped_records() {
        let (c, skipped) =
            ProjectCollection::decode(r#"[{"title": "a"}, {"year": 2020}, {"title": "c"}]"#).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(skipped.len(), 1);
        assert!(matches!(skipped[0], ModelError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn default_is_empty() {
        let c = ProjectCollection::default();
        assert!(c.is_empty());
        assert_eq!(c, ProjectCollection::empty());
    }

    #[test]
    fn from_json_rejects_non_array() {
        let err = ProjectCollection::from_json(r#"{"title": "x"}"#).unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));
    }

    #[test]
    fn failed_outcome_degrades_to_empty() {
        let c = ProjectCollection::from_outcome(LoadOutcome::Failed("404".into()));
        assert!(c.is_empty());
    }

    #[test]
    fn outcome_from_result() {
        let ok: Result<Vec<Project>, String> = Ok(vec![Project::new("x")]);
        let err: Result<Vec<Project>, String> = Err("boom".into());
        assert_eq!(LoadOutcome::from(ok), LoadOutcome::Loaded(vec![Project::new("x")]));
        assert!(LoadOutcome::from(err).is_failed());
    }

    #[test]
    fn first_is_bounded() {
        let c = ProjectCollection::new(vec![Project::new("a"), Project::new("b")]);
        assert_eq!(c.first(3).len(), 2);
        assert_eq!(c.first(1)[0].title, "a");
    }

    #[test]
    fn clones_share_storage() {
        let c = ProjectCollection::new(vec![Project::new("a")]);
        let d = c.clone();
        assert!(std::ptr::eq(c.as_slice(), d.as_slice()));
    }
}
