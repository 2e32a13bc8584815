//! Folio Model
//!
//! Portfolio project records as they arrive from `projects.json`.
//!
//! # Core Concepts
//!
//! - [`Project`]: One portfolio entry (title, description, year, optional image)
//! - [`YearLabel`]: Raw year value used as the grouping key (integer or string)
//! - [`ProjectCollection`]: Immutable, ordered, cheaply cloneable project list
//! - [`LoadOutcome`]: Explicit success/failure signal from the fetch collaborator
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_model::ProjectCollection;
//!
//! let collection = ProjectCollection::from_json(r#"[{"title": "A", "year": 2023}]"#)?;
//! assert_eq!(collection.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod collection;
mod error;
mod project;
mod year;

pub use collection::{LoadOutcome, ProjectCollection};
pub use error::ModelError;
pub use project::{Project, SEARCH_SEPARATOR};
pub use year::YearLabel;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
