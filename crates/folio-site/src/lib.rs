//! Folio Site
//!
//! Everything around the projects core: where data comes from and where
//! markup goes.
//!
//! # Modules
//!
//! - [`fetch`]: JSON sources (files, HTTP) and the never-failing project loader
//! - [`github`]: GitHub REST client for profile and repositories
//! - [`analytics`]: Dashboard numbers derived from repositories
//! - [`nav`]: Navigation links with relative-path handling
//! - [`theme`]: Colour-scheme preference persistence
//! - [`render`]: HTML fragments and the HTML [`folio_filter::Renderer`]
//! - [`config`]: TOML site configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_filter::ProjectsPage;
//! use folio_site::{fetch::{load_projects, AutoSource}, render::HtmlRenderer, SiteConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SiteConfig::new();
//! let collection = load_projects(&AutoSource::new("."), &config.projects_source).await;
//! let page = ProjectsPage::mount(collection, HtmlRenderer::default());
//! println!("{}", page.renderer().fragments().projects);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod fetch;
pub mod github;
pub mod nav;
pub mod render;
pub mod theme;

pub use config::SiteConfig;
pub use error::{ConfigError, FetchError, PreferenceError, SiteError};
pub use github::{GitHubClient, GitHubUser, Repository};
pub use theme::{ColorScheme, PreferenceStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the site layer
    pub use crate::fetch::{load_projects, AutoSource, FileSource, HttpSource, JsonSource};
    pub use crate::nav::{build_nav, default_pages, NavContext};
    pub use crate::render::{HeadingLevel, HtmlRenderer};
    pub use crate::{ColorScheme, GitHubClient, PreferenceStore, SiteConfig, SiteError};
}
