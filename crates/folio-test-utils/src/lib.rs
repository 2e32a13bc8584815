//! Testing utilities for the Folio workspace
//!
//! Shared fixtures, payloads and proptest strategies.

#![allow(missing_docs)]

use folio_model::{Project, ProjectCollection, YearLabel};
use proptest::prelude::*;

/// The three-project collection used throughout the scenario tests:
/// A (2023), B (2023), C (2024).
pub fn scenario_collection() -> ProjectCollection {
    ProjectCollection::new(vec![
        Project::new("A").with_year(2023),
        Project::new("B").with_year(2023),
        Project::new("C").with_year(2024),
    ])
}

/// A collection shaped like the live site's `projects.json`
pub fn site_collection() -> ProjectCollection {
    ProjectCollection::from_json(SITE_PROJECTS_JSON).expect("fixture must decode")
}

pub fn titles<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Vec<&'a str> {
    projects.into_iter().map(|p| p.title.as_str()).collect()
}

pub const SITE_PROJECTS_JSON: &str = r#"[
  {
    "title": "Bike Share Flow Map",
    "year": "2024",
    "image": "../images/bikes.png",
    "imageClass": "wide",
    "description": "Interactive Mapbox visualization of Boston bike traffic."
  },
  {
    "title": "Commit Scrollytelling",
    "year": "2024",
    "image": "../images/commits.png",
    "description": "Scroll-driven narration of a repository's history."
  },
  {
    "title": "Wildfire Risk Model",
    "year": "2023",
    "image": "../images/fire.png",
    "description": "Gradient boosted model predicting California fire spread."
  },
  {
    "title": "Portfolio Site",
    "year": "2023",
    "description": "This site. Navigation, theming and D3 charts."
  },
  {
    "title": "Untitled Sketch",
    "description": "A project record without a year."
  }
]"#;

pub const GITHUB_USER_JSON: &str = r#"{
  "login": "AncientAbacus",
  "public_repos": 4,
  "public_gists": 1,
  "followers": 12,
  "following": 7,
  "created_at": "2020-03-01T10:00:00Z"
}"#;

pub const GITHUB_REPOS_JSON: &str = r#"[
  {
    "name": "portfolio",
    "description": "Personal site",
    "language": "JavaScript",
    "stargazers_count": 3,
    "forks_count": 1,
    "size": 2048,
    "html_url": "https://github.com/AncientAbacus/portfolio",
    "created_at": "2024-01-10T00:00:00Z",
    "updated_at": "2025-02-01T00:00:00Z",
    "pushed_at": "2025-02-01T00:00:00Z"
  },
  {
    "name": "wildfire",
    "description": null,
    "language": "Python",
    "stargazers_count": 9,
    "forks_count": 2,
    "size": 10240,
    "html_url": "https://github.com/AncientAbacus/wildfire",
    "created_at": "2023-05-02T00:00:00Z",
    "updated_at": "2024-11-15T00:00:00Z",
    "pushed_at": null
  },
  {
    "name": "bikes",
    "description": "Flow map",
    "language": "JavaScript",
    "stargazers_count": 9,
    "forks_count": 0,
    "size": 512,
    "html_url": "https://github.com/AncientAbacus/bikes",
    "created_at": "2024-03-03T00:00:00Z",
    "updated_at": "2025-01-20T00:00:00Z",
    "pushed_at": "2025-01-19T00:00:00Z"
  },
  {
    "name": "notes",
    "description": "Scratch",
    "language": null,
    "stargazers_count": 0,
    "forks_count": 0,
    "size": 0,
    "html_url": "https://github.com/AncientAbacus/notes",
    "created_at": "2021-07-07T00:00:00Z",
    "updated_at": "2021-07-08T00:00:00Z",
    "pushed_at": "2021-07-08T00:00:00Z"
  }
]"#;

/// Year labels drawn from a small pool so groups collide often
pub fn arb_year() -> impl Strategy<Value = Option<YearLabel>> {
    prop_oneof![
        Just(None),
        Just(Some(YearLabel::Text(String::new()))),
        (2019i64..2026).prop_map(|y| Some(YearLabel::Number(y))),
        (2019i64..2026).prop_map(|y| Some(YearLabel::Text(y.to_string()))),
    ]
}

pub fn arb_project() -> impl Strategy<Value = Project> {
    ("[A-Za-z ]{1,12}", "[A-Za-z0-9 ]{0,24}", arb_year()).prop_map(|(title, description, year)| {
        let mut project = Project::new(title).with_description(description);
        project.year = year;
        project
    })
}

pub fn arb_collection() -> impl Strategy<Value = ProjectCollection> {
    proptest::collection::vec(arb_project(), 0..24).prop_map(ProjectCollection::new)
}

/// ASCII-only queries keep case folding symmetric
pub fn arb_query() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,4}"
}
