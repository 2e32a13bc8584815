//! Free-text query matching
//!
//! Naive full-record substring search: the lowercased search text of a
//! project must contain the lowercased query. The query is not trimmed and
//! not tokenized.

use folio_model::Project;

/// Whether `project` matches `query`
///
/// The empty query matches every project.
#[must_use]
pub fn matches_query(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    project
        .search_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Projects matching `query`, in input order
pub fn filter_by_query<'a, I>(projects: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    // Lowercase once, not per project.
    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|p| needle.is_empty() || p.search_text().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::{scenario_collection, titles};

    #[test]
    fn empty_query_matches_everything() {
        let c = scenario_collection();
        assert!(c.iter().all(|p| matches_query(p, "")));
        assert_eq!(filter_by_query(&c, "").len(), 3);
    }

    #[test]
    fn case_insensitive() {
        let p = Project::new("Wildfire Model").with_description("Gradient Boosting");
        assert!(matches_query(&p, "wildfire"));
        assert!(matches_query(&p, "GRADIENT"));
        assert!(matches_query(&p, "fIrE mO"));
    }

    #[test]
    fn matches_any_field() {
        let p = Project::new("T")
            .with_description("d")
            .with_year(2021)
            .with_image("images/chart.svg", Some("thumb"));
        assert!(matches_query(&p, "2021"));
        assert!(matches_query(&p, "chart.svg"));
        assert!(matches_query(&p, "thumb"));
    }

    #[test]
    fn query_is_not_trimmed() {
        let p = Project::new("Alpha");
        assert!(matches_query(&p, "alpha"));
        assert!(!matches_query(&p, " alpha"));
        assert!(!matches_query(&p, "alpha "));
    }

    #[test]
    fn filter_keeps_input_order() {
        let c = scenario_collection();
        let out = filter_by_query(&c, "b");
        assert_eq!(titles(out), vec!["B"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let c = scenario_collection();
        assert!(filter_by_query(&c, "zzz").is_empty());
    }
}
