//! Dashboard numbers computed from recorded GitHub payloads.

use chrono::{TimeZone, Utc};
use folio_site::analytics::{
    language_stats, repos_per_year, share_percent, totals, top_repository, years_active,
};
use folio_site::render::render_github_stats;
use folio_site::{GitHubUser, Repository};
use folio_test_utils::{GITHUB_REPOS_JSON, GITHUB_USER_JSON};

#[test]
fn top_language_share() {
    let repos: Vec<Repository> = serde_json::from_str(GITHUB_REPOS_JSON).unwrap();
    let stats = language_stats(&repos);
    let total: usize = stats.iter().map(|(_, c)| c).sum();
    let (top, count) = &stats[0];
    assert_eq!(top, "JavaScript");
    assert_eq!(share_percent(*count, total), 67);
}

#[test]
fn profile_summary() {
    let user: GitHubUser = serde_json::from_str(GITHUB_USER_JSON).unwrap();
    let repos: Vec<Repository> = serde_json::from_str(GITHUB_REPOS_JSON).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let years = years_active(user.created_at, now);
    assert_eq!(years, 5);
    assert_eq!(repos_per_year(repos.len(), years), "0.8");
    assert_eq!(totals(&repos).stars, 21);
    assert_eq!(top_repository(&repos).unwrap().html_url, "https://github.com/AncientAbacus/wildfire");

    let html = render_github_stats(&user);
    assert!(html.contains("<dt>Repos</dt><dd>4</dd>"));
    assert!(html.contains("<dt>Following</dt><dd>7</dd>"));
}
