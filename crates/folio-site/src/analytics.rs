//! GitHub dashboard statistics
//!
//! Pure functions over fetched repositories. Ties always keep the order the
//! API returned.

use crate::github::Repository;
use chrono::{DateTime, Datelike, Months, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepoTotals {
    pub repos: usize,
    pub stars: u64,
    pub forks: u64,
    /// Distinct non-empty languages
    pub languages: usize,
}

/// Repository count per language, most used first
///
/// Repositories without a language are skipped.
#[must_use]
pub fn language_stats(repos: &[Repository]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        *counts.entry(lang).or_insert(0) += 1;
    }
    let mut stats: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(lang, count)| (lang.to_string(), count))
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    stats.sort_by(|a, b| b.1.cmp(&a.1));
    stats
}

/// Sum stars and forks, count repositories and languages
#[must_use]
pub fn totals(repos: &[Repository]) -> RepoTotals {
    let mut languages: Vec<&str> = repos.iter().filter_map(|r| r.language.as_deref()).collect();
    languages.sort_unstable();
    languages.dedup();
    RepoTotals {
        repos: repos.len(),
        stars: repos.iter().map(|r| u64::from(r.stargazers_count)).sum(),
        forks: repos.iter().map(|r| u64::from(r.forks_count)).sum(),
        languages: languages.len(),
    }
}

/// `part / total` as a rounded whole percentage; zero when `total` is zero
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn share_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Most starred repository; the first one wins ties
#[must_use]
pub fn top_repository(repos: &[Repository]) -> Option<&Repository> {
    repos.iter().reduce(|best, r| {
        if r.stargazers_count > best.stargazers_count {
            r
        } else {
            best
        }
    })
}

/// Up to `n` non-empty repositories, largest first
#[must_use]
pub fn largest_repositories(repos: &[Repository], n: usize) -> Vec<&Repository> {
    let mut sized: Vec<&Repository> = repos.iter().filter(|r| r.size > 0).collect();
    sized.sort_by(|a, b| b.size.cmp(&a.size));
    sized.truncate(n);
    sized
}

/// Up to `n` repositories, most recently updated first
#[must_use]
pub fn recent_repositories(repos: &[Repository], n: usize) -> Vec<&Repository> {
    let mut recent: Vec<&Repository> = repos.iter().collect();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recent.truncate(n);
    recent
}

/// Repositories created per calendar year, oldest year first
#[must_use]
pub fn repos_by_year(repos: &[Repository]) -> Vec<(i32, usize)> {
    let mut years: Vec<(i32, usize)> = Vec::new();
    for year in repos.iter().map(|r| r.created_at.year()) {
        match years.iter_mut().find(|(y, _)| *y == year) {
            Some((_, count)) => *count += 1,
            None => years.push((year, 1)),
        }
    }
    years.sort_by_key(|(y, _)| *y);
    years
}

/// Whole years between `joined` and `now` (365.25-day years)
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn years_active(joined: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let days = (now - joined).num_seconds() as f64 / 86_400.0;
    (days / 365.25).floor() as i64
}

/// Repositories per active year, one decimal, at least one year assumed
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn repos_per_year(repo_count: usize, years: i64) -> String {
    format!("{:.1}", repo_count as f64 / years.max(1) as f64)
}

/// `YYYY-MM` key for a timestamp
#[must_use]
pub fn month_key(at: DateTime<Utc>) -> String {
    format!("{}-{:02}", at.year(), at.month())
}

/// Activity count per month of last push (or update)
#[must_use]
pub fn monthly_activity(repos: &[Repository]) -> IndexMap<String, usize> {
    let mut months: IndexMap<String, usize> = IndexMap::new();
    for repo in repos {
        *months.entry(month_key(repo.last_activity())).or_insert(0) += 1;
    }
    months
}

/// Heatmap intensity bucket `0..=4` for `activity` relative to `max`
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn heat_level(activity: usize, max: usize) -> u8 {
    let max = max.max(1);
    let level = ((activity as f64 / max as f64) * 4.0).ceil();
    level.clamp(0.0, 4.0) as u8
}

/// Repositories updated in each of the last twelve months, oldest first
///
/// The current month is the last bucket.
#[must_use]
pub fn monthly_updates(repos: &[Repository], now: DateTime<Utc>) -> Vec<(String, usize)> {
    let this_month = now.with_day(1).unwrap_or(now);
    let mut buckets: Vec<(String, usize)> = (0..12u32)
        .rev()
        .map(|back| {
            let start = this_month
                .checked_sub_months(Months::new(back))
                .unwrap_or(this_month);
            (month_key(start), 0)
        })
        .collect();
    for key in repos.iter().map(|r| month_key(r.updated_at)) {
        if let Some((_, count)) = buckets.iter_mut().find(|(k, _)| *k == key) {
            *count += 1;
        }
    }
    buckets
}
