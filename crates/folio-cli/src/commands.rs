//! Subcommand handlers. Each returns the text to print on stdout.

use anyhow::{Context, Result};
use chrono::Utc;
use folio_filter::{Event, ProjectsPage, ProjectsView};
use folio_model::YearLabel;
use folio_site::analytics::{
    heat_level, language_stats, largest_repositories, monthly_updates, recent_repositories,
    repos_by_year, repos_per_year, share_percent, top_repository, totals, years_active,
};
use folio_site::fetch::{load_projects, AutoSource};
use folio_site::nav::{build_nav, default_pages, NavContext};
use folio_site::render::{
    featured_projects, render_color_scheme_menu, render_nav, HeadingLevel, HtmlRenderer,
};
use folio_site::{ColorScheme, GitHubClient, GitHubUser, PreferenceStore, Repository, SiteConfig};
use serde_json::json;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub(crate) fn parse(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            "html" => Self::Html,
            _ => Self::Text,
        }
    }
}

/// Match a typed year against the labels currently on the chart so that
/// `2023` selects a `"2023"` slice when that is what the data holds.
pub(crate) fn resolve_click(view: &ProjectsView<'_>, input: &str) -> YearLabel {
    view.aggregate
        .iter()
        .find(|group| group.year.to_string() == input)
        .map_or_else(|| YearLabel::parse_loose(input), |group| group.year.clone())
}

/// Options for the `projects` subcommand
#[derive(Debug, Clone)]
pub(crate) struct ProjectsArgs<'a> {
    pub(crate) root: &'a Path,
    pub(crate) source: &'a str,
    pub(crate) query: Option<&'a str>,
    pub(crate) clicks: Vec<&'a str>,
    pub(crate) format: OutputFormat,
}

pub(crate) async fn projects(args: ProjectsArgs<'_>) -> String {
    let collection = load_projects(&AutoSource::new(args.root), args.source).await;
    let mut page = ProjectsPage::mount(collection, HtmlRenderer::new(HeadingLevel::H2));

    if let Some(query) = args.query {
        page.dispatch(Event::QueryChanged(query.to_string()));
    }
    for input in args.clicks {
        let year = resolve_click(&page.view(), input);
        tracing::debug!(%year, "slice clicked");
        page.dispatch(Event::SliceClicked(year));
    }

    match args.format {
        OutputFormat::Html => {
            let f = page.renderer().fragments();
            format!(
                "<h1>{}</h1>\n<svg viewBox=\"-50 -50 100 100\">\n{}</svg>\n<ul class=\"legend\">\n{}</ul>\n<div class=\"projects\">\n{}</div>\n",
                f.title, f.pie, f.legend, f.projects
            )
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&page.view().snapshot()).unwrap_or_default()
        }
        OutputFormat::Text => render_text(&page.view()),
    }
}

/// Plain-text rendering of a view
pub(crate) fn render_text(view: &ProjectsView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.title()));
    for entry in view.legend() {
        let marker = if entry.selected { '*' } else { ' ' };
        out.push_str(&format!(" {marker} {} ({})\n", entry.year, entry.count));
    }
    out.push('\n');
    for project in &view.visible {
        match &project.year {
            Some(year) => {
                out.push_str(&format!("- {} [{year}]\n", project.title));
            }
            None => {
                out.push_str(&format!("- {}\n", project.title));
            }
        }
    }
    out
}

pub(crate) async fn github(config: &SiteConfig, login: &str, as_json: bool) -> Result<String> {
    let client = GitHubClient::new(config.api_base.as_str())?;
    let (user, repos) = tokio::try_join!(client.user(login), client.repositories(login))?;
    tracing::info!(login, repos = repos.len(), "fetched GitHub profile");
    let now = Utc::now();
    if as_json {
        let years = years_active(user.created_at, now);
        let value = json!({
            "user": user,
            "totals": totals(&repos),
            "languages": language_stats(&repos),
            "years_active": years,
            "repos_per_year": repos_per_year(repos.len(), years),
            "top_repository": top_repository(&repos).map(|r| r.html_url.clone()),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(github_summary(&user, &repos, now))
}

pub(crate) fn github_summary(
    user: &GitHubUser,
    repos: &[Repository],
    now: chrono::DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let years = years_active(user.created_at, now);
    let sums = totals(repos);
    out.push_str(&format!("{}\n", user.login));
    out.push_str(&format!(
        "  repos {}  gists {}  followers {}  following {}\n",
        user.public_repos, user.public_gists, user.followers, user.following
    ));
    out.push_str(&format!(
        "  stars {}  forks {}  languages {}\n",
        sums.stars, sums.forks, sums.languages
    ));
    out.push_str(&format!(
        "  active {years} years, {} repos/year\n",
        repos_per_year(repos.len(), years)
    ));

    let stats = language_stats(repos);
    let counted: usize = stats.iter().map(|(_, c)| c).sum();
    if let Some((language, count)) = stats.first() {
        out.push_str(&format!(
            "  top language {language} ({}%)\n",
            share_percent(*count, counted)
        ));
    }
    if let Some(top) = top_repository(repos) {
        out.push_str(&format!(
            "  top repository {} ({} stars)\n",
            top.name, top.stargazers_count
        ));
    }
    let largest = largest_repositories(repos, 3);
    if !largest.is_empty() {
        let names: Vec<String> = largest
            .iter()
            .map(|r| format!("{} ({} KB)", r.name, r.size))
            .collect();
        out.push_str(&format!("  largest {}\n", names.join(", ")));
    }
    let per_year: Vec<String> = repos_by_year(repos)
        .into_iter()
        .map(|(year, count)| format!("{year}:{count}"))
        .collect();
    if !per_year.is_empty() {
        out.push_str(&format!("  created {}\n", per_year.join(" ")));
    }

    // One digit per month, 0 (idle) to 4 (busiest), oldest first.
    let months = monthly_updates(repos, now);
    let busiest = months.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let heat: String = months
        .iter()
        .map(|(_, n)| char::from(b'0' + heat_level(*n, busiest)))
        .collect();
    out.push_str(&format!("  last 12 months {heat}\n"));

    let recent = recent_repositories(repos, 5);
    if !recent.is_empty() {
        out.push_str("  recent:\n");
        for repo in recent {
            out.push_str(&format!(
                "    {} {}\n",
                repo.last_activity().format("%Y-%m-%d"),
                repo.name
            ));
        }
    }
    out
}

/// Home-page featured cards, one per line
pub(crate) async fn home(config: &SiteConfig, root: &Path, source: &str) -> String {
    let collection = load_projects(&AutoSource::new(root), source).await;
    let cards = featured_projects(&collection, config.featured_count, &config.placeholder_image);
    let mut out = String::new();
    for card in cards {
        out.push_str(&format!("{}\t{}\t{}\n", card.title, card.background, card.href));
    }
    out
}

pub(crate) fn nav(config: &SiteConfig, current: &str, home: bool, as_html: bool) -> String {
    let ctx = if home {
        NavContext::home(current)
    } else {
        NavContext::page(current)
    };
    let links = build_nav(&default_pages(&config.github_username), &ctx);
    if as_html {
        return render_nav(&links);
    }
    let mut out = String::new();
    for link in links {
        let mut flags = Vec::new();
        if link.current {
            flags.push("current");
        }
        if link.external {
            flags.push("external");
        }
        out.push_str(&format!("{:<10} {} {}\n", link.title, link.href, flags.join(",")));
    }
    out
}

pub(crate) fn theme_get(config: &SiteConfig, as_html: bool) -> Result<String> {
    let store = PreferenceStore::new(config.preference_path.clone());
    let scheme = store
        .load()
        .with_context(|| format!("reading {}", store.path().display()))?;
    if as_html {
        return Ok(render_color_scheme_menu(scheme));
    }
    Ok(format!("{scheme}"))
}

pub(crate) fn theme_set(config: &SiteConfig, name: &str) -> Result<String> {
    let scheme: ColorScheme = name.parse()?;
    let store = PreferenceStore::new(config.preference_path.clone());
    store
        .save(scheme)
        .with_context(|| format!("writing {}", store.path().display()))?;
    Ok(format!("{scheme}"))
}
