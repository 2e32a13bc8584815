//! HTML fragments
//!
//! Markup matches the site's stylesheet classes. All text is escaped.

use crate::github::GitHubUser;
use crate::nav::NavLink;
use crate::theme::ColorScheme;
use folio_filter::{LegendEntry, PieSlice, ProjectsView, Renderer};
use folio_model::{Project, ProjectCollection};

/// Shown when GitHub stats cannot be fetched
pub const GITHUB_UNAVAILABLE: &str =
    r#"<p style="opacity: 0.5; font-size: 0.9rem;">GitHub stats unavailable</p>"#;

/// Heading element used for project titles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Tag name
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Escape text for element content and quoted attributes
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// One `<article>` per project
#[must_use]
pub fn render_projects<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    heading: HeadingLevel,
) -> String {
    let tag = heading.tag();
    let mut html = String::new();
    for project in projects {
        let title = escape(&project.title);
        html.push_str("<article>\n");
        html.push_str(&format!("  <{tag}>{title}</{tag}>\n"));
        if let Some(image) = &project.image {
            let class = project.image_class.as_deref().unwrap_or_default();
            html.push_str(&format!(
                "  <img src=\"{}\" class=\"{}\" alt=\"{title}\">\n",
                escape(image),
                escape(class)
            ));
        }
        html.push_str(&format!("  <p>{}</p>\n", escape(&project.description)));
        if let Some(year) = &project.year {
            html.push_str(&format!("  <p>c. {}</p>\n", escape(&year.to_string())));
        }
        html.push_str("</article>\n");
    }
    html
}

/// Legend `<li>` items
#[must_use]
pub fn render_legend(entries: &[LegendEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        let class = if entry.selected {
            "legend-item selected"
        } else {
            "legend-item"
        };
        html.push_str(&format!(
            "<li style=\"--color:{}\" class=\"{class}\"><span class=\"swatch\"></span> {} <em>({})</em></li>\n",
            entry.color,
            escape(&entry.year.to_string()),
            entry.count
        ));
    }
    html
}

/// SVG path for a pie wedge centred on the origin
///
/// Angles are radians clockwise from twelve o'clock.
#[must_use]
pub fn arc_path(start: f64, end: f64, radius: f64) -> String {
    let point = |a: f64| (radius * a.sin(), -radius * a.cos());
    let sweep = end - start;
    if sweep >= std::f64::consts::TAU - 1e-9 {
        // A single arc cannot close on itself; draw the circle as two halves.
        let (x0, y0) = point(start);
        let (x1, y1) = point(start + std::f64::consts::PI);
        return format!(
            "M{x0:.3},{y0:.3}A{radius},{radius},0,1,1,{x1:.3},{y1:.3}A{radius},{radius},0,1,1,{x0:.3},{y0:.3}Z"
        );
    }
    let (x0, y0) = point(start);
    let (x1, y1) = point(end);
    let large = u8::from(sweep > std::f64::consts::PI);
    format!("M{x0:.3},{y0:.3}A{radius},{radius},0,{large},1,{x1:.3},{y1:.3}L0,0Z")
}

/// `<path>` elements for the pie
#[must_use]
pub fn render_pie(slices: &[PieSlice], radius: f64) -> String {
    let mut html = String::new();
    for slice in slices {
        let class = if slice.selected { " class=\"selected\"" } else { "" };
        html.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\"{class} data-year=\"{}\"></path>\n",
            arc_path(slice.start_angle, slice.end_angle, radius),
            slice.color,
            escape(&slice.year.to_string())
        ));
    }
    html
}

/// Navigation `<a>` elements
#[must_use]
pub fn render_nav(links: &[NavLink]) -> String {
    let mut html = String::from("<nav>");
    for link in links {
        html.push_str(&format!("<a href=\"{}\"", escape(&link.href)));
        if link.current {
            html.push_str(" class=\"current\"");
        }
        if link.external {
            html.push_str(" target=\"_blank\"");
        }
        html.push_str(&format!(">{}</a>", escape(&link.title)));
    }
    html.push_str("</nav>");
    html
}

/// Theme switcher with `selected` on the active scheme
#[must_use]
pub fn render_color_scheme_menu(active: ColorScheme) -> String {
    let mut html = String::from("<label class=\"color-scheme\">\n  Theme:\n  <select>\n");
    for scheme in ColorScheme::ALL {
        let selected = if scheme == active { " selected" } else { "" };
        html.push_str(&format!(
            "    <option value=\"{}\"{selected}>{}</option>\n",
            scheme.as_str(),
            scheme.label()
        ));
    }
    html.push_str("  </select>\n</label>");
    html
}

/// Profile numbers block
#[must_use]
pub fn render_github_stats(user: &GitHubUser) -> String {
    format!(
        "<dl class=\"github-stats\">\n  <div><dt>Repos</dt><dd>{}</dd></div>\n  <div><dt>Gists</dt><dd>{}</dd></div>\n  <div><dt>Followers</dt><dd>{}</dd></div>\n  <div><dt>Following</dt><dd>{}</dd></div>\n</dl>",
        user.public_repos, user.public_gists, user.followers, user.following
    )
}

/// Home-page card for a featured project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedCard {
    pub title: String,
    /// Project image or the placeholder
    pub background: String,
    /// Where clicking the card leads
    pub href: String,
}

/// First `count` projects as cards
#[must_use]
pub fn featured_projects(
    collection: &ProjectCollection,
    count: usize,
    placeholder: &str,
) -> Vec<FeaturedCard> {
    collection
        .first(count)
        .iter()
        .map(|project| FeaturedCard {
            title: project.title.clone(),
            background: project
                .image
                .clone()
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| placeholder.to_string()),
            href: "projects/".into(),
        })
        .collect()
}

/// Latest projects-page markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFragments {
    pub title: String,
    pub projects: String,
    pub legend: String,
    pub pie: String,
}

/// [`Renderer`] producing HTML fragments for the projects page
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    heading: HeadingLevel,
    radius: f64,
    fragments: PageFragments,
    frames: usize,
}

impl HtmlRenderer {
    /// Create with the heading level for project titles
    #[must_use]
    pub fn new(heading: HeadingLevel) -> Self {
        Self {
            heading,
            radius: 50.0,
            fragments: PageFragments::default(),
            frames: 0,
        }
    }

    /// Latest markup
    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &PageFragments {
        &self.fragments
    }

    /// Number of completed renders
    #[inline]
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(HeadingLevel::H2)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, view: &ProjectsView<'_>) {
        // Build every fragment first, then swap, so readers never see a mix.
        let next = PageFragments {
            title: escape(&view.title()),
            projects: render_projects(view.visible.iter().copied(), self.heading),
            legend: render_legend(&view.legend()),
            pie: render_pie(&view.slices(), self.radius),
        };
        self.fragments = next;
        self.frames += 1;
    }
}
