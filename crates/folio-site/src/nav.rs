//! Site navigation
//!
//! Pages live one directory below the site root, so off the home page every
//! relative link needs a `../` prefix.

use serde::Serialize;

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Relative to the site root, or an absolute `http(s)` URL
    pub url: String,
    pub title: String,
}

impl Page {
    /// Create a page entry
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Whether the URL points off-site
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        crate::fetch::is_remote(&self.url)
    }
}

/// The site's pages, with the GitHub profile of `github_username`
#[must_use]
pub fn default_pages(github_username: &str) -> Vec<Page> {
    vec![
        Page::new("", "Home"),
        Page::new("projects/", "Projects"),
        Page::new("resume/", "Resume"),
        Page::new("contact/", "Contact"),
        Page::new(format!("https://github.com/{github_username}"), "Github"),
        Page::new("meta/", "Meta"),
    ]
}

/// Where the navigation is being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavContext {
    /// Path of the current page, e.g. `/portfolio/projects/`
    pub current_path: String,
    /// Whether the current page is the site root
    pub is_home: bool,
}

impl NavContext {
    /// Context for the home page at `root_path`
    #[must_use]
    pub fn home(root_path: impl Into<String>) -> Self {
        Self {
            current_path: root_path.into(),
            is_home: true,
        }
    }

    /// Context for a sub-page at `path`
    #[must_use]
    pub fn page(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            is_home: false,
        }
    }
}

/// A rendered navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub title: String,
    /// Points at the page being viewed
    pub current: bool,
    /// Opens in a new tab
    pub external: bool,
}

/// Resolve `pages` for `ctx`
#[must_use]
pub fn build_nav(pages: &[Page], ctx: &NavContext) -> Vec<NavLink> {
    pages
        .iter()
        .map(|page| {
            if page.is_absolute() {
                return NavLink {
                    href: page.url.clone(),
                    title: page.title.clone(),
                    current: false,
                    external: true,
                };
            }
            let href = if ctx.is_home {
                page.url.clone()
            } else {
                format!("../{}", page.url)
            };
            let current = resolve_path(&ctx.current_path, &href) == ctx.current_path;
            NavLink {
                href,
                title: page.title.clone(),
                current,
                external: false,
            }
        })
        .collect()
}

/// Resolve a relative `href` against the directory of `base`
#[must_use]
pub fn resolve_path(base: &str, href: &str) -> String {
    if href.starts_with('/') {
        return normalize(href);
    }
    let dir = match base.rfind('/') {
        Some(idx) => &base[..=idx],
        None => "/",
    };
    normalize(&format!("{dir}{href}"))
}

fn normalize(path: &str) -> String {
    let trailing = path.ends_with('/') || path.ends_with("/.") || path.ends_with("/..");
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    let mut out = format!("/{}", parts.join("/"));
    if trailing && !out.ends_with('/') {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn home_links_are_relative_to_root() {
        let links = build_nav(&default_pages("octocat"), &NavContext::home("/site/"));
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["", "projects/", "resume/", "contact/", "https://github.com/octocat", "meta/"]
        );
        assert!(links[0].current);
        assert!(links.iter().filter(|l| l.current).count() == 1);
    }

    #[test]
    fn sub_page_links_get_parent_prefix() {
        let links = build_nav(&default_pages("octocat"), &NavContext::page("/site/projects/"));
        assert_eq!(links[0].href, "../");
        assert_eq!(links[1].href, "../projects/");
        assert!(links[1].current);
        assert!(!links[0].current);
        assert_eq!(links[4].href, "https://github.com/octocat");
    }

    #[test]
    fn only_absolute_links_are_external() {
        let links = build_nav(&default_pages("octocat"), &NavContext::page("/site/meta/"));
        let external: Vec<_> = links.iter().filter(|l| l.external).map(|l| l.title.as_str()).collect();
        assert_eq!(external, vec!["Github"]);
        assert!(links[5].current);
    }

    #[test]
    fn resolves_dot_segments() {
        assert_eq!(resolve_path("/a/b/", "../c/"), "/a/c/");
        assert_eq!(resolve_path("/a/b/index.html", "../"), "/a/");
        assert_eq!(resolve_path("/a/", "./x"), "/a/x");
        assert_eq!(resolve_path("/", "../../x/"), "/x/");
        assert_eq!(resolve_path("/a/b/", "/abs/"), "/abs/");
    }
}
