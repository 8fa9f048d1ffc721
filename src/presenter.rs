//! Maps fetched records into the text a surface displays.

use crate::models::{non_empty, GitHubUser, Repository};

/// Shown in place of an absent profile field.
pub const PLACEHOLDER: &str = "—";

/// Shown in place of an absent repository description.
pub const NO_DESCRIPTION: &str = "No description";

/// Shown when a user has no repositories to list.
pub const NO_REPOSITORIES: &str = "No repositories found";

/// Descriptions longer than this many characters are cut.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Display fields for a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub login: String,
    pub avatar_url: String,
    pub display_name: String,
    pub bio: String,
    pub profile_url: String,
    pub public_repos: String,
    pub followers: String,
    pub following: String,
    pub company: String,
    pub location: String,
    pub website: WebsiteLink,
}

/// The website field: a label plus a link target, or no target when the link is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteLink {
    pub label: String,
    pub href: Option<String>,
}

/// One rendered repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    pub name: String,
    pub url: String,
    pub description: String,
    pub stats: String,
}

/// Contents of the repository area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoList {
    /// Nothing shown; a lookup is in flight or has failed.
    Cleared,
    /// The lookup finished without repositories.
    Empty,
    Rows(Vec<RepoRow>),
}

impl From<&GitHubUser> for ProfileView {
    fn from(user: &GitHubUser) -> Self {
        let or_placeholder = |v: &Option<String>| non_empty(v.as_deref()).unwrap_or(PLACEHOLDER).to_string();

        Self {
            login: user.login.clone(),
            avatar_url: user.avatar_url.clone(),
            display_name: non_empty(user.name.as_deref()).unwrap_or(user.login.as_str()).to_string(),
            bio: or_placeholder(&user.bio),
            profile_url: user.html_url.clone(),
            public_repos: user.public_repos.to_string(),
            followers: user.followers.to_string(),
            following: user.following.to_string(),
            company: or_placeholder(&user.company),
            location: or_placeholder(&user.location),
            website: WebsiteLink::new(user.blog.as_deref()),
        }
    }
}

impl WebsiteLink {
    #[must_use]
    pub fn new(blog: Option<&str>) -> Self {
        match non_empty(blog) {
            Some(site) => Self {
                label: site.to_string(),
                href: Some(website_href(site)),
            },
            None => Self {
                label: PLACEHOLDER.to_string(),
                href: None,
            },
        }
    }
}

/// Turns a website handle into a link target, assuming https when no scheme is given.
#[must_use]
pub fn website_href(site: &str) -> String {
    if site.starts_with("http") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}

/// Text shown for a repository description.
///
/// The ellipsis follows any present description, cut or not.
#[must_use]
pub fn describe(description: Option<&str>) -> String {
    match non_empty(description) {
        Some(text) => {
            let mut shown: String = text.chars().take(DESCRIPTION_LIMIT).collect();
            shown.push_str("...");
            shown
        }
        None => NO_DESCRIPTION.to_string(),
    }
}

impl From<&Repository> for RepoRow {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            description: describe(repo.description.as_deref()),
            stats: format!("⭐ {} • Forks: {}", repo.stargazers_count, repo.forks_count),
        }
    }
}

impl RepoList {
    #[must_use]
    pub fn from_repos(repos: &[Repository]) -> Self {
        if repos.is_empty() {
            Self::Empty
        } else {
            Self::Rows(repos.iter().map(RepoRow::from).collect())
        }
    }

    /// Text shown instead of rows, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_REPOSITORIES),
            Self::Cleared | Self::Rows(_) => None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[RepoRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Cleared | Self::Empty => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> GitHubUser {
        GitHubUser {
            login: "octocat".into(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231".into(),
            html_url: "https://github.com/octocat".into(),
            name: None,
            bio: None,
            public_repos: 8,
            followers: 21000,
            following: 9,
            company: Some("@github".into()),
            location: Some(String::new()),
            blog: None,
        }
    }

    #[test]
    fn profile_falls_back_to_login_and_placeholders() {
        let view = ProfileView::from(&user());

        assert_eq!(view.display_name, "octocat");
        assert_eq!(view.bio, PLACEHOLDER);
        assert_eq!(view.company, "@github");
        assert_eq!(view.location, PLACEHOLDER);
        assert_eq!(view.followers, "21000");
        assert_eq!(view.website, WebsiteLink { label: "—".into(), href: None });
    }

    #[test]
    fn profile_prefers_display_name() {
        let mut u = user();
        u.name = Some("The Octocat".into());
        assert_eq!(ProfileView::from(&u).display_name, "The Octocat");
    }

    #[test]
    fn website_gets_a_scheme() {
        assert_eq!(website_href("example.com"), "https://example.com");
        assert_eq!(website_href("https://example.com"), "https://example.com");
        assert_eq!(website_href("http://example.com"), "http://example.com");

        let link = WebsiteLink::new(Some("example.com"));
        assert_eq!(link.label, "example.com");
        assert_eq!(link.href.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn description_always_ends_with_ellipsis() {
        assert_eq!(describe(Some("short")), "short...");
        assert_eq!(describe(None), NO_DESCRIPTION);
        assert_eq!(describe(Some("")), NO_DESCRIPTION);

        let long = "x".repeat(150);
        let shown = describe(Some(&long));
        assert_eq!(shown.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(shown.starts_with(&"x".repeat(100)));
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn description_at_the_limit_is_kept_whole() {
        let exact = "y".repeat(DESCRIPTION_LIMIT);
        assert_eq!(describe(Some(&exact)), format!("{exact}..."));

        let over = "z".repeat(DESCRIPTION_LIMIT + 1);
        assert_eq!(describe(Some(&over)), format!("{}...", "z".repeat(DESCRIPTION_LIMIT)));
    }

    #[test]
    fn description_cuts_on_characters() {
        let long = "é".repeat(120);
        assert_eq!(describe(Some(&long)), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn repo_row_stats_line() {
        let repo = Repository {
            name: "hello-world".into(),
            html_url: "https://github.com/octocat/hello-world".into(),
            description: Some("My first repository".into()),
            stargazers_count: 42,
            forks_count: 7,
        };
        let row = RepoRow::from(&repo);
        assert_eq!(row.stats, "⭐ 42 • Forks: 7");
        assert_eq!(row.description, "My first repository...");
    }

    #[test]
    fn empty_list_has_placeholder() {
        let list = RepoList::from_repos(&[]);
        assert_eq!(list, RepoList::Empty);
        assert_eq!(list.placeholder(), Some(NO_REPOSITORIES));
        assert!(list.rows().is_empty());
        assert_eq!(RepoList::Cleared.placeholder(), None);
    }
}
