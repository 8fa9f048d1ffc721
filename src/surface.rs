//! The display the lookup pipeline renders into.

use crate::error::FailureKind;
use crate::presenter::{ProfileView, RepoList};

/// The status line above the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Failed(FailureKind),
}

impl Status {
    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Loading => "Loading...".to_string(),
            Self::Failed(kind) => format!("{} ❌", kind.message()),
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Something that can show a profile lookup.
///
/// Calls arrive from the task running the lookup, so implementations must be
/// shareable across threads and marshal onto their own UI thread if they have one.
/// The controller holds its render lock during these calls, so they must not wait
/// on another lookup.
pub trait RenderSurface: Send + Sync {
    fn show_status(&self, status: Status);

    /// Writes a username into the search input.
    fn set_query(&self, username: &str);

    /// Shows the profile area with `profile`, or hides it when `None`.
    fn set_profile(&self, profile: Option<&ProfileView>);

    /// Replaces the repository area.
    fn set_repos(&self, repos: &RepoList);
}
