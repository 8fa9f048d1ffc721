//! Picks the repositories worth showing on a profile.

use crate::client::ApiClient;
use crate::models::Repository;

const LOG_TARGET: &str = "ranker";

/// Number of repositories shown when nothing else is configured.
pub const DEFAULT_TOP_REPOS: usize = 8;

/// Orders repositories by star count, most starred first, and keeps the first `count`.
///
/// The sort is stable, so repositories with equal star counts keep their API order.
#[must_use]
pub fn rank_top(mut repos: Vec<Repository>, count: usize) -> Vec<Repository> {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(count);
    repos
}

/// Fetches a user's repositories and ranks them.
///
/// Any failure yields an empty list: repository display never blocks the profile.
pub async fn fetch_top(client: &ApiClient, username: &str, count: usize) -> Vec<Repository> {
    match client.fetch_user_repos(username).await {
        Ok(repos) => {
            log::debug!(target: LOG_TARGET, "Ranking {} repositories for '{username}'", repos.len());
            rank_top(repos, count)
        }
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Could not load repositories for '{username}': {e:#}");
            Vec::new()
        }
    }
}
