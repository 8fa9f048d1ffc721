//! Drives a lookup from a submitted username to a rendered profile.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use url::Url;

use crate::client::ApiClient;
use crate::error::ProfileError;
use crate::models::{GitHubUser, Repository};
use crate::presenter::{ProfileView, RepoList};
use crate::ranker;
use crate::surface::{RenderSurface, Status};

const LOG_TARGET: &str = "controller";

/// How a submission ended.
#[derive(Debug)]
pub enum Outcome {
    /// The input was blank; nothing was requested or rendered.
    Ignored,
    /// A newer submission started while this one was waiting; its results were dropped.
    Superseded,
    Failed(ProfileError),
    Shown {
        profile: GitHubUser,
        repos: Vec<Repository>,
    },
}

/// Runs lookups against the API and renders them into a surface.
///
/// Each non-blank submission takes a sequence number. Only the latest one may
/// render; an older lookup still finishes its request but then stops quietly.
/// The number is checked and the surface updated under one lock, so a stale
/// lookup cannot slip a render in after a newer one has started.
#[derive(Debug)]
pub struct Controller<S> {
    client: ApiClient,
    surface: Arc<S>,
    top_repos: usize,
    latest: Mutex<u64>,
}

impl<S: RenderSurface> Controller<S> {
    pub fn new(client: ApiClient, surface: Arc<S>, top_repos: usize) -> Self {
        Self {
            client,
            surface,
            top_repos,
            latest: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    fn lock_latest(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Holds the render lock if `token` is still the latest submission.
    fn claim(&self, token: u64) -> Option<MutexGuard<'_, u64>> {
        let latest = self.lock_latest();
        (*latest == token).then_some(latest)
    }

    /// Looks up the user named by `input`, ignoring surrounding whitespace.
    pub async fn submit(&self, input: &str) -> Outcome {
        let username = input.trim();
        if username.is_empty() {
            return Outcome::Ignored;
        }

        let token = {
            let mut latest = self.lock_latest();
            *latest += 1;
            log::info!(target: LOG_TARGET, "Looking up '{username}'");

            // Stale data must not linger while the request is in flight.
            self.surface.show_status(Status::Loading);
            self.surface.set_profile(None);
            self.surface.set_repos(&RepoList::Cleared);
            *latest
        };

        let result = self.client.fetch_user(username).await;

        let profile = {
            let Some(_render) = self.claim(token) else {
                log::debug!(target: LOG_TARGET, "Dropping superseded profile for '{username}'");
                return Outcome::Superseded;
            };

            match result {
                Ok(profile) => {
                    self.surface.show_status(Status::Idle);
                    self.surface.set_profile(Some(&ProfileView::from(&profile)));
                    profile
                }
                Err(e) => {
                    log::info!(target: LOG_TARGET, "Lookup of '{username}' failed: {e}");
                    self.surface.show_status(Status::Failed(e.kind()));
                    return Outcome::Failed(e);
                }
            }
        };

        let repos = ranker::fetch_top(&self.client, username, self.top_repos).await;

        {
            let Some(_render) = self.claim(token) else {
                log::debug!(target: LOG_TARGET, "Dropping superseded repositories for '{username}'");
                return Outcome::Superseded;
            };
            self.surface.set_repos(&RepoList::from_repos(&repos));
        }
        log::debug!(target: LOG_TARGET, "Rendered '{username}' with {} repositories", repos.len());

        Outcome::Shown { profile, repos }
    }

    /// Handles a startup link: the fragment names the user, exactly as if typed and submitted.
    pub async fn open_deep_link(&self, link: &str) -> Outcome {
        let Some(username) = username_from_link(link) else {
            return Outcome::Ignored;
        };

        self.surface.set_query(&username);
        self.submit(&username).await
    }
}

/// Extracts the username carried by a link's fragment.
///
/// Accepts a full URL (`https://host/page#octocat`), a bare fragment (`#octocat`)
/// or a plain name. Anything before the first `#` is not part of the name.
/// Returns `None` when there is nothing after the `#`.
#[must_use]
pub fn username_from_link(link: &str) -> Option<String> {
    let fragment = match Url::parse(link) {
        Ok(url) => url.fragment().unwrap_or_default().to_string(),
        Err(_) => link.split_once('#').map_or(link, |(_, f)| f).to_string(),
    };

    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}
