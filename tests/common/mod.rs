//! Shared helpers for driving the controller against a mock GitHub API.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use github_profile_finder::client::build_client;
use github_profile_finder::{ApiClient, Controller, ProfileView, RenderSurface, RepoList, Status};
use serde_json::{json, Value};
use url::Url;
use wiremock::MockServer;

/// One call made on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Status(Status),
    Query(String),
    Profile(Option<ProfileView>),
    Repos(RepoList),
}

/// Surface that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<Event>>,
}

impl RecordingSurface {
    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn status(&self) -> Option<Status> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Status(s) => Some(s),
            _ => None,
        })
    }

    /// The profile currently shown, `None` if hidden or never set.
    pub fn profile(&self) -> Option<ProfileView> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                Event::Profile(p) => Some(p),
                _ => None,
            })
            .flatten()
    }

    pub fn repos(&self) -> Option<RepoList> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Repos(r) => Some(r),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn show_status(&self, status: Status) {
        self.push(Event::Status(status));
    }

    fn set_query(&self, username: &str) {
        self.push(Event::Query(username.to_string()));
    }

    fn set_profile(&self, profile: Option<&ProfileView>) {
        self.push(Event::Profile(profile.cloned()));
    }

    fn set_repos(&self, repos: &RepoList) {
        self.push(Event::Repos(repos.clone()));
    }
}

pub fn api_client(base: &str) -> ApiClient {
    ApiClient::new(build_client().unwrap(), Url::parse(base).unwrap()).unwrap()
}

pub fn controller_for(base: &str, top_repos: usize) -> Controller<RecordingSurface> {
    Controller::new(api_client(base), Arc::new(RecordingSurface::default()), top_repos)
}

pub fn controller(server: &MockServer) -> Controller<RecordingSurface> {
    controller_for(&server.uri(), 8)
}

pub fn profile_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 583231,
        "name": "The Octocat",
        "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "bio": null,
        "public_repos": 8,
        "followers": 100,
        "following": 9,
        "company": "@github",
        "location": "San Francisco",
        "blog": "github.blog"
    })
}

pub fn repo_json(name: &str, stars: u64) -> Value {
    json!({
        "name": name,
        "html_url": format!("https://github.com/octocat/{name}"),
        "description": format!("About {name}"),
        "stargazers_count": stars,
        "forks_count": 1,
        "language": "Rust"
    })
}
