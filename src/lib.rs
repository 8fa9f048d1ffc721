//! Look up a GitHub user and show their profile with their most starred repositories.
//!
//! The pipeline is [`Controller::submit`]: fetch the profile, and only if that
//! succeeds, fetch and rank the repositories. Results are pushed into a
//! [`RenderSurface`], which the desktop binary implements with a Slint window.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod presenter;
pub mod ranker;
pub mod surface;

pub use client::ApiClient;
pub use config::Config;
pub use controller::{Controller, Outcome};
pub use error::{FailureKind, ProfileError};
pub use presenter::{ProfileView, RepoList, RepoRow, WebsiteLink};
pub use surface::{RenderSurface, Status};
