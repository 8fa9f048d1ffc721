use std::rc::Rc;

use github_profile_finder::client::download_avatar_pixels;
use github_profile_finder::{ProfileView, RenderSurface, RepoList, Status};
use slint::{Image, Rgba8Pixel, SharedPixelBuffer, SharedString, VecModel};

use crate::{AppWindow, RepoItem};

const LOG_TARGET: &str = "window";
const AVATAR_SIZE: u32 = 128;

/// Renders lookups into the Slint window.
///
/// Every update is posted to the Slint event loop, so this can be driven from the tokio runtime.
pub struct WindowSurface {
    window: slint::Weak<AppWindow>,
    http: reqwest::Client,
    runtime: tokio::runtime::Handle,
}

impl WindowSurface {
    pub fn new(window: slint::Weak<AppWindow>, http: reqwest::Client, runtime: tokio::runtime::Handle) -> Self {
        Self { window, http, runtime }
    }

    fn update(&self, f: impl FnOnce(AppWindow) + Send + 'static) {
        let window = self.window.clone();
        let posted = slint::invoke_from_event_loop(move || {
            if let Some(app) = window.upgrade() {
                f(app);
            }
        });

        if let Err(e) = posted {
            log::warn!(target: LOG_TARGET, "Dropping UI update, event loop is gone: {e}");
        }
    }

    fn load_avatar(&self, profile_url: String, avatar_url: String) {
        let http = self.http.clone();
        let window = self.window.clone();

        let _ = self.runtime.spawn(async move {
            let Some((pixels, w, h)) = download_avatar_pixels(&http, &avatar_url, AVATAR_SIZE).await else {
                return;
            };

            let _ = slint::invoke_from_event_loop(move || {
                let Some(app) = window.upgrade() else { return };
                // Another profile may have replaced this one while downloading.
                if !app.get_profile_visible() || app.get_profile_url().as_str() != profile_url {
                    return;
                }
                let buf = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&pixels, w, h);
                app.set_avatar(Image::from_rgba8(buf));
            });
        });
    }
}

impl RenderSurface for WindowSurface {
    fn show_status(&self, status: Status) {
        let text: SharedString = status.text().into();
        let is_error = status.is_error();

        self.update(move |app| {
            app.set_status_text(text);
            app.set_status_is_error(is_error);
        });
    }

    fn set_query(&self, username: &str) {
        let query: SharedString = username.into();
        self.update(move |app| app.set_search_query(query));
    }

    fn set_profile(&self, profile: Option<&ProfileView>) {
        let Some(view) = profile else {
            self.update(|app| {
                app.set_profile_visible(false);
                app.set_avatar(Image::default());
            });
            return;
        };

        let display_name: SharedString = view.display_name.as_str().into();
        let bio: SharedString = view.bio.as_str().into();
        let profile_url: SharedString = view.profile_url.as_str().into();
        let public_repos: SharedString = view.public_repos.as_str().into();
        let followers: SharedString = view.followers.as_str().into();
        let following: SharedString = view.following.as_str().into();
        let company: SharedString = view.company.as_str().into();
        let location: SharedString = view.location.as_str().into();
        let website_label: SharedString = view.website.label.as_str().into();
        let website_url: SharedString = view.website.href.as_deref().unwrap_or_default().into();
        let website_enabled = view.website.href.is_some();

        self.update(move |app| {
            app.set_display_name(display_name);
            app.set_bio(bio);
            app.set_profile_url(profile_url);
            app.set_public_repos(public_repos);
            app.set_followers(followers);
            app.set_following(following);
            app.set_company(company);
            app.set_location(location);
            app.set_website_label(website_label);
            app.set_website_url(website_url);
            app.set_website_enabled(website_enabled);
            app.set_avatar(Image::default());
            app.set_profile_visible(true);
        });

        self.load_avatar(view.profile_url.clone(), view.avatar_url.clone());
    }

    fn set_repos(&self, repos: &RepoList) {
        let items: Vec<RepoItem> = repos
            .rows()
            .iter()
            .map(|r| RepoItem {
                name: r.name.as_str().into(),
                url: r.url.as_str().into(),
                description: r.description.as_str().into(),
                stats: r.stats.as_str().into(),
            })
            .collect();
        let placeholder: SharedString = repos.placeholder().unwrap_or_default().into();

        self.update(move |app| {
            let repo_model = Rc::new(VecModel::from(items));
            app.set_repo_list(repo_model.into());
            app.set_repos_placeholder(placeholder);
        });
    }
}
