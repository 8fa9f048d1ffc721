#![windows_subsystem = "windows"]
mod window;
slint::include_modules!();

use std::sync::Arc;

use github_profile_finder::{client, ApiClient, Config, Controller};

use crate::window::WindowSurface;

fn main() -> anyhow::Result<()> {
    // Load .env variables
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    log::debug!("Using API at {} with {} top repositories", config.api_url, config.top_repos);

    // Shared HTTP Client
    let http_client = client::build_client()?;
    let api = ApiClient::new(http_client.clone(), config.api_url)?;

    // Background tokio runtime for async HTTP
    let rt = Arc::new(tokio::runtime::Runtime::new()?);

    // Create the UI
    let app = AppWindow::new()?;

    let surface = Arc::new(WindowSurface::new(app.as_weak(), http_client, rt.handle().clone()));
    let controller = Arc::new(Controller::new(api, surface, config.top_repos));

    // =============================================
    //  CALLBACK: search-requested
    // =============================================
    {
        let controller = controller.clone();
        let rt = rt.clone();

        app.on_search_requested(move |query| {
            let controller = controller.clone();
            let query = query.to_string();

            rt.spawn(async move {
                let _ = controller.submit(&query).await;
            });
        });
    }

    // =============================================
    //  CALLBACK: link-clicked (profile, website, repos)
    // =============================================
    app.on_link_clicked(|url| {
        // Open the raw URL in the native Web Browser
        if let Err(e) = open::that(url.as_str()) {
            log::warn!("Could not open '{url}': {e}");
        }
    });

    // Deep link such as `#octocat` or `https://host/finder#octocat`
    if let Some(link) = std::env::args().nth(1) {
        let controller = controller.clone();
        rt.spawn(async move {
            let _ = controller.open_deep_link(&link).await;
        });
    }

    // Run the Slint event loop
    app.run()?;

    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}
