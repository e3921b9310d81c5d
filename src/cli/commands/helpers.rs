//! Shared helper functions for CLI commands.

use anyhow::Context;
use url::Url;

use showcase::config::Settings;
use showcase::http_client::HttpClient;
use showcase::loader::ProjectLoader;

/// HTTP client configured from settings.
pub fn http_client(settings: &Settings) -> anyhow::Result<HttpClient> {
    HttpClient::new(settings.timeout(), settings.user_agent.as_deref())
        .context("Failed to create HTTP client")
}

/// Project loader with the HTTP and file sources.
pub fn project_loader(settings: &Settings, client: HttpClient) -> ProjectLoader {
    ProjectLoader::new(client, settings.data_path.clone())
}

/// Parse an absolute page address given with `--url`.
pub fn page_url(raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw).with_context(|| format!("Invalid page URL: {}", raw))
}
