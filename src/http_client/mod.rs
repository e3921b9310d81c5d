//! HTTP client used for fetching hosting pages and project documents.

mod response;

pub use response::HttpResponse;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::debug;
use url::Url;

/// Default user agent sent with every request.
pub const USER_AGENT: &str = concat!("showcase/", env!("CARGO_PKG_VERSION"));

/// Resolve user agent from config value.
/// - None or empty => default showcase user agent
/// - other => custom user agent string
pub fn resolve_user_agent(config: Option<&str>) -> String {
    match config {
        Some(custom) if !custom.trim().is_empty() => custom.to_string(),
        _ => USER_AGENT.to_string(),
    }
}

/// Thin wrapper over a shared reqwest client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(resolve_user_agent(user_agent))
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request.
    ///
    /// Non-success statuses are returned as responses, not errors; callers
    /// decide how to treat them.
    pub async fn get(&self, url: &Url) -> Result<HttpResponse, reqwest::Error> {
        let start = Instant::now();
        let response = self.client.get(url.clone()).send().await?;

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        debug!(
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "GET"
        );

        Ok(HttpResponse {
            status: response.status(),
            headers,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_user_agent_default() {
        assert_eq!(resolve_user_agent(None), USER_AGENT);
        assert_eq!(resolve_user_agent(Some("  ")), USER_AGENT);
        assert!(USER_AGENT.starts_with("showcase/"));
    }

    #[test]
    fn test_resolve_user_agent_custom() {
        assert_eq!(resolve_user_agent(Some("MyBot/1.0")), "MyBot/1.0");
    }
}
