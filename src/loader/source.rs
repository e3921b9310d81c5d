//! Where project documents come from.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::LoadError;
use crate::http_client::HttpClient;

/// A backend able to read the raw projects document at a location.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Whether this source serves locations with the given URL scheme.
    fn handles(&self, scheme: &str) -> bool;

    /// Read the raw document body.
    async fn read(&self, location: &Url) -> Result<String, LoadError>;
}

/// Reads project documents over HTTP(S).
pub struct HttpSource {
    client: HttpClient,
}

impl HttpSource {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectSource for HttpSource {
    fn handles(&self, scheme: &str) -> bool {
        matches!(scheme, "http" | "https")
    }

    async fn read(&self, location: &Url) -> Result<String, LoadError> {
        let response = self.client.get(location).await?;
        if !response.is_success() {
            return Err(LoadError::Fetch {
                status: response.status.as_u16(),
            });
        }
        if let Some(content_type) = response.content_type() {
            debug!(url = %location, content_type, "projects document received");
        }
        Ok(response.text().await?)
    }
}

/// Reads project documents from the local filesystem (`file://` locations).
#[derive(Default)]
pub struct FileSource;

#[async_trait]
impl ProjectSource for FileSource {
    fn handles(&self, scheme: &str) -> bool {
        scheme == "file"
    }

    async fn read(&self, location: &Url) -> Result<String, LoadError> {
        let path = location
            .to_file_path()
            .map_err(|_| LoadError::NotLocal(location.clone()))?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io { path, source })
    }
}
