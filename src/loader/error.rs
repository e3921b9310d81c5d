//! Project loading error types.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("Failed to load projects: {status}")]
    Fetch { status: u16 },
    /// The body was not valid JSON.
    #[error("Invalid projects JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a local file location: {0}")]
    NotLocal(Url),
    #[error("Unsupported projects location scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid projects location: {0}")]
    Location(#[from] url::ParseError),
}
