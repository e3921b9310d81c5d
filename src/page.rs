//! Hosting pages and the markup contract they expose.
//!
//! - `[data-projects]` marks a project-list container.
//! - `[data-projects-featured]` (presence) restricts it to featured records.
//! - `[data-projects-limit]` caps the number of records shown.
//! - `[data-nav] a[href]` are the navigation links.

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::dom::{Document, Element, Node};
use crate::http_client::HttpClient;
use crate::loader::ListOptions;

pub const PROJECTS_ATTR: &str = "data-projects";
pub const FEATURED_ATTR: &str = "data-projects-featured";
pub const LIMIT_ATTR: &str = "data-projects-limit";
pub const NAV_ATTR: &str = "data-nav";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read page {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to fetch page {url}: status {status}")]
    Status { url: Url, status: u16 },
    #[error("Failed to fetch page: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid page location: {0}")]
    Location(String),
}

/// Read the container markers of a project-list element.
pub fn container_options(container: &Element) -> ListOptions {
    ListOptions::from_markers(container.has_attr(FEATURED_ATTR), container.attr(LIMIT_ATTR))
}

/// A parsed page together with the address it is served from.
///
/// The URL supplies the current path (for navigation highlighting), the
/// origin (for external link detection) and the base that the projects
/// document is resolved against.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub document: Document,
}

impl Page {
    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            document: Document::parse(html),
        }
    }

    /// Open a page from a local path or an http(s)/file URL.
    pub async fn open(location: &str, client: &HttpClient) -> Result<Self, PageError> {
        let url = resolve_location(location)?;
        let html = match url.scheme() {
            "http" | "https" => {
                let response = client.get(&url).await?;
                if !response.is_success() {
                    return Err(PageError::Status {
                        status: response.status.as_u16(),
                        url,
                    });
                }
                response.text().await?
            }
            _ => {
                let path = url
                    .to_file_path()
                    .map_err(|_| PageError::Location(location.to_string()))?;
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| PageError::Read { path, source })?
            }
        };
        Ok(Self::parse(url, &html))
    }

    /// Path component of the page URL.
    pub fn current_path(&self) -> &str {
        self.url.path()
    }

    /// Project-list containers in document order.
    ///
    /// Containers nested inside another container are not returned; their
    /// content is replaced along with the outer one.
    pub fn containers_mut(&mut self) -> Vec<&mut Element> {
        let mut out = Vec::new();
        collect_containers(self.document.children_mut(), &mut out);
        out
    }

    /// Navigation links in document order.
    pub fn nav_links_mut(&mut self) -> Vec<&mut Element> {
        let mut out = Vec::new();
        collect_nav_links(self.document.children_mut(), false, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

fn collect_containers<'a>(nodes: &'a mut [Node], out: &mut Vec<&'a mut Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.has_attr(PROJECTS_ATTR) {
                out.push(element);
            } else {
                collect_containers(element.children_mut(), out);
            }
        }
    }
}

fn collect_nav_links<'a>(nodes: &'a mut [Node], in_nav: bool, out: &mut Vec<&'a mut Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            let in_nav = in_nav || element.has_attr(NAV_ATTR);
            if in_nav && element.name() == "a" && element.has_attr("href") {
                out.push(element);
            } else {
                collect_nav_links(element.children_mut(), in_nav, out);
            }
        }
    }
}

/// Turn a command-line page location into a URL.
///
/// `http`, `https` and `file` URLs are taken as-is; anything else is a
/// filesystem path.
pub fn resolve_location(location: &str) -> Result<Url, PageError> {
    if let Ok(url) = Url::parse(location) {
        if matches!(url.scheme(), "http" | "https" | "file") {
            return Ok(url);
        }
    }
    file_url(Path::new(location))
}

/// Absolute `file://` URL for a path, relative to the working directory.
///
/// The path need not exist; reading it is left to whoever opens the URL.
pub fn file_url(path: &Path) -> Result<Url, PageError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| PageError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };
    Url::from_file_path(&absolute).map_err(|_| PageError::Location(path.display().to_string()))
}
