//! Card view-models: which visual elements a project record produces.
//!
//! Projection is pure and needs no document; [`crate::render`] turns a
//! [`CardView`] into tree nodes.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::ProjectRecord;

/// Title shown when a record has none.
pub const UNTITLED: &str = "Untitled project";

/// Alt text for cover images of untitled records.
pub const DEFAULT_IMAGE_ALT: &str = "Project cover";

/// When linked cards open in a new browsing context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalLinkPolicy {
    /// Only links to an http(s) origin other than the page's.
    #[default]
    CrossOrigin,
    /// Every linked card.
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    /// Open in a new context with opener and referrer suppressed.
    pub new_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

/// Renderable fields of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub link: Option<CardLink>,
    pub image: Option<CardImage>,
    pub date: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl CardView {
    pub fn project(record: &ProjectRecord, page_url: &Url, policy: ExternalLinkPolicy) -> Self {
        let link = record.url.as_ref().map(|href| CardLink {
            href: href.clone(),
            new_context: match policy {
                ExternalLinkPolicy::Always => true,
                ExternalLinkPolicy::CrossOrigin => is_cross_origin(href, page_url),
            },
        });

        let image = record.image.as_ref().map(|src| CardImage {
            src: src.clone(),
            alt: match &record.title {
                Some(title) => format!("{title} cover"),
                None => DEFAULT_IMAGE_ALT.to_string(),
            },
        });

        Self {
            link,
            image,
            date: record.date.clone(),
            title: record.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            description: record.description.clone(),
        }
    }
}

/// Whether `href`, resolved against the page, is an http(s) address on a
/// different origin than the page.
///
/// Relative and protocol-relative links are resolved first, so `//cdn.x/y`
/// counts as external while `/work/a` does not. Unresolvable links are
/// treated as same-origin.
pub fn is_cross_origin(href: &str, page_url: &Url) -> bool {
    match page_url.join(href) {
        Ok(resolved) => {
            matches!(resolved.scheme(), "http" | "https") && resolved.origin() != page_url.origin()
        }
        Err(_) => false,
    }
}
