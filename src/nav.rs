//! Active navigation link highlighting.
//!
//! The current path and each link's `href` are reduced to a page key before
//! comparison: query and fragment dropped, trailing slash stripped, last path
//! segment taken and percent-decoded, empty mapped to the default document,
//! `.html` removed. So `/about/`, `/about`, `about.html` and `./about.html` are
//! the same page, and `/` is `index.html`. Absolute links only match pages of
//! the same origin.

use std::borrow::Cow;

use url::Url;

use crate::dom::Element;

/// Document served for an empty or root path.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Classes added to the active link.
pub const ACTIVE_CLASSES: &[&str] = &["text-blue-600", "font-semibold"];

/// Class removed from the active link.
pub const INACTIVE_CLASS: &str = "text-gray-600";

/// Normalize a location path.
///
/// Strips a trailing slash unless the path is the root, and maps an empty or
/// root path to [`DEFAULT_DOCUMENT`].
pub fn normalize_path(path: &str) -> String {
    match path {
        "" | "/" => DEFAULT_DOCUMENT.to_string(),
        _ => path.strip_suffix('/').unwrap_or(path).to_string(),
    }
}

/// Comparison key for a location path.
pub fn page_key(path: &str) -> String {
    let path = strip_query_and_fragment(path);
    let normalized = normalize_path(path);
    let last = normalized.rsplit('/').next().unwrap_or_default();
    let last = urlencoding::decode(last).unwrap_or(Cow::Borrowed(last));
    let document: &str = if last.is_empty() || last == "." {
        DEFAULT_DOCUMENT
    } else {
        &last
    };
    document
        .strip_suffix(".html")
        .unwrap_or(document)
        .to_string()
}

/// Comparison key for a link target on the page at `page_url`.
///
/// Returns `None` for links that cannot name a page of this site: empty or
/// fragment-only targets, non-http(s) schemes such as `mailto:` and absolute
/// links to another origin.
pub fn href_key(href: &str, page_url: &Url) -> Option<String> {
    let href = href.trim();
    if strip_query_and_fragment(href).is_empty() {
        return None;
    }
    if has_scheme(href) || href.starts_with("//") {
        let url = page_url.join(href).ok()?;
        let same_site = matches!(url.scheme(), "http" | "https") && url.origin() == page_url.origin();
        return same_site.then(|| page_key(url.path()));
    }
    Some(page_key(href))
}

/// Whether a link with `href` points at the page at `page_url`.
pub fn is_active(page_url: &Url, href: &str) -> bool {
    href_key(href, page_url).is_some_and(|key| key == page_key(page_url.path()))
}

/// Mark a link as the current page.
pub fn mark_active(link: &mut Element) {
    for class in ACTIVE_CLASSES {
        link.add_class(class);
    }
    link.remove_class(INACTIVE_CLASS);
    link.set_attr("aria-current", "page");
}

/// Mark every link whose `href` matches the page at `page_url`.
///
/// Exclusivity is not enforced: links with equivalent targets are all
/// marked. Returns the number of links marked.
pub fn highlight<'a, I>(page_url: &Url, links: I) -> usize
where
    I: IntoIterator<Item = &'a mut Element>,
{
    let current = page_key(page_url.path());
    let mut marked = 0;
    for link in links {
        let matches = link
            .attr("href")
            .and_then(|href| href_key(href, page_url))
            .is_some_and(|key| key == current);
        if matches {
            mark_active(link);
            marked += 1;
        }
    }
    marked
}

fn strip_query_and_fragment(s: &str) -> &str {
    let end = s.find(['?', '#']).unwrap_or(s.len());
    &s[..end]
}

fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(colon) => {
            let scheme = &href[..colon];
            !scheme.is_empty()
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
