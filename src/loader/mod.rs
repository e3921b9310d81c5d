//! Project loading: fetch the projects document, normalize it, narrow it.
//!
//! Narrowing happens in a fixed order: the featured-only filter first, then
//! the limit. A limit of 3 on a featured-only view is the first 3 featured
//! records in source order. Records are never sorted.

mod error;
mod source;

pub use error::LoadError;
pub use source::{FileSource, HttpSource, ProjectSource};

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::http_client::HttpClient;
use crate::models::ProjectRecord;

/// Default location of the projects document, relative to the page.
pub const DEFAULT_DATA_PATH: &str = "data/projects.json";

/// Narrowing requested by a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Keep only records whose `featured` flag is set.
    pub featured_only: bool,
    /// Keep at most this many records. Always positive when set.
    pub limit: Option<usize>,
}

impl ListOptions {
    /// Build options from the raw container markers.
    pub fn from_markers(featured_only: bool, limit: Option<&str>) -> Self {
        Self {
            featured_only,
            limit: limit.and_then(parse_limit),
        }
    }

    /// Filter, then truncate.
    pub fn apply(&self, records: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
        let kept = records
            .into_iter()
            .filter(|record| !self.featured_only || record.is_featured());
        match self.limit {
            Some(limit) => kept.take(limit).collect(),
            None => kept.collect(),
        }
    }
}

/// Parse a container limit.
///
/// Reads a leading integer (`"3"`, `" 3 "`, `"3rd"` all give 3). Only positive
/// values count as a limit; zero, negatives and garbage mean "no limit".
pub fn parse_limit(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return None;
    }
    // Overlong digit runs saturate rather than being rejected.
    let limit = digits[..end].parse::<usize>().unwrap_or(usize::MAX);
    (limit > 0).then_some(limit)
}

/// Turn a parsed payload into records.
///
/// A payload that is valid JSON but not an array is tolerated and treated as
/// an empty list.
pub fn normalize_payload(payload: &Value) -> Vec<ProjectRecord> {
    match ProjectRecord::from_payload(payload) {
        Some(records) => records,
        None => {
            debug!(
                kind = json_kind(payload),
                "projects document is not an array, treating as empty"
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loads project records from whichever source handles a location's scheme.
#[derive(Clone)]
pub struct ProjectLoader {
    sources: Vec<Arc<dyn ProjectSource>>,
    data_path: String,
}

impl ProjectLoader {
    /// Loader with the HTTP and file sources registered.
    pub fn new(client: HttpClient, data_path: impl Into<String>) -> Self {
        Self::empty(data_path)
            .with_source(HttpSource::new(client))
            .with_source(FileSource)
    }

    /// Loader with no sources; every load fails until one is added.
    pub fn empty(data_path: impl Into<String>) -> Self {
        Self {
            sources: Vec::new(),
            data_path: data_path.into(),
        }
    }

    /// Register a source. Earlier sources win when several handle a scheme.
    pub fn with_source(mut self, source: impl ProjectSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Location of the projects document for a page.
    pub fn data_url(&self, page_url: &Url) -> Result<Url, LoadError> {
        Ok(page_url.join(&self.data_path)?)
    }

    /// Fetch and normalize every record at `location`, in source order.
    pub async fn fetch(&self, location: &Url) -> Result<Vec<ProjectRecord>, LoadError> {
        let source = self
            .sources
            .iter()
            .find(|source| source.handles(location.scheme()))
            .ok_or_else(|| LoadError::UnsupportedScheme(location.scheme().to_string()))?;

        let body = source.read(location).await?;
        let payload: Value = serde_json::from_str(&body)?;
        Ok(normalize_payload(&payload))
    }

    /// Fetch, then narrow with `options`.
    pub async fn load(
        &self,
        location: &Url,
        options: ListOptions,
    ) -> Result<Vec<ProjectRecord>, LoadError> {
        let records = self.fetch(location).await?;
        let total = records.len();
        let records = options.apply(records);
        debug!(url = %location, total, kept = records.len(), "projects loaded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn featured(flag: bool, title: &str) -> ProjectRecord {
        ProjectRecord {
            title: Some(title.to_string()),
            featured: Some(flag),
            ..Default::default()
        }
    }

    fn titles(records: &[ProjectRecord]) -> Vec<&str> {
        records.iter().filter_map(|r| r.title.as_deref()).collect()
    }

    #[test]
    fn test_filter_then_truncate() {
        let records = vec![
            featured(true, "0"),
            featured(false, "1"),
            featured(true, "2"),
            featured(true, "3"),
        ];
        let options = ListOptions {
            featured_only: true,
            limit: Some(2),
        };

        assert_eq!(titles(&options.apply(records)), vec!["0", "2"]);
    }

    #[test]
    fn test_limit_without_filter_keeps_source_order() {
        let records = vec![featured(false, "b"), featured(true, "a"), featured(false, "c")];
        let options = ListOptions {
            featured_only: false,
            limit: Some(2),
        };

        assert_eq!(titles(&options.apply(records)), vec!["b", "a"]);
    }

    #[test]
    fn test_featured_only_drops_missing_flag() {
        let records = vec![ProjectRecord::default(), featured(true, "x")];
        let options = ListOptions {
            featured_only: true,
            limit: None,
        };

        assert_eq!(titles(&options.apply(records)), vec!["x"]);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("3"), Some(3));
        assert_eq!(parse_limit(" 12 "), Some(12));
        assert_eq!(parse_limit("3rd"), Some(3));
        assert_eq!(parse_limit("+4"), Some(4));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-2"), None);
        assert_eq!(parse_limit("abc"), None);
        assert_eq!(parse_limit(""), None);
        assert_eq!(parse_limit("99999999999999999999999"), Some(usize::MAX));
    }

    #[test]
    fn test_from_markers() {
        let options = ListOptions::from_markers(true, Some("5"));
        assert!(options.featured_only);
        assert_eq!(options.limit, Some(5));

        assert_eq!(ListOptions::from_markers(false, Some("nope")).limit, None);
        assert_eq!(ListOptions::from_markers(false, None), ListOptions::default());
    }

    #[test]
    fn test_normalize_payload_tolerates_non_array() {
        assert!(normalize_payload(&json!({"projects": [{"title": "x"}]})).is_empty());
        assert!(normalize_payload(&json!(null)).is_empty());
        assert_eq!(normalize_payload(&json!([{}, 3])).len(), 2);
    }

    #[test]
    fn test_data_url_is_relative_to_page() {
        let loader = ProjectLoader::empty(DEFAULT_DATA_PATH);
        let page = Url::parse("https://me.example/work/index.html").unwrap();
        assert_eq!(
            loader.data_url(&page).unwrap().as_str(),
            "https://me.example/work/data/projects.json"
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"title":"a","featured":true},{"title":"b"},{"title":"c","featured":true}]"#,
        )
        .unwrap();

        let loader = ProjectLoader::empty(DEFAULT_DATA_PATH).with_source(FileSource);
        let url = Url::from_file_path(&path).unwrap();
        let records = loader
            .load(
                &url,
                ListOptions {
                    featured_only: true,
                    limit: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(titles(&records), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "[{").unwrap();

        let loader = ProjectLoader::empty(DEFAULT_DATA_PATH).with_source(FileSource);
        let err = loader
            .fetch(&Url::from_file_path(&path).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let loader = ProjectLoader::empty(DEFAULT_DATA_PATH).with_source(FileSource);
        let err = loader
            .fetch(&Url::parse("ftp://host/projects.json").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedScheme(ref s) if s == "ftp"));
    }
}
