//! Card rendering command.

use tracing::error;

use showcase::config::Settings;
use showcase::dom::Element;
use showcase::loader::ListOptions;
use showcase::page::resolve_location;
use showcase::render::{render_error, CardRenderer};

use super::helpers::{http_client, page_url, project_loader};

/// Load a projects document and print the container markup.
pub async fn cmd_cards(
    settings: &Settings,
    from: Option<&str>,
    featured: bool,
    limit: usize,
    url: Option<&str>,
) -> anyhow::Result<()> {
    println!("{}", render_cards(settings, from, featured, limit, url).await?);
    Ok(())
}

/// Container markup for a projects document.
///
/// Load failures render the error placeholder; only invalid locations fail.
async fn render_cards(
    settings: &Settings,
    from: Option<&str>,
    featured: bool,
    limit: usize,
    url: Option<&str>,
) -> anyhow::Result<String> {
    let location = resolve_location(from.unwrap_or(settings.data_path.as_str()))?;
    let page = match url {
        Some(url) => page_url(url)?,
        None => location.clone(),
    };

    let client = http_client(settings)?;
    let loader = project_loader(settings, client);
    let options = ListOptions {
        featured_only: featured,
        limit: (limit > 0).then_some(limit),
    };

    let renderer = CardRenderer::new(page, settings.render_options());
    let mut container = Element::new("div");
    match loader.load(&location, options).await {
        Ok(records) => {
            renderer.render(&mut container, &records);
        }
        Err(err) => {
            error!("Failed to load projects from {}: {}", location, err);
            render_error(&mut container);
        }
    }

    Ok(container.inner_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase::render::{EMPTY_MESSAGE, ERROR_MESSAGE};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_document_renders_error_placeholder() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let html = render_cards(&Settings::default(), missing.to_str(), false, 0, None)
            .await
            .unwrap();
        assert!(html.contains(ERROR_MESSAGE));
        assert!(!html.contains("nope.json"));
    }

    #[tokio::test]
    async fn test_local_document_renders_cards() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"title": "One", "featured": true}, {"title": "Two"}, {"title": "Three", "featured": true}]"#,
        )
        .unwrap();

        let html = render_cards(&Settings::default(), path.to_str(), true, 1, None)
            .await
            .unwrap();
        assert!(html.contains("One"));
        assert!(!html.contains("Two"));
        assert!(!html.contains("Three"));

        std::fs::write(&path, "[]").unwrap();
        let html = render_cards(&Settings::default(), path.to_str(), false, 0, None)
            .await
            .unwrap();
        assert!(html.contains(EMPTY_MESSAGE));
    }
}
