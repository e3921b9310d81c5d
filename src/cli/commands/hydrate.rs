//! Page hydration command.

use std::path::Path;

use anyhow::Context;
use console::style;

use showcase::config::Settings;
use showcase::hydrate::{ContainerOutcome, Hydrator};
use showcase::page::{resolve_location, Page};

use super::helpers::{http_client, page_url, project_loader};

/// Hydrate a page and write the result.
pub async fn cmd_hydrate(
    settings: &Settings,
    location: &str,
    url: Option<&str>,
    data: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let client = http_client(settings)?;
    let mut page = Page::open(location, &client).await?;
    if let Some(url) = url {
        page.url = page_url(url)?;
    }

    let mut hydrator = Hydrator::new(project_loader(settings, client), settings.render_options());
    if let Some(data) = data {
        hydrator = hydrator.with_data_location(resolve_location(data)?);
    }

    eprintln!("{} Hydrating {}", style("→").cyan(), page.url);
    let report = hydrator.hydrate(&mut page).await;

    match report.active_links {
        0 => eprintln!("  {} No navigation link matches", style("!").yellow()),
        n => eprintln!("  {} {} active navigation link(s)", style("✓").green(), n),
    }
    if report.containers.is_empty() {
        eprintln!("  {} No project containers found", style("!").yellow());
    }
    for (index, outcome) in report.containers.iter().enumerate() {
        match outcome {
            ContainerOutcome::Rendered(count) => eprintln!(
                "  {} Container {}: {} project(s)",
                style("✓").green(),
                index + 1,
                count
            ),
            ContainerOutcome::Empty => eprintln!(
                "  {} Container {}: no projects",
                style("✓").green(),
                index + 1
            ),
            ContainerOutcome::Failed => eprintln!(
                "  {} Container {}: failed to load projects (see log)",
                style("✗").red(),
                index + 1
            ),
        }
    }

    let html = page.to_html();
    match output {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  {} Wrote {}", style("✓").green(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
