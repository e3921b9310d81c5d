//! Navigation inspection command.

use console::style;

use showcase::config::Settings;
use showcase::nav;
use showcase::page::Page;

use super::helpers::{http_client, page_url};

/// List a page's navigation links, marking the ones that would be active.
pub async fn cmd_nav(settings: &Settings, location: &str, url: Option<&str>) -> anyhow::Result<()> {
    let client = http_client(settings)?;
    let mut page = Page::open(location, &client).await?;
    if let Some(url) = url {
        page.url = page_url(url)?;
    }

    let current_url = page.url.clone();
    let current = current_url.path().to_string();
    let mut links = page.nav_links_mut();
    if links.is_empty() {
        println!("{} No navigation links found", style("!").yellow());
        return Ok(());
    }

    let marked = nav::highlight(&current_url, links.iter_mut().map(|link| &mut **link));

    println!("\n{} {}", style("Navigation for").bold(), current);
    for link in &links {
        let href = link.attr("href").unwrap_or_default();
        if link.attr("aria-current") == Some("page") {
            println!("  {} {}", style("●").green(), style(href).green().bold());
        } else {
            println!("  {} {}", style("○").dim(), href);
        }
    }
    if marked == 0 {
        println!("{} No navigation link matches {}", style("!").yellow(), current);
    }

    Ok(())
}
