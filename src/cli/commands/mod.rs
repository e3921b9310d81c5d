//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod cards;
mod helpers;
mod hydrate;
mod nav;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use showcase::config::Settings;
use showcase::view::ExternalLinkPolicy;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Prerender project cards and active navigation into HTML pages")]
#[command(version)]
pub struct Cli {
    /// Config file path (default: ./showcase.toml when present)
    #[arg(short, long, global = true, env = "SHOWCASE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight navigation and render every project container of a page
    Hydrate {
        /// Page to hydrate: a local HTML file or an http(s) URL
        page: String,
        /// Address the page is served from; sets the current path, the
        /// origin and the base for the projects document
        #[arg(long)]
        url: Option<String>,
        /// Projects document (local JSON file or URL) instead of the
        /// configured path resolved against the page
        #[arg(long)]
        data: Option<String>,
        /// Write the hydrated page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Which linked cards open in a new browsing context
        #[arg(long, value_enum)]
        link_policy: Option<ExternalLinkPolicy>,
    },

    /// Print the rendered cards for a projects document
    Cards {
        /// Projects document: a local JSON file or an http(s) URL
        /// (default: the configured data path)
        #[arg(long)]
        from: Option<String>,
        /// Keep only featured projects
        #[arg(long)]
        featured: bool,
        /// Show at most this many projects (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        limit: usize,
        /// Page address used to decide which links are external
        /// (default: the document location)
        #[arg(long)]
        url: Option<String>,
        /// Which linked cards open in a new browsing context
        #[arg(long, value_enum)]
        link_policy: Option<ExternalLinkPolicy>,
    },

    /// Show which navigation links a page marks as active
    Nav {
        /// Page to inspect: a local HTML file or an http(s) URL
        page: String,
        /// Address the page is served from
        #[arg(long)]
        url: Option<String>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Hydrate {
            page,
            url,
            data,
            output,
            link_policy,
        } => {
            if let Some(policy) = link_policy {
                settings.link_policy = policy;
            }
            hydrate::cmd_hydrate(
                &settings,
                &page,
                url.as_deref(),
                data.as_deref(),
                output.as_deref(),
            )
            .await
        }
        Commands::Cards {
            from,
            featured,
            limit,
            url,
            link_policy,
        } => {
            if let Some(policy) = link_policy {
                settings.link_policy = policy;
            }
            cards::cmd_cards(&settings, from.as_deref(), featured, limit, url.as_deref()).await
        }
        Commands::Nav { page, url } => nav::cmd_nav(&settings, &page, url.as_deref()).await,
    }
}
