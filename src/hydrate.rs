//! Page hydration: highlight navigation, then fill every project container.
//!
//! Navigation is highlighted synchronously before any load starts. Each
//! container then runs its own load chain; all chains are driven
//! concurrently and a slow or failing one never blocks or fails a sibling.
//! Every failure is caught at its container, logged, and rendered as the
//! generic error placeholder.

use futures::future::join_all;
use tracing::{debug, error, info};
use url::Url;

use crate::loader::{ListOptions, LoadError, ProjectLoader};
use crate::models::ProjectRecord;
use crate::nav;
use crate::page::{container_options, Page};
use crate::render::{render_error, CardRenderer, RenderOptions};

/// What happened to one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerOutcome {
    /// Cards rendered.
    Rendered(usize),
    /// Nothing to show; the empty-state placeholder was rendered.
    Empty,
    /// Loading failed; the error placeholder was rendered.
    Failed,
}

/// Summary of one hydration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Navigation links marked active.
    pub active_links: usize,
    /// One entry per container, in document order.
    pub containers: Vec<ContainerOutcome>,
}

impl HydrationReport {
    pub fn failed(&self) -> usize {
        self.containers
            .iter()
            .filter(|outcome| **outcome == ContainerOutcome::Failed)
            .count()
    }
}

pub struct Hydrator {
    loader: ProjectLoader,
    options: RenderOptions,
    data_location: Option<Url>,
}

impl Hydrator {
    pub fn new(loader: ProjectLoader, options: RenderOptions) -> Self {
        Self {
            loader,
            options,
            data_location: None,
        }
    }

    /// Read the projects document from a fixed location instead of
    /// resolving it against each page.
    pub fn with_data_location(mut self, location: Url) -> Self {
        self.data_location = Some(location);
        self
    }

    /// Hydrate a page in place.
    pub async fn hydrate(&self, page: &mut Page) -> HydrationReport {
        let page_url = page.url.clone();

        let active_links = nav::highlight(&page_url, page.nav_links_mut());
        debug!(path = page_url.path(), active_links, "navigation highlighted");

        let renderer = CardRenderer::new(page_url.clone(), self.options);

        let mut containers = page.containers_mut();
        let bindings: Vec<ListOptions> = containers
            .iter()
            .map(|container| container_options(container))
            .collect();

        let loads = bindings
            .iter()
            .map(|options| self.load_for_container(&page_url, *options));
        let results = join_all(loads).await;

        let mut outcomes = Vec::with_capacity(results.len());
        for (index, (container, result)) in containers.iter_mut().zip(results).enumerate() {
            let outcome = match result {
                Ok(records) if records.is_empty() => {
                    renderer.render(container, &records);
                    ContainerOutcome::Empty
                }
                Ok(records) => ContainerOutcome::Rendered(renderer.render(container, &records)),
                Err(err) => {
                    error!(container = index, "Failed to hydrate projects: {}", err);
                    render_error(container);
                    ContainerOutcome::Failed
                }
            };
            info!(container = index, ?outcome, "container hydrated");
            outcomes.push(outcome);
        }

        HydrationReport {
            active_links,
            containers: outcomes,
        }
    }

    async fn load_for_container(
        &self,
        page_url: &Url,
        options: ListOptions,
    ) -> Result<Vec<ProjectRecord>, LoadError> {
        let location = match &self.data_location {
            Some(location) => location.clone(),
            None => self.loader.data_url(page_url)?,
        };
        self.loader.load(&location, options).await
    }
}
