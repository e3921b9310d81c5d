//! Card rendering into a container element.

use url::Url;

use crate::dom::{Element, Node};
use crate::models::ProjectRecord;
use crate::view::{CardView, ExternalLinkPolicy};

/// Shown when there is nothing to render.
pub const EMPTY_MESSAGE: &str = "Projects will appear here soon.";

/// Shown when loading fails. Never carries error detail.
pub const ERROR_MESSAGE: &str = "Unable to load projects right now.";

/// Decorative affordance appended to linked cards when enabled.
pub const LEARN_MORE: &str = "Learn more →";

const CARD_CLASS: &str = "flex h-full flex-col gap-3 rounded-lg border border-gray-200 bg-white p-4 text-left shadow-sm transition hover:border-blue-500 hover:shadow";
const IMAGE_CLASS: &str = "h-40 w-full rounded-md object-cover";
const DATE_CLASS: &str = "text-xs font-semibold uppercase tracking-wide text-blue-600";
const TITLE_CLASS: &str = "text-lg font-semibold text-gray-900";
const DESCRIPTION_CLASS: &str = "text-sm leading-6 text-gray-600";
const LEARN_MORE_CLASS: &str = "mt-auto text-sm font-medium text-blue-600";
const EMPTY_CLASS: &str = "col-span-full text-center text-sm text-gray-500";
const ERROR_CLASS: &str = "col-span-full text-center text-sm text-red-600";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub link_policy: ExternalLinkPolicy,
    pub learn_more: bool,
}

/// Renders project cards for one page.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    page_url: Url,
    options: RenderOptions,
}

impl CardRenderer {
    pub fn new(page_url: Url, options: RenderOptions) -> Self {
        Self { page_url, options }
    }

    /// Build the card for one record.
    pub fn card(&self, record: &ProjectRecord) -> Element {
        let view = CardView::project(record, &self.page_url, self.options.link_policy);
        build_card(&view, self.options.learn_more)
    }

    /// Replace the container's content with one card per record, in order.
    ///
    /// An empty slice renders the empty-state placeholder instead. Returns
    /// the number of cards rendered.
    pub fn render(&self, container: &mut Element, projects: &[ProjectRecord]) -> usize {
        if projects.is_empty() {
            render_empty(container);
            return 0;
        }

        let batch: Vec<Node> = projects
            .iter()
            .map(|record| Node::Element(self.card(record)))
            .collect();
        container.replace_children(batch);
        projects.len()
    }
}

/// Build the tree for a projected card.
pub fn build_card(view: &CardView, learn_more: bool) -> Element {
    let mut card = match &view.link {
        Some(link) => {
            let anchor = Element::new("a").with_attr("href", link.href.as_str());
            if link.new_context {
                anchor
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer")
            } else {
                anchor
            }
        }
        None => Element::new("div"),
    };
    card.set_attr("class", CARD_CLASS);

    if let Some(image) = &view.image {
        card.append(
            Element::new("img")
                .with_attr("src", image.src.as_str())
                .with_attr("alt", image.alt.as_str())
                .with_attr("loading", "lazy")
                .with_class(IMAGE_CLASS),
        );
    }

    if let Some(date) = &view.date {
        card.append(
            Element::new("p")
                .with_class(DATE_CLASS)
                .with_text(date.as_str()),
        );
    }

    card.append(
        Element::new("h3")
            .with_class(TITLE_CLASS)
            .with_text(view.title.as_str()),
    );

    if let Some(description) = &view.description {
        card.append(
            Element::new("p")
                .with_class(DESCRIPTION_CLASS)
                .with_text(description.as_str()),
        );
    }

    if learn_more && view.link.is_some() {
        card.append(
            Element::new("span")
                .with_class(LEARN_MORE_CLASS)
                .with_text(LEARN_MORE),
        );
    }

    card
}

/// Replace the container's content with the empty-state placeholder.
pub fn render_empty(container: &mut Element) {
    container.replace_children(vec![placeholder(EMPTY_CLASS, EMPTY_MESSAGE)]);
}

/// Replace the container's content with the error placeholder.
pub fn render_error(container: &mut Element) {
    container.replace_children(vec![placeholder(ERROR_CLASS, ERROR_MESSAGE)]);
}

fn placeholder(class: &str, message: &str) -> Node {
    Element::new("p").with_class(class).with_text(message).into()
}
