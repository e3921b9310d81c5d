//! Conversion from scraper's parse tree into the owned document tree.

use scraper::{ElementRef, Html};

use super::{Doctype, Element, Node};

pub(super) fn parse_document(html: &str) -> Vec<Node> {
    let parsed = Html::parse_document(html);
    let mut nodes = Vec::new();

    // Doctype and top-level comments sit beside the root element.
    for child in parsed.tree.root().children() {
        match child.value() {
            scraper::Node::Doctype(doctype) => nodes.push(Node::Doctype(Doctype {
                name: doctype.name().to_string(),
                public_id: doctype.public_id().to_string(),
                system_id: doctype.system_id().to_string(),
            })),
            scraper::Node::Comment(comment) => nodes.push(Node::Comment((**comment).to_string())),
            scraper::Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    nodes.push(Node::Element(convert_element(element)));
                }
            }
            _ => {}
        }
    }

    nodes
}

fn convert_element(element: ElementRef<'_>) -> Element {
    let value = element.value();
    let mut out = Element::with_name(value.name.clone());
    for (name, attr) in value.attrs.iter() {
        out.push_attr(name.clone(), String::from(&**attr));
    }

    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => out.append(Node::Text((**text).to_string())),
            scraper::Node::Comment(comment) => out.append(Node::Comment((**comment).to_string())),
            scraper::Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    out.append(convert_element(child));
                }
            }
            _ => {}
        }
    }

    out
}
