//! HTML serialization for the document tree.
//!
//! The tree implements html5ever's `Serialize`, so raw-text elements, void
//! elements, namespaced attributes and escaping follow html5ever's rules.

use std::io;

use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope};

use super::{Element, Node};

/// Serialize `node` to a string.
pub(super) fn to_html<T: Serialize>(node: &T, traversal_scope: TraversalScope) -> String {
    let mut buf = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..SerializeOpts::default()
    };
    if let Err(err) = html5ever::serialize(&mut buf, node, opts) {
        tracing::warn!("HTML serialization failed: {}", err);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

impl Serialize for Element {
    fn serialize<S: Serializer>(
        &self,
        serializer: &mut S,
        traversal_scope: TraversalScope,
    ) -> io::Result<()> {
        match traversal_scope {
            TraversalScope::IncludeNode => write_element(self, serializer),
            TraversalScope::ChildrenOnly(_) => write_nodes(&self.children, serializer),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: &mut S, _: TraversalScope) -> io::Result<()> {
        write_node(self, serializer)
    }
}

fn write_nodes<S: Serializer>(nodes: &[Node], serializer: &mut S) -> io::Result<()> {
    for node in nodes {
        write_node(node, serializer)?;
    }
    Ok(())
}

fn write_node<S: Serializer>(node: &Node, serializer: &mut S) -> io::Result<()> {
    match node {
        Node::Element(element) => write_element(element, serializer),
        Node::Text(text) => serializer.write_text(text),
        Node::Comment(comment) => serializer.write_comment(comment),
        Node::Doctype(doctype) => serializer.write_doctype(&doctype.name),
    }
}

fn write_element<S: Serializer>(element: &Element, serializer: &mut S) -> io::Result<()> {
    let attrs = element.attrs.iter().map(|(name, value)| (name, value.as_str()));
    serializer.start_elem(element.name.clone(), attrs)?;
    write_nodes(&element.children, serializer)?;
    serializer.end_elem(element.name.clone())
}
