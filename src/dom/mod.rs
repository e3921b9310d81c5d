//! A small owned document tree.
//!
//! Pages are parsed into this tree, mutated in place (cards inserted, nav
//! links marked) and serialized back to HTML with html5ever's serializer.
//! Text nodes always hold plain text and are escaped on output, so content
//! placed in the tree can never be interpreted as markup.

mod parse;
mod serialize;

use std::fmt;

use html5ever::serialize::TraversalScope;
use html5ever::{ns, LocalName, QualName};

pub const CLASS_ATTR: &str = "class";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(Doctype),
}

/// A document type declaration, including legacy public and system ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doctype {
    pub name: String,
    pub public_id: String,
    pub system_id: String,
}

impl fmt::Display for Doctype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<!DOCTYPE {}", self.name)?;
        match (self.public_id.is_empty(), self.system_id.is_empty()) {
            (false, true) => write!(f, " PUBLIC \"{}\"", self.public_id)?,
            (false, false) => write!(f, " PUBLIC \"{}\" \"{}\"", self.public_id, self.system_id)?,
            (true, false) => write!(f, " SYSTEM \"{}\"", self.system_id)?,
            (true, true) => {}
        }
        f.write_str(">")
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QualName,
    attrs: Vec<(QualName, String)>,
    children: Vec<Node>,
}

impl Element {
    /// A new HTML element.
    pub fn new(name: &str) -> Self {
        Self::with_name(QualName::new(None, ns!(html), LocalName::from(name)))
    }

    /// A new element with a fully qualified (possibly foreign) name.
    pub fn with_name(name: QualName) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr(CLASS_ATTR, class)
    }

    /// Append a plain-text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::text(text));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name.local
    }

    /// Value of a plain (un-namespaced) attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| is_plain(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&QualName, &str)> {
        self.attrs.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Set a plain attribute, replacing any existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| is_plain(key, name)) {
            Some((_, existing)) => *existing = value,
            None => self
                .attrs
                .push((QualName::new(None, ns!(), LocalName::from(name)), value)),
        }
    }

    /// Append an attribute exactly as parsed, keeping its namespace.
    pub(crate) fn push_attr(&mut self, name: QualName, value: String) {
        self.attrs.push((name, value));
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr(CLASS_ATTR)
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut classes: Vec<&str> = self.classes().collect();
        classes.push(class);
        let joined = classes.join(" ");
        self.set_attr(CLASS_ATTR, joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr(CLASS_ATTR, joined);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Clear the element, then insert `batch` as its only content.
    pub fn replace_children(&mut self, batch: Vec<Node>) {
        self.children = batch;
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(&self.children, &mut out);
        out
    }

    /// Serialized markup of the element's children.
    pub fn inner_html(&self) -> String {
        serialize::to_html(self, TraversalScope::ChildrenOnly(Some(self.name.clone())))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize::to_html(self, TraversalScope::IncludeNode))
    }
}

fn is_plain(key: &QualName, name: &str) -> bool {
    key.ns == ns!() && &*key.local == name
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
            Node::Comment(_) | Node::Doctype(_) => {}
        }
    }
}

fn collect_elements<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            out.push(element);
            collect_elements(&element.children, out);
        }
    }
}

/// A parsed HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    /// Parse an HTML document. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            children: parse::parse_document(html),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// All elements in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(&self.children, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                // html5ever only writes the doctype name.
                Node::Doctype(doctype) => out.push_str(&doctype.to_string()),
                node => out.push_str(&serialize::to_html(node, TraversalScope::IncludeNode)),
            }
        }
        out
    }
}
