//! Virtual node tree and HTML serialization.
//!
//! # Responsibility
//! - Build markup as typed element/text nodes instead of string templates.
//! - Serialize nodes to HTML with every text and attribute value escaped.
//!
//! # Invariants
//! - Serialization is deterministic: the same tree yields identical bytes.
//! - Text content can never open or close markup.
//! - Interaction handlers are attached as [`Action`] values, never as inline
//!   script strings.

use crate::view::action::Action;

const VOID_ELEMENTS: &[&str] = &["br", "img", "source", "input", "meta", "link", "hr"];

/// One node in a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Sibling list without a wrapping element.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment(nodes.into_iter().collect())
    }

    /// Text with `\n` turned into `<br>` elements.
    pub fn multiline(value: &str) -> Self {
        let mut nodes: Vec<Node> = Vec::new();
        for (idx, line) in value.split('\n').enumerate() {
            if idx > 0 {
                nodes.push(Element::new("br").into());
            }
            if !line.is_empty() {
                nodes.push(Self::text(line));
            }
        }
        Self::Fragment(nodes)
    }

    /// Serializes this node to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(value) => out.push_str(&escape_text(value)),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
        }
    }

    /// Depth-first search for the first element carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        match self {
            Self::Element(element) => element.find_by_id(id),
            Self::Text(_) => None,
            Self::Fragment(nodes) => nodes.iter().find_map(|node| node.find_by_id(id)),
        }
    }

}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

/// HTML element with attributes, children and an optional click action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    /// `None` values render as bare boolean attributes.
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
    action: Option<Action>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Adds a boolean attribute such as `autoplay`.
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    /// Binds a click handler.
    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            write_attr(out, name, value.as_deref());
        }
        if let Some(action) = &self.action {
            for (name, value) in action.data_attributes() {
                write_attr(out, name, Some(value.as_str()));
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(element) => collect_text(&element.children, out),
            Node::Text(value) => out.push_str(value),
            Node::Fragment(nodes) => collect_text(nodes, out),
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: Option<&str>) {
    out.push(' ');
    out.push_str(name);
    if let Some(value) = value {
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

/// Escapes text content so `<`, `>` and `&` render literally.
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes an attribute value for a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    escape_text(value)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
