//! Render tree
//!
//! Pages build a small tree of [`Node`]s instead of strings so the shell can
//! compose them (nav bar, animated region) and tests can inspect the result.
//! The tree serializes to HTML for the browser-facing output and to a plain
//! text outline for the terminal.

use crate::helpers::{html_escape, html_unescape, strip_html};

/// A node in the render tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered, trusted HTML (post bodies)
    Raw(String),
    Fragment(Vec<Node>),
}

/// An HTML element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// A link to a client-side route
pub fn link(to: &str, label: impl Into<String>) -> Element {
    el("a").attr("href", to).child(text(label))
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
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

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn is_block(&self) -> bool {
        matches!(
            self.tag,
            "header" | "nav" | "main" | "div" | "article" | "section" | "p" | "h1" | "h2" | "footer"
        )
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(&html_escape(s)),
            Node::Raw(s) => out.push_str(s),
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.write_html(out)),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                for (name, value) in &e.attrs {
                    out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
                }
                out.push('>');
                for child in &e.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", e.tag));
            }
        }
    }

    /// Render as a plain text outline, one block element per line
    ///
    /// Links show their target: `home <- />`.
    pub fn to_text(&self) -> String {
        let mut lines = vec![String::new()];
        self.write_text(&mut lines);
        lines
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn write_text(&self, lines: &mut Vec<String>) {
        let push = |lines: &mut Vec<String>, s: &str| {
            if let Some(last) = lines.last_mut() {
                if !last.is_empty() && !last.ends_with(' ') {
                    last.push(' ');
                }
                last.push_str(s.trim());
            }
        };

        match self {
            Node::Text(s) => push(lines, s),
            Node::Raw(html) => {
                for line in html.lines() {
                    let plain = html_unescape(&strip_html(line));
                    if !plain.trim().is_empty() {
                        lines.push(plain.trim().to_string());
                    }
                }
                lines.push(String::new());
            }
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.write_text(lines)),
            Node::Element(e) => {
                if e.is_block() {
                    lines.push(String::new());
                }
                for child in &e.children {
                    child.write_text(lines);
                }
                if e.tag == "a" {
                    if let Some(href) = e.get_attr("href") {
                        push(lines, &format!("<- {}", href));
                    }
                }
                if e.is_block() {
                    lines.push(String::new());
                }
            }
        }
    }

    /// Concatenated text content
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(s) => s.clone(),
            Node::Raw(html) => html_unescape(&strip_html(html)),
            Node::Fragment(nodes) => nodes.iter().map(Node::text_content).collect(),
            Node::Element(e) => e.children.iter().map(Node::text_content).collect(),
        }
    }

    /// All elements in document order
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(&mut found);
        found
    }

    fn collect_elements<'a>(&'a self, found: &mut Vec<&'a Element>) {
        match self {
            Node::Element(e) => {
                found.push(e);
                e.children.iter().for_each(|c| c.collect_elements(found));
            }
            Node::Fragment(nodes) => nodes.iter().for_each(|c| c.collect_elements(found)),
            Node::Text(_) | Node::Raw(_) => {}
        }
    }

    /// Elements carrying the given class
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| {
                e.get_attr("class")
                    .map(|c| c.split_whitespace().any(|c| c == class))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// `(href, text)` for every link in document order
    pub fn links(&self) -> Vec<(String, String)> {
        self.elements()
            .into_iter()
            .filter(|e| e.tag == "a")
            .filter_map(|e| {
                let href = e.get_attr("href")?.to_string();
                let label = Node::Fragment(e.children.clone()).text_content();
                Some((href, label))
            })
            .collect()
    }
}
