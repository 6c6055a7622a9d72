//! SVG document tree used between parsing, optimization and code generation.

use std::fmt::Write as _;

/// A parsed SVG element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name (`path`, `sketch:page`).
    pub name: String,
    /// Attributes in source order, with qualified names (`xlink:href`, `xmlns:xlink`).
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Child content of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Look up an attribute value by qualified name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing an existing value in place or appending.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            self.attrs.push(Attr { name: name.to_owned(), value });
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|a| a.name != name);
    }

    /// Iterate over direct element children.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Namespace prefix of the tag name, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(p, _)| p)
    }

    /// Serialize back to SVG markup, two-space indented.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_markup(self, 0, &mut out);
        out
    }
}

fn write_markup(el: &Element, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    let _ = write!(out, "{pad}<{}", el.name);
    for attr in &el.attrs {
        let _ = write!(out, " {}=\"{}\"", attr.name, escape_attr(&attr.value));
    }
    if el.children.is_empty() {
        out.push_str(" />\n");
        return;
    }
    out.push_str(">\n");
    for child in &el.children {
        match child {
            Node::Element(e) => write_markup(e, depth + 1, out),
            Node::Text(t) => {
                let _ = writeln!(out, "{pad}  {}", escape_text(t.trim()));
            }
            Node::Comment(c) => {
                let _ = writeln!(out, "{pad}  <!--{c}-->");
            }
        }
    }
    let _ = writeln!(out, "{pad}</{}>", el.name);
}

/// Backslashes become character references so the code formatter never
/// reads them as string escapes.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\\' => out.push_str("&#92;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Text is escaped with character references for every character that the
/// code formatter treats as a delimiter, so markup output always formats.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' | '\'' | '`' | '{' | '}' | '(' | ')' | '[' | ']' => {
                let _ = write!(out, "&#{};", u32::from(ch));
            }
            _ => out.push(ch),
        }
    }
    out
}
