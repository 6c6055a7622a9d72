//! SVG source text to [`Element`] tree.

use roxmltree::{Document, Node as XmlNode};

use super::ConvertError;
use super::ast::{Attr, Element, Node};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Deepest element nesting accepted; the root `<svg>` is level 1.
pub const MAX_DEPTH: usize = 256;

/// Parse SVG source into its root element.
///
/// XML declarations, doctypes and processing instructions are dropped.
/// Namespace declarations are kept as `xmlns` / `xmlns:*` attributes on the
/// root element only; declarations on nested elements are dropped.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for malformed XML and
/// [`ConvertError::NotSvg`] when the root element is not `<svg>`, and
/// [`ConvertError::TooDeep`] when elements nest past [`MAX_DEPTH`].
pub fn parse(source: &str) -> Result<Element, ConvertError> {
    let doc = Document::parse_with_options(source.trim(), wire::svg::parsing_options())
        .map_err(|e| ConvertError::Parse(e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(ConvertError::NotSvg(root.tag_name().name().to_owned()));
    }

    let mut element = convert_element(root, 1)?;
    let mut declarations: Vec<Attr> = root
        .namespaces()
        .filter(|ns| ns.uri() != XML_NS)
        .map(|ns| Attr {
            name: ns.name().map_or_else(|| "xmlns".to_owned(), |prefix| format!("xmlns:{prefix}")),
            value: ns.uri().to_owned(),
        })
        .collect();
    declarations.append(&mut element.attrs);
    element.attrs = declarations;
    Ok(element)
}

fn convert_element(node: XmlNode<'_, '_>, depth: usize) -> Result<Element, ConvertError> {
    if depth > MAX_DEPTH {
        return Err(ConvertError::TooDeep(MAX_DEPTH));
    }
    let mut element = Element::new(qualified_tag(node));

    for attr in node.attributes() {
        let name = match attr.namespace() {
            Some(XML_NS) => format!("xml:{}", attr.name()),
            Some(uri) => match node.lookup_prefix(uri) {
                Some(prefix) => format!("{prefix}:{}", attr.name()),
                None => attr.name().to_owned(),
            },
            None => attr.name().to_owned(),
        };
        element.attrs.push(Attr { name, value: attr.value().to_owned() });
    }

    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(convert_element(child, depth + 1)?));
        } else if child.is_text() {
            let text = child.text().unwrap_or_default();
            if !text.trim().is_empty() {
                element.children.push(Node::Text(text.to_owned()));
            }
        } else if child.is_comment() {
            element
                .children
                .push(Node::Comment(child.text().unwrap_or_default().to_owned()));
        }
    }

    Ok(element)
}

fn qualified_tag(node: XmlNode<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        None | Some(SVG_NS) => tag.name().to_owned(),
        Some(uri) => match node.lookup_prefix(uri) {
            Some(prefix) => format!("{prefix}:{}", tag.name()),
            None => tag.name().to_owned(),
        },
    }
}
