//! SVGO-style cleanup of the parsed tree.
//!
//! Covers the subset of SVGO's default preset that matters for icon markup
//! exported from design tools. `viewBox` is always preserved so generated
//! components can be resized.

use std::collections::HashSet;

use super::ast::{Element, Node};

const EDITOR_PREFIXES: [&str; 3] = ["sketch", "inkscape", "sodipodi"];

const REMOVED_ELEMENTS: [&str; 3] = ["title", "desc", "metadata"];

const CONTAINERS: [&str; 9] = ["a", "clipPath", "defs", "g", "marker", "mask", "pattern", "switch", "symbol"];

/// Presentation attributes a group may hand down to its only child.
const INHERITABLE: [&str; 18] = [
    "clip-rule",
    "color",
    "fill",
    "fill-opacity",
    "fill-rule",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "stroke",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "visibility",
];

/// Run every cleanup pass over `root` in place.
pub fn optimize(root: &mut Element) {
    strip_nodes(root);
    strip_editor_attrs(root);
    let references = collect_references(root);
    cleanup_attrs(root, references.as_ref());
    remove_unused_namespaces(root);
    root.remove_attr("version");
    collapse(root);
}

fn is_editor_prefix(prefix: Option<&str>) -> bool {
    prefix.is_some_and(|p| EDITOR_PREFIXES.contains(&p))
}

fn strip_nodes(el: &mut Element) {
    el.children.retain(|node| match node {
        Node::Comment(_) => false,
        Node::Element(e) => !REMOVED_ELEMENTS.contains(&e.name.as_str()) && !is_editor_prefix(e.prefix()),
        Node::Text(_) => true,
    });
    for child in &mut el.children {
        if let Node::Element(e) = child {
            strip_nodes(e);
        }
    }
}

fn is_editor_attr(name: &str) -> bool {
    match name.split_once(':') {
        Some(("xmlns", prefix)) | Some((prefix, _)) => EDITOR_PREFIXES.contains(&prefix),
        None => false,
    }
}

fn strip_editor_attrs(el: &mut Element) {
    el.attrs.retain(|a| !is_editor_attr(&a.name));
    for child in &mut el.children {
        if let Node::Element(e) = child {
            strip_editor_attrs(e);
        }
    }
}

// =============================================================================
// IDS
// =============================================================================

/// Collect every id referenced from `href`/`xlink:href` or `url(#...)`.
///
/// Returns `None` when the document embeds `<style>` or `<script>`, whose
/// selectors may reference any id; all ids are kept in that case.
fn collect_references(root: &Element) -> Option<HashSet<String>> {
    let mut refs = HashSet::new();
    if gather_references(root, &mut refs) { Some(refs) } else { None }
}

fn gather_references(el: &Element, refs: &mut HashSet<String>) -> bool {
    if el.name == "style" || el.name == "script" {
        return false;
    }
    for attr in &el.attrs {
        if attr.name == "href" || attr.name.ends_with(":href") {
            if let Some(id) = attr.value.strip_prefix('#') {
                refs.insert(id.to_owned());
            }
        }
        let mut rest = attr.value.as_str();
        while let Some(start) = rest.find("url(") {
            let after = &rest[start + 4..];
            let Some(end) = after.find(')') else { break };
            let target = after[..end].trim().trim_matches(|c| c == '"' || c == '\'');
            if let Some(id) = target.strip_prefix('#') {
                refs.insert(id.to_owned());
            }
            rest = &after[end..];
        }
    }
    el.child_elements().all(|child| gather_references(child, refs))
}

fn cleanup_attrs(el: &mut Element, references: Option<&HashSet<String>>) {
    for attr in &mut el.attrs {
        attr.value = collapse_whitespace(&attr.value);
    }
    el.attrs.retain(|a| {
        if a.value.is_empty() {
            return false;
        }
        match references {
            Some(refs) if a.name == "id" => refs.contains(&a.value),
            _ => true,
        }
    });
    for child in &mut el.children {
        if let Node::Element(e) = child {
            cleanup_attrs(e, references);
        }
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// NAMESPACES
// =============================================================================

fn remove_unused_namespaces(root: &mut Element) {
    let unused: Vec<String> = root
        .attrs
        .iter()
        .filter_map(|a| a.name.strip_prefix("xmlns:"))
        .filter(|prefix| !prefix_used(root, prefix))
        .map(|prefix| format!("xmlns:{prefix}"))
        .collect();
    root.attrs.retain(|a| !unused.contains(&a.name));
}

fn prefix_used(el: &Element, prefix: &str) -> bool {
    el.prefix() == Some(prefix)
        || el
            .attrs
            .iter()
            .any(|a| a.name.split_once(':').is_some_and(|(p, _)| p == prefix))
        || el.child_elements().any(|child| prefix_used(child, prefix))
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Remove empty containers and fold groups that add nothing, bottom-up.
fn collapse(el: &mut Element) {
    for child in &mut el.children {
        if let Node::Element(e) = child {
            collapse(e);
        }
    }

    let children = std::mem::take(&mut el.children);
    for child in children {
        match child {
            Node::Element(e) if is_empty_container(&e) => {}
            Node::Element(e) if e.name == "g" && e.attrs.is_empty() => el.children.extend(e.children),
            Node::Element(e) if e.name == "g" => match push_down(e) {
                Ok(merged) | Err(merged) => el.children.push(Node::Element(merged)),
            },
            other => el.children.push(other),
        }
    }
}

fn is_empty_container(el: &Element) -> bool {
    CONTAINERS.contains(&el.name.as_str()) && el.children.is_empty() && el.attr("id").is_none()
}

/// A group with exactly one element child whose attributes can all move to it.
fn can_push_down(group: &Element) -> bool {
    if group.name != "g" || group.children.len() != 1 {
        return false;
    }
    let Some(Node::Element(child)) = group.children.first() else {
        return false;
    };
    // Clip paths and masks resolve in the child's user space.
    let clipped = child.attr("clip-path").is_some() || child.attr("mask").is_some();
    group.attrs.iter().all(|a| {
        (a.name == "transform" && !clipped)
            || (INHERITABLE.contains(&a.name.as_str()) && child.attr(&a.name).is_none())
    })
}

/// Move a group's attributes onto its only child, or hand the group back.
fn push_down(group: Element) -> Result<Element, Element> {
    if !can_push_down(&group) {
        return Err(group);
    }
    let Element { name, attrs, mut children } = group;
    let mut child = match children.pop() {
        Some(Node::Element(child)) => child,
        other => {
            children.extend(other);
            return Err(Element { name, attrs, children });
        }
    };
    for attr in attrs {
        if attr.name == "transform" {
            let combined = match child.attr("transform") {
                Some(own) => format!("{} {own}", attr.value),
                None => attr.value,
            };
            child.set_attr("transform", combined);
        } else {
            child.set_attr(&attr.name, attr.value);
        }
    }
    Ok(child)
}
