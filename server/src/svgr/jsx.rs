//! JSX/TSX component emission.
//!
//! DESIGN
//! ======
//! The SVG tree is first lowered into a small JSX tree (element names mapped
//! for the target, attribute names camel-cased, inline styles turned into
//! objects), then decorated on the root (`icon` sizing, title props, props
//! spread) and finally printed with prettier's layout rules: two-space
//! indentation and one attribute per line once an opening tag would exceed
//! [`PRINT_WIDTH`] columns.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use wire::GenerationOptions;

use super::ConvertError;
use super::ast::{Element, Node};

/// Column limit before a tag is broken one attribute per line.
pub const PRINT_WIDTH: usize = 80;

const RESERVED: &[&str] = &[
    "React", "memo", "Memo", "props", "SVGProps", "SVGRProps", "Svg", "SvgProps", "break", "case", "catch",
    "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum", "export", "extends",
    "false", "finally", "for", "function", "if", "import", "in", "instanceof", "new", "null", "return", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "let",
];

/// Characters that force JSX text into a string expression.
const TEXT_SPECIALS: &[char] = &['{', '}', '<', '>', '"', '\'', '`', '(', ')', '[', ']'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Web,
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum JsxValue {
    Literal(String),
    Expr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum JsxAttr {
    Pair { name: String, value: JsxValue },
    Spread(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum JsxChild {
    Element(JsxElement),
    Text(String),
    Expr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct JsxElement {
    name: String,
    attrs: Vec<JsxAttr>,
    children: Vec<JsxChild>,
}

impl JsxElement {
    fn set_literal(&mut self, name: &str, value: &str) {
        let replacement = JsxValue::Literal(value.to_owned());
        for attr in &mut self.attrs {
            if let JsxAttr::Pair { name: n, value: v } = attr {
                if n == name {
                    *v = replacement;
                    return;
                }
            }
        }
        self.attrs.push(JsxAttr::Pair { name: name.to_owned(), value: replacement });
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Generate a React component module from an SVG tree.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidComponentName`] if `component_name` is not a
/// usable JavaScript identifier or clashes with a generated binding.
pub fn generate(root: &Element, options: &GenerationOptions, component_name: &str) -> Result<String, ConvertError> {
    if !is_identifier(component_name) {
        return Err(ConvertError::InvalidComponentName(component_name.to_owned()));
    }
    let target = if options.native { Target::Native } else { Target::Web };
    let title = options.title_prop && target == Target::Web;

    let mut used = BTreeSet::new();
    let mut svg = lower_element(root, target, &mut used, title)
        .ok_or_else(|| ConvertError::NotSvg(root.name.clone()))?;
    if used.contains(component_name) {
        return Err(ConvertError::InvalidComponentName(component_name.to_owned()));
    }

    if options.icon {
        svg.set_literal("width", "1em");
        svg.set_literal("height", "1em");
    }
    if title {
        svg.attrs.push(JsxAttr::Pair {
            name: "aria-labelledby".to_owned(),
            value: JsxValue::Expr("titleId".to_owned()),
        });
        svg.children
            .insert(0, JsxChild::Expr("title ? <title id={titleId}>{title}</title> : null".to_owned()));
    }
    svg.attrs.push(JsxAttr::Spread("props".to_owned()));

    let mut out = String::new();
    write_imports(&mut out, options, target, &used);
    if title && options.typescript {
        out.push_str("interface SVGRProps {\n  title?: string;\n  titleId?: string;\n}\n\n");
    }
    write_header(&mut out, options, target, title, component_name);
    print_element(&svg, 1, &mut out);
    out.push_str(");\n\n");
    if options.memo {
        let _ = writeln!(out, "const Memo = memo({component_name});");
        out.push_str("export default Memo;\n");
    } else {
        let _ = writeln!(out, "export default {component_name};");
    }
    Ok(out)
}

fn write_imports(out: &mut String, options: &GenerationOptions, target: Target, used: &BTreeSet<&'static str>) {
    out.push_str("import * as React from \"react\";\n");
    match target {
        Target::Web => {
            if options.typescript {
                out.push_str("import { SVGProps } from \"react\";\n");
            }
        }
        Target::Native => {
            let mut named: Vec<&str> = Vec::new();
            if options.typescript {
                named.push("SvgProps");
            }
            named.extend(used.iter().copied());
            if named.is_empty() {
                out.push_str("import Svg from \"react-native-svg\";\n");
            } else {
                let _ = writeln!(out, "import Svg, {{ {} }} from \"react-native-svg\";", named.join(", "));
            }
        }
    }
    if options.memo {
        out.push_str("import { memo } from \"react\";\n");
    }
    out.push('\n');
}

fn write_header(out: &mut String, options: &GenerationOptions, target: Target, title: bool, name: &str) {
    let props_type = match (options.typescript, target, title) {
        (false, _, _) => None,
        (true, Target::Native, _) => Some("SvgProps"),
        (true, Target::Web, false) => Some("SVGProps<SVGSVGElement>"),
        (true, Target::Web, true) => Some("SVGProps<SVGSVGElement> & SVGRProps"),
    };
    let binding = if title { "{ title, titleId, ...props }" } else { "props" };
    let param = props_type.map_or_else(|| binding.to_owned(), |ty| format!("{binding}: {ty}"));

    let line = format!("const {name} = ({param}) => (");
    if title && width(&line) > PRINT_WIDTH {
        let _ = writeln!(out, "const {name} = ({{");
        out.push_str("  title,\n  titleId,\n  ...props\n");
        match props_type {
            Some(ty) => {
                let _ = writeln!(out, "}}: {ty}) => (");
            }
            None => out.push_str("}) => (\n"),
        }
    } else {
        out.push_str(&line);
        out.push('\n');
    }
}

// =============================================================================
// LOWERING
// =============================================================================

fn lower_element(
    el: &Element,
    target: Target,
    used: &mut BTreeSet<&'static str>,
    drop_title: bool,
) -> Option<JsxElement> {
    let name = match target {
        Target::Web => el.name.clone(),
        Target::Native => {
            let component = native_component(&el.name)?;
            if component != "Svg" {
                used.insert(component);
            }
            component.to_owned()
        }
    };

    let attrs = el
        .attrs
        .iter()
        .filter_map(|a| lower_attr(&a.name, &a.value))
        .collect();

    let raw_text = el.name == "style" || el.name == "script";
    let mut children = Vec::new();
    for child in &el.children {
        match child {
            Node::Element(e) if drop_title && e.name == "title" => {}
            Node::Element(e) => {
                if let Some(lowered) = lower_element(e, target, used, false) {
                    children.push(JsxChild::Element(lowered));
                }
            }
            Node::Text(t) if raw_text => children.push(JsxChild::Expr(js_string(t.trim()))),
            Node::Text(t) => children.push(lower_text(t)),
            Node::Comment(_) => {}
        }
    }

    Some(JsxElement { name, attrs, children })
}

fn lower_text(text: &str) -> JsxChild {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.contains(TEXT_SPECIALS) {
        JsxChild::Expr(js_string(&collapsed))
    } else {
        JsxChild::Text(collapsed)
    }
}

fn lower_attr(name: &str, value: &str) -> Option<JsxAttr> {
    let jsx_name = attr_name(name);
    let value = if name == "style" {
        JsxValue::Expr(style_object(value)?)
    } else if let Some(number) = numeric(value) {
        JsxValue::Expr(number)
    } else if value.contains(['"', '\\']) {
        // JSX attribute strings have no escapes.
        JsxValue::Expr(js_string(value))
    } else {
        JsxValue::Literal(value.to_owned())
    };
    Some(JsxAttr::Pair { name: jsx_name, value })
}

/// Map an SVG attribute name to its React prop name.
fn attr_name(name: &str) -> String {
    match name {
        "class" => "className".to_owned(),
        "for" => "htmlFor".to_owned(),
        _ if name.starts_with("data-") || name.starts_with("aria-") => name.to_owned(),
        _ => camel_case(name),
    }
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' || ch == ':' {
            upper = !out.is_empty();
            continue;
        }
        if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Turn an inline `style` attribute into an object literal, e.g.
/// `fill: red; stroke-width: 2` into `{ fill: "red", strokeWidth: 2 }`.
fn style_object(style: &str) -> Option<String> {
    let entries: Vec<String> = split_declarations(style)
        .into_iter()
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let (prop, value) = (prop.trim(), value.trim());
            if prop.is_empty() || value.is_empty() {
                return None;
            }
            let value = numeric(value).unwrap_or_else(|| js_string(value));
            Some(format!("{}: {value}", style_key(prop)))
        })
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(format!("{{ {} }}", entries.join(", ")))
    }
}

/// Split on `;` outside of parentheses and quotes, so values such as
/// `url(data:image/png;base64,...)` stay whole.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut decls = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut chars = style.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match (quote, ch) {
            (Some(_), '\\') => {
                chars.next();
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                decls.push(&style[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    decls.push(&style[start..]);
    decls
}

fn style_key(prop: &str) -> String {
    if prop.starts_with("--") {
        return js_string(prop);
    }
    match prop.strip_prefix('-') {
        Some(vendor) => {
            let key = camel_case(vendor);
            let mut chars = key.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
        None => camel_case(prop),
    }
}

/// Normalized number literal for plain decimal values (`1`, `-0.5`).
fn numeric(value: &str) -> Option<String> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let (int, frac) = digits.split_once('.').unwrap_or((digits, "0"));
    let plain = !int.is_empty()
        && !frac.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit());
    if !plain {
        return None;
    }
    value.parse::<f64>().ok().map(|n| n.to_string())
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value.replace('"', "\\\"")))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !RESERVED.contains(&name)
}

/// `react-native-svg` component for an SVG element; `None` if unsupported.
fn native_component(name: &str) -> Option<&'static str> {
    let component = match name {
        "svg" => "Svg",
        "circle" => "Circle",
        "clipPath" => "ClipPath",
        "defs" => "Defs",
        "ellipse" => "Ellipse",
        "foreignObject" => "ForeignObject",
        "g" => "G",
        "image" => "Image",
        "line" => "Line",
        "linearGradient" => "LinearGradient",
        "marker" => "Marker",
        "mask" => "Mask",
        "path" => "Path",
        "pattern" => "Pattern",
        "polygon" => "Polygon",
        "polyline" => "Polyline",
        "radialGradient" => "RadialGradient",
        "rect" => "Rect",
        "stop" => "Stop",
        "symbol" => "Symbol",
        "text" => "Text",
        "textPath" => "TextPath",
        "tspan" => "TSpan",
        "use" => "Use",
        _ => return None,
    };
    Some(component)
}

// =============================================================================
// PRINTING
// =============================================================================

fn width(line: &str) -> usize {
    line.chars().count()
}

fn render_attr(attr: &JsxAttr) -> String {
    match attr {
        JsxAttr::Pair { name, value: JsxValue::Literal(v) } => format!("{name}=\"{v}\""),
        JsxAttr::Pair { name, value: JsxValue::Expr(e) } => format!("{name}={{{e}}}"),
        JsxAttr::Spread(e) => format!("{{...{e}}}"),
    }
}

fn render_inline_child(child: &JsxChild) -> String {
    match child {
        JsxChild::Text(t) => t.clone(),
        JsxChild::Expr(e) => format!("{{{e}}}"),
        JsxChild::Element(_) => String::new(),
    }
}

fn print_element(el: &JsxElement, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    let attrs: Vec<String> = el.attrs.iter().map(render_attr).collect();
    let open = if attrs.is_empty() {
        format!("<{}", el.name)
    } else {
        format!("<{} {}", el.name, attrs.join(" "))
    };

    if el.children.is_empty() {
        let line = format!("{pad}{open} />");
        if width(&line) <= PRINT_WIDTH || attrs.is_empty() {
            let _ = writeln!(out, "{line}");
        } else {
            print_broken_open(&el.name, &attrs, &pad, "/>", out);
        }
        return;
    }

    if el.children.iter().all(|c| !matches!(c, JsxChild::Element(_))) {
        let inner: String = el.children.iter().map(render_inline_child).collect();
        let line = format!("{pad}{open}>{inner}</{}>", el.name);
        if width(&line) <= PRINT_WIDTH {
            let _ = writeln!(out, "{line}");
            return;
        }
    }

    let line = format!("{pad}{open}>");
    if width(&line) <= PRINT_WIDTH || attrs.is_empty() {
        let _ = writeln!(out, "{line}");
    } else {
        print_broken_open(&el.name, &attrs, &pad, ">", out);
    }
    for child in &el.children {
        match child {
            JsxChild::Element(e) => print_element(e, depth + 1, out),
            JsxChild::Text(t) => {
                let _ = writeln!(out, "{pad}  {t}");
            }
            JsxChild::Expr(e) => {
                let _ = writeln!(out, "{pad}  {{{e}}}");
            }
        }
    }
    let _ = writeln!(out, "{pad}</{}>", el.name);
}

fn print_broken_open(name: &str, attrs: &[String], pad: &str, close: &str, out: &mut String) {
    let _ = writeln!(out, "{pad}<{name}");
    for attr in attrs {
        let _ = writeln!(out, "{pad}  {attr}");
    }
    let _ = writeln!(out, "{pad}{close}");
}
