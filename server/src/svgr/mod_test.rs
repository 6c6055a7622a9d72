//! Tests for the SVG parser, optimizer, JSX generator and plugin chain.

use super::ast::Node;
use super::*;

const SKETCH_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="48px" height="1px" viewBox="0 0 48 1" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
    <!-- Generator: Sketch 46.2 (44496) - http://www.bohemiancoding.com/sketch -->
    <title>Rectangle 5</title>
    <desc>Created with Sketch.</desc>
    <defs></defs>
    <g id="Page-1" stroke="none" stroke-width="1" fill="none" fill-rule="evenodd">
        <g id="19-Separator" transform="translate(-129.000000, -156.000000)" fill="#063855">
            <g id="Controls/Settings" transform="translate(80.000000, 0.000000)">
                <g id="Content" transform="translate(0.000000, 64.000000)">
                    <g id="Group" transform="translate(24.000000, 56.000000)">
                        <g id="Group-2">
                            <rect id="Rectangle-5" x="25" y="36" width="48" height="1"></rect>
                        </g>
                    </g>
                </g>
            </g>
        </g>
    </g>
</svg>"##;

fn options_with(plugins: &[&str]) -> GenerationOptions {
    GenerationOptions {
        plugins: Some(plugins.iter().map(|p| (*p).to_owned()).collect()),
        ..GenerationOptions::default()
    }
}

fn jsx_only() -> GenerationOptions {
    options_with(&["@svgr/plugin-jsx"])
}

fn named() -> ComponentState {
    ComponentState::named("MyComponent")
}

/// `<svg>` wrapping `levels - 1` nested groups, so the deepest element sits at `levels`.
fn nested_svg(levels: usize) -> String {
    let groups = levels - 1;
    format!("<svg>{}{}</svg>", "<g>".repeat(groups), "</g>".repeat(groups))
}

// =============================================================================
// PARSER
// =============================================================================

#[test]
fn parse_keeps_namespace_declarations_on_root() {
    let root = parse::parse(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
    )
    .unwrap();
    assert_eq!(root.name, "svg");
    assert_eq!(root.attr("xmlns"), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attr("xmlns:xlink"), Some("http://www.w3.org/1999/xlink"));
    let child = root.child_elements().next().unwrap();
    assert_eq!(child.attr("xlink:href"), Some("#a"));
}

#[test]
fn parse_drops_whitespace_text_but_keeps_comments() {
    let root = parse::parse("<svg>\n  <!-- note -->\n  <rect/>\n</svg>").unwrap();
    assert_eq!(root.children.len(), 2);
    assert!(matches!(&root.children[0], Node::Comment(c) if c.trim() == "note"));
    assert!(matches!(&root.children[1], Node::Element(e) if e.name == "rect"));
}

#[test]
fn parse_rejects_plain_text() {
    let err = parse::parse("not-svg-at-all").unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
    assert!(err.to_string().starts_with("invalid SVG"));
}

#[test]
fn parse_rejects_other_root() {
    let err = parse::parse("<html><body/></html>").unwrap_err();
    assert!(matches!(err, ConvertError::NotSvg(ref name) if name == "html"));
}

#[test]
fn parse_accepts_nesting_up_to_the_limit() {
    let mut depth = 0;
    let root = parse::parse(&nested_svg(parse::MAX_DEPTH)).unwrap();
    let mut element = &root;
    while let Some(child) = element.child_elements().next() {
        element = child;
        depth += 1;
    }
    assert_eq!(depth, parse::MAX_DEPTH - 1);
}

#[test]
fn parse_rejects_nesting_past_the_limit() {
    let err = parse::parse(&nested_svg(parse::MAX_DEPTH + 1)).unwrap_err();
    assert!(matches!(err, ConvertError::TooDeep(limit) if limit == parse::MAX_DEPTH));
}

#[test]
fn deeply_nested_input_fails_without_exhausting_the_stack() {
    let err = transform(&nested_svg(60_000), &GenerationOptions::default(), &named()).unwrap_err();
    assert_eq!(err.to_string(), format!("SVG nesting exceeds {} levels", parse::MAX_DEPTH));
}

#[test]
fn parse_prefixes_editor_elements() {
    let root = parse::parse(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"><sodipodi:namedview sodipodi:pagecolor="#fff"/></svg>"##,
    )
    .unwrap();
    let child = root.child_elements().next().unwrap();
    assert_eq!(child.name, "sodipodi:namedview");
    assert_eq!(child.attr("sodipodi:pagecolor"), Some("#fff"));
}

// =============================================================================
// OPTIMIZER
// =============================================================================

#[test]
fn optimize_removes_metadata_and_editor_data() {
    let mut root = parse::parse(SKETCH_SVG).unwrap();
    optimize::optimize(&mut root);
    let markup = root.to_markup();
    assert!(!markup.contains("<title"));
    assert!(!markup.contains("<desc"));
    assert!(!markup.contains("<!--"));
    assert!(!markup.contains("<defs"));
    assert!(!markup.contains("version="));
    assert!(!markup.contains("xmlns:xlink"));
    assert!(!markup.contains("id="));
}

#[test]
fn optimize_pushes_group_transforms_down() {
    let mut root = parse::parse(SKETCH_SVG).unwrap();
    optimize::optimize(&mut root);
    let page = root.child_elements().next().unwrap();
    assert_eq!(page.name, "g");
    assert_eq!(page.attr("fill-rule"), Some("evenodd"));
    let rect = page.child_elements().next().unwrap();
    assert_eq!(rect.name, "rect");
    assert_eq!(rect.attr("fill"), Some("#063855"));
    assert_eq!(
        rect.attr("transform"),
        Some(
            "translate(-129.000000, -156.000000) translate(80.000000, 0.000000) \
             translate(0.000000, 64.000000) translate(24.000000, 56.000000)"
        )
    );
}

#[test]
fn optimize_keeps_referenced_ids() {
    let mut root = parse::parse(
        r#"<svg><defs><linearGradient id="g1"><stop offset="0"/></linearGradient></defs><rect id="unused" fill="url(#g1)"/></svg>"#,
    )
    .unwrap();
    optimize::optimize(&mut root);
    let markup = root.to_markup();
    assert!(markup.contains("id=\"g1\""));
    assert!(!markup.contains("unused"));
}

#[test]
fn optimize_keeps_ids_when_styles_are_embedded() {
    let mut root = parse::parse("<svg><style>#a { fill: red; }</style><rect id=\"a\"/></svg>").unwrap();
    optimize::optimize(&mut root);
    assert!(root.to_markup().contains("id=\"a\""));
}

#[test]
fn optimize_keeps_clip_path_child_transform_separate() {
    let mut root =
        parse::parse(r#"<svg><g transform="scale(2)"><rect clip-path="url(#c)"/></g><clipPath id="c"><rect/></clipPath></svg>"#)
            .unwrap();
    optimize::optimize(&mut root);
    let group = root.child_elements().next().unwrap();
    assert_eq!(group.name, "g");
    assert_eq!(group.attr("transform"), Some("scale(2)"));
}

#[test]
fn optimize_collapses_attribute_whitespace() {
    let mut root = parse::parse("<svg><path d=\"M0   0\n  L10 10\" class=\"\"/></svg>").unwrap();
    optimize::optimize(&mut root);
    let path = root.child_elements().next().unwrap();
    assert_eq!(path.attr("d"), Some("M0 0 L10 10"));
    assert_eq!(path.attr("class"), None);
}

// =============================================================================
// JSX
// =============================================================================

#[test]
fn default_chain_produces_icon_component() {
    let options = GenerationOptions { icon: true, ..GenerationOptions::default() };
    let code = transform(SKETCH_SVG, &options, &named()).unwrap();
    assert!(code.starts_with("import * as React from \"react\";\n\n"));
    assert!(code.contains("const MyComponent = (props) => ("));
    assert!(code.contains("width=\"1em\""));
    assert!(code.contains("height=\"1em\""));
    assert!(code.contains("viewBox=\"0 0 48 1\""));
    assert!(code.contains("{...props}"));
    assert!(code.contains("strokeWidth={1}"));
    assert!(code.contains("fillRule=\"evenodd\""));
    assert!(code.ends_with(");\n\nexport default MyComponent;\n"));
    assert!(!code.contains("48px"));
}

#[test]
fn missing_component_name_uses_default() {
    let code = transform("<svg/>", &GenerationOptions::default(), &ComponentState::default()).unwrap();
    assert!(code.contains("const SvgComponent = (props) => ("));
    assert!(code.contains("<svg {...props} />"));
}

#[test]
fn attribute_names_are_camel_cased() {
    let svg = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink" class="icon" data-kind="x"><use xlink:href="#a" stroke-linecap="round" aria-hidden="true"/></svg>"##;
    let code = transform(svg, &jsx_only(), &named()).unwrap();
    assert!(code.contains("xmlnsXlink=\"http://www.w3.org/1999/xlink\""));
    assert!(code.contains("className=\"icon\""));
    assert!(code.contains("data-kind=\"x\""));
    assert!(code.contains("xlinkHref=\"#a\""));
    assert!(code.contains("strokeLinecap=\"round\""));
    assert!(code.contains("aria-hidden=\"true\""));
}

#[test]
fn inline_style_becomes_object() {
    let svg = r#"<svg><path style="fill: red; stroke-width: 2; -webkit-transform: none; --brand: #fff"/></svg>"#;
    let code = transform(svg, &jsx_only(), &named()).unwrap();
    assert!(code.contains(r##"style={{ fill: "red", strokeWidth: 2, WebkitTransform: "none", "--brand": "#fff" }}"##));
}

#[test]
fn style_values_keep_semicolons_inside_parentheses() {
    let svg = r#"<svg><rect style="fill:url(data:image/png;base64,AAAA); opacity: 0.5; font-family: 'a;b'"/></svg>"#;
    let code = transform(svg, &jsx_only(), &named()).unwrap();
    assert!(code.contains(r#"style={{ fill: "url(data:image/png;base64,AAAA)", opacity: 0.5, fontFamily: "'a;b'" }}"#));
}

#[test]
fn attribute_backslash_becomes_string_expression() {
    let svg = r#"<svg><text font-family="C:" x="1">hi</text></svg>"#;
    let code = transform(svg, &jsx_only(), &named()).unwrap();
    assert!(code.contains(r#"fontFamily={"C:\"}"#));
    assert!(format::format(&code).is_ok());
}

#[test]
fn text_with_special_characters_becomes_string_expression() {
    let svg = "<svg><text>Don&apos;t {x}</text><text>Hello   world</text></svg>";
    let code = transform(svg, &jsx_only(), &named()).unwrap();
    assert!(code.contains(r#"<text>{"Don't {x}"}</text>"#));
    assert!(code.contains("<text>Hello world</text>"));
}

#[test]
fn style_element_content_is_wrapped() {
    let code = transform("<svg><style>.a { fill: red; }</style></svg>", &jsx_only(), &named()).unwrap();
    assert!(code.contains(r#"<style>{".a { fill: red; }"}</style>"#));
}

#[test]
fn long_opening_tags_break_one_attribute_per_line() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><rect/></svg>"#;
    let code = transform(svg, &jsx_only(), &named()).unwrap();
    assert!(code.contains("  <svg\n    xmlns=\"http://www.w3.org/2000/svg\"\n    width={24}\n"));
    assert!(code.contains("    {...props}\n  >\n    <rect />\n  </svg>\n"));
}

#[test]
fn typescript_types_props() {
    let options = GenerationOptions { typescript: true, ..GenerationOptions::default() };
    let code = transform("<svg/>", &options, &named()).unwrap();
    assert!(code.contains("import { SVGProps } from \"react\";"));
    assert!(code.contains("const MyComponent = (props: SVGProps<SVGSVGElement>) => ("));
}

#[test]
fn memo_wraps_export() {
    let options = GenerationOptions { memo: true, ..GenerationOptions::default() };
    let code = transform("<svg/>", &options, &named()).unwrap();
    assert!(code.contains("import { memo } from \"react\";"));
    assert!(code.ends_with("const Memo = memo(MyComponent);\nexport default Memo;\n"));
}

#[test]
fn title_prop_adds_title_element_and_props() {
    let options = GenerationOptions { title_prop: true, ..GenerationOptions::default() };
    let code = transform("<svg><title>old</title><rect/></svg>", &options, &named()).unwrap();
    assert!(code.contains("const MyComponent = ({ title, titleId, ...props }) => ("));
    assert!(code.contains("aria-labelledby={titleId}"));
    assert!(code.contains("{title ? <title id={titleId}>{title}</title> : null}"));
    assert!(!code.contains("old"));
}

#[test]
fn title_prop_with_typescript_declares_interface() {
    let options = GenerationOptions { title_prop: true, typescript: true, ..GenerationOptions::default() };
    let code = transform("<svg/>", &options, &named()).unwrap();
    assert!(code.contains("interface SVGRProps {\n  title?: string;\n  titleId?: string;\n}\n"));
    assert!(code.contains("const MyComponent = ({\n  title,\n  titleId,\n  ...props\n}: SVGProps<SVGSVGElement> & SVGRProps) => ("));
}

#[test]
fn native_maps_elements_and_imports() {
    let options = GenerationOptions { native: true, typescript: true, ..jsx_only() };
    let svg = r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/><g><circle cx="12" cy="12" r="4"/></g><style>.a{}</style></svg>"#;
    let code = transform(svg, &options, &named()).unwrap();
    assert!(code.contains("import Svg, { SvgProps, Circle, G, Path } from \"react-native-svg\";"));
    assert!(code.contains("const MyComponent = (props: SvgProps) => ("));
    assert!(code.contains("<Svg viewBox=\"0 0 24 24\" {...props}>"));
    assert!(code.contains("<Path d=\"M0 0h24v24H0z\" />"));
    assert!(code.contains("<Circle cx={12} cy={12} r={4} />"));
    assert!(!code.contains("style"));
}

#[test]
fn native_ignores_title_prop() {
    let options = GenerationOptions { native: true, title_prop: true, ..GenerationOptions::default() };
    let code = transform("<svg/>", &options, &named()).unwrap();
    assert!(code.contains("import Svg from \"react-native-svg\";"));
    assert!(!code.contains("titleId"));
}

#[test]
fn invalid_component_names_are_rejected() {
    for name in ["", "My Component", "1Icon", "React", "class"] {
        let err = transform("<svg/>", &GenerationOptions::default(), &ComponentState::named(name)).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidComponentName(_)), "{name:?} should be rejected");
    }
}

#[test]
fn native_component_name_clash_is_rejected() {
    let options = GenerationOptions { native: true, ..GenerationOptions::default() };
    let err = transform("<svg><path d=\"M0 0\"/></svg>", &options, &ComponentState::named("Path")).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidComponentName(_)));
}

// =============================================================================
// PLUGIN CHAIN
// =============================================================================

#[test]
fn resolve_defaults_to_svgo_and_jsx() {
    let plugins = Plugins::resolve(None).unwrap();
    assert_eq!(plugins, Plugins { svgo: true, jsx: true, prettier: false });
}

#[test]
fn resolve_accepts_short_names() {
    let names = vec!["svgo".to_owned(), "jsx".to_owned(), "prettier".to_owned()];
    let plugins = Plugins::resolve(Some(&names)).unwrap();
    assert_eq!(plugins, Plugins { svgo: true, jsx: true, prettier: true });
}

#[test]
fn unknown_plugin_is_an_error() {
    let err = transform("<svg/>", &options_with(&["@svgr/plugin-unknown"]), &named()).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownPlugin(ref p) if p == "@svgr/plugin-unknown"));
}

#[test]
fn svgo_only_returns_markup() {
    let code = transform(SKETCH_SVG, &options_with(&["@svgr/plugin-svgo"]), &named()).unwrap();
    assert!(code.starts_with("<svg"));
    assert!(!code.contains("import"));
    assert!(!code.contains("<title"));
}

#[test]
fn markup_text_escapes_delimiters() {
    let code = transform("<svg><text>f(x)</text></svg>", &options_with(&["svgo"]), &named()).unwrap();
    assert!(code.contains("f&#40;x&#41;"));
    assert!(format::format(&code).is_ok());
}

#[test]
fn markup_attribute_backslash_is_a_character_reference() {
    let code = transform(r#"<svg><text font-family="C:">hi</text></svg>"#, &options_with(&["svgo"]), &named()).unwrap();
    assert!(code.contains(r#"font-family="C:&#92;""#));
    assert!(format::format(&code).is_ok());
}

#[test]
fn empty_plugin_list_echoes_markup_without_optimizing() {
    let code = transform("<svg><title>t</title></svg>", &options_with(&[]), &named()).unwrap();
    assert!(code.contains("<title>"));
}

#[test]
fn prettier_plugin_formats_inside_pipeline() {
    let options = options_with(&["@svgr/plugin-svgo", "@svgr/plugin-jsx", "@svgr/plugin-prettier"]);
    let code = transform(SKETCH_SVG, &options, &named()).unwrap();
    assert_eq!(format::format(&code).unwrap(), code);
}

#[test]
fn svgr_pipeline_formats_generated_code() {
    let pipeline = SvgrPipeline;
    let code = pipeline
        .transform(SKETCH_SVG, &GenerationOptions::default(), &named())
        .unwrap();
    let formatted = pipeline.format(&code).unwrap();
    assert_eq!(formatted, code);
}
