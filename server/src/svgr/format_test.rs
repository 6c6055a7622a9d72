use super::*;

// =============================================================================
// WHITESPACE
// =============================================================================

#[test]
fn strips_trailing_whitespace_and_blank_runs() {
    let code = "\n\nconst a = (x) => (  \n\n\n\n  <svg />\n);   \n\n";
    assert_eq!(format(code).unwrap(), "const a = (x) => (\n\n  <svg />\n);\n");
}

#[test]
fn formatting_is_idempotent() {
    let code = "import * as React from \"react\";\n\n\nconst A = (props) => (\n  <svg {...props} />\n);\n\nexport default A;";
    let once = format(code).unwrap();
    assert_eq!(format(&once).unwrap(), once);
    assert!(once.ends_with("export default A;\n"));
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(format("").unwrap(), "");
    assert_eq!(format("  \n\n ").unwrap(), "");
}

// =============================================================================
// BALANCE
// =============================================================================

#[test]
fn unexpected_closer_reports_line() {
    let err = format("const a = 1;\nfoo());\n").unwrap_err();
    assert_eq!(err, FormatError::Unexpected { found: ')', line: 2 });
}

#[test]
fn mismatched_closer_is_unexpected() {
    let err = format("call(x]").unwrap_err();
    assert_eq!(err, FormatError::Unexpected { found: ']', line: 1 });
}

#[test]
fn unclosed_opener_reports_where_it_opened() {
    let err = format("const a = {\n  b: [1, 2],\n").unwrap_err();
    assert_eq!(err, FormatError::Unclosed { open: '{', line: 1 });
}

#[test]
fn delimiters_inside_strings_are_ignored() {
    assert!(format(r#"const s = "a ) b"; const t = 'c { d'; const u = `e ] f`;"#).is_ok());
    assert!(format(r#"const s = "escaped \" ( quote";"#).is_ok());
}

#[test]
fn delimiters_inside_xml_comments_are_ignored() {
    assert!(format("<svg>\n  <!-- ( unbalanced\n  { -->\n</svg>\n").is_ok());
}

#[test]
fn template_literals_may_span_lines() {
    assert!(format("const css = `\n  a { b }\n`;\n").is_ok());
}

#[test]
fn unterminated_string_is_rejected() {
    let err = format("const a = 1;\nconst s = \"open;\nconst b = 2;\n").unwrap_err();
    assert_eq!(err, FormatError::UnterminatedString { line: 2 });
}
