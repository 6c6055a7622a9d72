//! Component-name canonicalization and export naming.

#[cfg(test)]
#[path = "name_test.rs"]
mod name_test;

use convert_case::{Boundary, Case, Casing};

/// Word boundaries inside a run of letters and digits; every other
/// character is treated as a separator.
const BOUNDARIES: [Boundary; 4] = [Boundary::Space, Boundary::LowerUpper, Boundary::DigitUpper, Boundary::Acronym];

/// Convert arbitrary text to PascalCase.
///
/// The result is run through the converter a second time so that runs of
/// single-letter words (`"a b c"` gives `"ABC"`) settle on a fixed point.
#[must_use]
pub fn pascal_case(input: &str) -> String {
    let spaced: String = input.chars().map(|c| if c.is_alphanumeric() { c } else { ' ' }).collect();
    let once = spaced.with_boundaries(&BOUNDARIES).to_case(Case::Pascal);
    once.with_boundaries(&BOUNDARIES).to_case(Case::Pascal)
}

/// File name used when exporting generated code: `<name>.tsx` or `<name>.jsx`.
#[must_use]
pub fn export_file_name(component_name: &str, typescript: bool) -> String {
    let extension = if typescript { "tsx" } else { "jsx" };
    format!("{component_name}.{extension}")
}
