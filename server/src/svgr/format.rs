//! Final code formatting pass.
//!
//! Generated code is already laid out by the printer; this pass validates
//! that delimiters balance and normalizes whitespace so the result is stable
//! regardless of which pipeline stages ran.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Errors raised while formatting generated code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A closing delimiter with no matching opener.
    #[error("unexpected '{found}' at line {line}")]
    Unexpected { found: char, line: usize },

    /// An opening delimiter that is never closed.
    #[error("unclosed '{open}' opened at line {line}")]
    Unclosed { open: char, line: usize },

    /// A string literal that runs to the end of its line.
    #[error("unterminated string literal at line {line}")]
    UnterminatedString { line: usize },
}

/// Validate and normalize `code`.
///
/// Trailing whitespace is stripped, runs of blank lines collapse to one,
/// leading/trailing blank lines are removed and non-empty output ends with a
/// single newline. Formatting its own output is a no-op.
///
/// # Errors
///
/// Returns a [`FormatError`] when `()`, `[]` or `{}` do not balance outside
/// of string literals and XML comments.
pub fn format(code: &str) -> Result<String, FormatError> {
    check_balance(code)?;

    let mut out = String::with_capacity(code.len());
    let mut blank_run = false;
    for line in code.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run = !out.is_empty();
            continue;
        }
        if blank_run {
            out.push('\n');
            blank_run = false;
        }
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

fn check_balance(code: &str) -> Result<(), FormatError> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut line = 1;
    let mut chars = code.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\n' => line += 1,
            '"' | '\'' | '`' => skip_string(ch, &mut chars, &mut line)?,
            '<' if code[idx..].starts_with("<!--") => {
                let end = code[idx..].find("-->").map_or(code.len(), |off| idx + off + 3);
                while chars.peek().is_some_and(|(i, _)| *i < end) {
                    if let Some((_, '\n')) = chars.next() {
                        line += 1;
                    }
                }
            }
            '(' | '[' | '{' => stack.push((ch, line)),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    _ => return Err(FormatError::Unexpected { found: ch, line }),
                }
            }
            _ => {}
        }
    }

    match stack.pop() {
        Some((open, line)) => Err(FormatError::Unclosed { open, line }),
        None => Ok(()),
    }
}

fn skip_string(
    quote: char,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    line: &mut usize,
) -> Result<(), FormatError> {
    let start = *line;
    while let Some((_, ch)) = chars.next() {
        match ch {
            '\\' => {
                if let Some((_, '\n')) = chars.next() {
                    *line += 1;
                }
            }
            '\n' if quote == '`' => *line += 1,
            '\n' => return Err(FormatError::UnterminatedString { line: start }),
            c if c == quote => return Ok(()),
            _ => {}
        }
    }
    Err(FormatError::UnterminatedString { line: start })
}
