//! Helpers for reading hand-maintained text lists.

/// Decode list bytes as UTF-8, dropping invalid sequences instead of failing.
///
/// A leading byte-order mark is removed so it never ends up in a title.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Split text into lines on any Unicode line boundary.
///
/// `\r\n` counts as a single break. A trailing break does not produce a
/// final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + ch.len_utf8();
        if ch == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            end += 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n'
            | '\r'
            | '\x0B'
            | '\x0C'
            | '\x1C'
            | '\x1D'
            | '\x1E'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// True for non-empty lines made only of `-`, `=`, `_` and `*` (section dividers).
pub fn is_divider(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| matches!(c, '-' | '=' | '_' | '*'))
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
