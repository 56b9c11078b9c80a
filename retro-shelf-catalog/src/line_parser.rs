//! Parser for one line of a console game list.
//!
//! Lines look like:
//! ```text
//! Super Mario 64 [NUS-001]
//! Metroid Prime [GM8E01]
//! Mario Kart 64 [N64]
//! Tetris
//! ----------
//! ```
//! The first bracketed serial becomes the record's serial, every bracketed
//! serial is removed from the title, and divider lines are skipped.

use std::sync::LazyLock;

use regex::Regex;
use retro_shelf_core::{GameRecord, is_divider};

/// Bracketed serial token, tried in priority order at each position:
/// catalog codes (`[SLUS-20265]`), 6-character disc IDs (`[RMCE01]`),
/// then short platform codes (`[N64]`).
static SERIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[((?:[A-Z]{3,5}-\d{3,6})|(?:[A-Z0-9]{6})|(?:[A-Z0-9]{2,5}))\]")
        .expect("static pattern")
});

static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("static pattern"));

/// Parse a list line into a record for `console`.
///
/// Returns `None` for blank lines, divider lines, and lines whose title is
/// empty once serials are removed.
///
/// # Examples
///
/// ```
/// use retro_shelf_catalog::line_parser::parse_line;
///
/// let record = parse_line("Super Mario 64 [NUS-001]", "N64").unwrap();
/// assert_eq!(record.title, "Super Mario 64");
/// assert_eq!(record.serial.as_deref(), Some("NUS-001"));
/// assert_eq!(record.display, "Super Mario 64 [NUS-001]");
///
/// assert!(parse_line("----------", "N64").is_none());
/// ```
pub fn parse_line(line: &str, console: &str) -> Option<GameRecord> {
    let line = line.trim();
    if line.is_empty() || is_divider(line) {
        return None;
    }

    let serial = find_serial(line).map(str::to_string);
    let title = clean_title(line);
    if title.is_empty() {
        return None;
    }

    Some(GameRecord::new(title, console, serial, line))
}

/// The first bracketed serial in `line`, without its brackets.
pub fn find_serial(line: &str) -> Option<&str> {
    SERIAL_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Remove every bracketed serial, collapse whitespace runs, and trim.
pub fn clean_title(line: &str) -> String {
    let stripped = SERIAL_RE.replace_all(line, "");
    collapse_whitespace(stripped.trim())
}

/// Replace runs of two or more whitespace characters with one space, then trim.
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
#[path = "tests/line_parser_tests.rs"]
mod tests;
