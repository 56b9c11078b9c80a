//! Title cleanup shared by index imports and the cover index.

use std::sync::LazyLock;

use regex::Regex;

static PAREN_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("static pattern"));
static PAREN_GROUP_PADDED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*").expect("static pattern"));
static TRAILING_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]+\]\s*$").expect("static pattern"));
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Loose matching key for a title: lowercase ASCII words separated by single spaces.
///
/// `&` becomes "and" and parenthesized tags like "(USA)" are dropped, so
/// "Ratchet & Clank (USA)" and "ratchet and clank" normalize the same.
pub fn normalize_title(title: &str) -> String {
    let lower = title.to_lowercase().replace('&', "and");
    let no_tags = PAREN_GROUP_RE.replace_all(&lower, " ");
    let words = NON_ALNUM_RE.replace_all(&no_tags, " ");
    WHITESPACE_RE.replace_all(&words, " ").trim().to_string()
}

/// Drop a trailing `[...]` group such as a serial from a DAT title.
pub fn strip_trailing_bracket(title: &str) -> String {
    TRAILING_BRACKET_RE.replace(title, "").trim().to_string()
}

/// Remove every `(...)` group (region, languages, revision) and tidy spacing.
pub fn strip_paren_groups(title: &str) -> String {
    let stripped = PAREN_GROUP_PADDED_RE.replace_all(title, " ");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert_eq!(normalize_title("Ratchet & Clank (USA)"), "ratchet and clank");
        assert_eq!(normalize_title("  Final Fantasy X-2  "), "final fantasy x 2");
        assert_eq!(normalize_title("Pokémon Snap"), "pok mon snap");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("(Japan)"), "");
    }

    #[test]
    fn strip_trailing_bracket_only_at_end() {
        assert_eq!(
            strip_trailing_bracket("Metroid Prime (USA) [GM8E01]"),
            "Metroid Prime (USA)"
        );
        assert_eq!(strip_trailing_bracket("[GM8E01] Metroid"), "[GM8E01] Metroid");
        assert_eq!(strip_trailing_bracket("Halo"), "Halo");
    }

    #[test]
    fn strip_paren_groups_anywhere() {
        assert_eq!(
            strip_paren_groups("Final Fantasy VII (USA) (Disc 1)"),
            "Final Fantasy VII"
        );
        assert_eq!(strip_paren_groups("Zelda (En,Fr) Collection"), "Zelda Collection");
    }
}
