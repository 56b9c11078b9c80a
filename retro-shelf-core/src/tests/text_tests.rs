use super::*;

#[test]
fn decode_valid_utf8_unchanged() {
    assert_eq!(decode_permissive("Pokémon Snap".as_bytes()), "Pokémon Snap");
}

#[test]
fn decode_drops_invalid_bytes() {
    assert_eq!(decode_permissive(b"Halo\xFF 2\xC3"), "Halo 2");
}

#[test]
fn decode_strips_bom() {
    assert_eq!(decode_permissive(b"\xEF\xBB\xBFTetris\n"), "Tetris\n");
}

#[test]
fn split_lines_handles_mixed_breaks() {
    assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
}

#[test]
fn split_lines_keeps_blank_lines() {
    assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
}

#[test]
fn split_lines_empty_input() {
    assert!(split_lines("").is_empty());
}

#[test]
fn split_lines_unicode_separators() {
    assert_eq!(split_lines("x\u{2028}y\u{85}z"), vec!["x", "y", "z"]);
}

#[test]
fn divider_lines() {
    assert!(is_divider("----------"));
    assert!(is_divider("=-=_*"));
    assert!(!is_divider(""));
    assert!(!is_divider("-- Nintendo --"));
}
