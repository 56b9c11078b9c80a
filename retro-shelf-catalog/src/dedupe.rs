use std::collections::HashSet;

use retro_shelf_core::GameRecord;

/// Remove repeated records, keeping the first occurrence of each key.
///
/// The key is (console, serial or empty, lowercased title), so games that
/// share a platform code like `[N64]` all stay. Later duplicates are dropped
/// even when their `display` text differs.
pub fn dedupe(records: Vec<GameRecord>) -> Vec<GameRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, console: &str, serial: Option<&str>) -> GameRecord {
        let display = match serial {
            Some(s) => format!("{title} [{s}]"),
            None => title.to_string(),
        };
        GameRecord::new(title, console, serial.map(String::from), display)
    }

    #[test]
    fn case_insensitive_title_match() {
        let out = dedupe(vec![
            record("Halo", "Xbox", Some("XBX")),
            record("halo", "Xbox", Some("XBX")),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Halo");
    }

    #[test]
    fn keeps_first_display() {
        let first = GameRecord::new("Tetris", "GB", None, "Tetris");
        let second = GameRecord::new("Tetris", "GB", None, "  Tetris");
        let out = dedupe(vec![first.clone(), second]);
        assert_eq!(out, vec![first]);
    }

    #[test]
    fn shared_serial_distinct_titles_survive() {
        let out = dedupe(vec![
            record("Mario Kart 64", "N64", Some("N64")),
            record("Star Fox 64", "N64", Some("N64")),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn serial_and_console_are_part_of_key() {
        let out = dedupe(vec![
            record("Tetris", "GB", None),
            record("Tetris", "GB", Some("DMG")),
            record("Tetris", "NES", None),
        ]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn preserves_first_seen_order() {
        let out = dedupe(vec![
            record("B", "PS2", None),
            record("A", "PS2", None),
            record("b", "PS2", None),
            record("C", "PS2", None),
        ]);
        let titles: Vec<_> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }
}
