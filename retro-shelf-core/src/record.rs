use serde::{Deserialize, Serialize};

/// One game entry in the generated catalog.
///
/// Field order matches the JSON layout consumed by the website:
/// `title`, `console`, `serial`, `display` (and `id` for index imports).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Cleaned title with serial tokens removed and whitespace collapsed.
    pub title: String,

    /// Identifier of the list the entry came from (e.g., "PS2").
    pub console: String,

    /// First bracketed serial on the line, written as `null` when absent.
    pub serial: Option<String>,

    /// The trimmed source line, kept verbatim for display.
    pub display: String,

    /// Real disc/game ID used for cover lookup. Only index imports set this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GameRecord {
    pub fn new(
        title: impl Into<String>,
        console: impl Into<String>,
        serial: Option<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            console: console.into(),
            serial,
            display: display.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Key used to drop repeated entries: console, serial (or empty), lowercased title.
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            console: self.console.clone(),
            serial: self.serial.clone().unwrap_or_default(),
            title: self.title.to_lowercase(),
        }
    }

    /// Lowercased title used as the secondary sort key.
    pub fn sort_title(&self) -> String {
        self.title.to_lowercase()
    }
}

/// Identity of a [`GameRecord`] for deduplication.
///
/// Two entries sharing a serial (e.g., every `[N64]` line) stay distinct
/// as long as their titles differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub console: String,
    pub serial: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_key_lowercases_title_and_defaults_serial() {
        let record = GameRecord::new("Halo", "Xbox", None, "Halo");
        let key = record.dedup_key();
        assert_eq!(key.console, "Xbox");
        assert_eq!(key.serial, "");
        assert_eq!(key.title, "halo");
    }

    #[test]
    fn same_serial_different_title_is_distinct() {
        let a = GameRecord::new("Mario Kart 64", "N64", Some("N64".into()), "Mario Kart 64 [N64]");
        let b = GameRecord::new("Star Fox 64", "N64", Some("N64".into()), "Star Fox 64 [N64]");
        assert_ne!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn serializes_null_serial_and_omits_missing_id() {
        let record = GameRecord::new("Tetris", "GB", None, "Tetris");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Tetris","console":"GB","serial":null,"display":"Tetris"}"#
        );
    }

    #[test]
    fn serializes_id_when_present() {
        let record = GameRecord::new("Okami", "PS2", Some("PS2".into()), "Okami [PS2]")
            .with_id("SLUS-21115");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.ends_with(r#""id":"SLUS-21115"}"#));
    }
}
