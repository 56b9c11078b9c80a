//! Import games from curated per-system index files.
//!
//! Index files live under `lists/Indexs/<system>_Index/*_index.json`:
//! ```json
//! {
//!   "meta": { "system": "ps2", "id_type": "serial", "art_dir": "D:\\Covers\\ps2" },
//!   "games": [
//!     { "id": "SLUS-20312", "displayTitle": "Final Fantasy X", "coverFile": "SLUS-20312.webp" }
//!   ]
//! }
//! ```
//! Every field is optional. The resulting records show a short console tag
//! as their serial and carry the real disc ID in `id` for cover lookup.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use retro_shelf_core::GameRecord;
use serde_json::{Map, Value};

use crate::lists::CatalogSummary;
use crate::titles::{normalize_title, strip_paren_groups, strip_trailing_bracket};
use crate::{CatalogError, write_catalog};

/// `meta` block of an index file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMeta {
    pub system: Option<String>,
    pub id_type: Option<String>,
    pub art_dir: Option<String>,
}

/// One entry of the `games` array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexGame {
    pub id: Option<String>,
    pub display_title: Option<String>,
    pub dat_title: Option<String>,
    pub cover_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexFile {
    pub meta: IndexMeta,
    pub games: Vec<IndexGame>,
}

/// An index file together with the system folder it was found in.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub folder: String,
    pub path: PathBuf,
    pub file: IndexFile,
}

impl IndexFile {
    /// Read the fields we use from arbitrary JSON, ignoring anything malformed.
    pub fn from_value(value: &Value) -> Self {
        let meta = value
            .get("meta")
            .and_then(Value::as_object)
            .map(|m| IndexMeta {
                system: text_field(m, "system"),
                id_type: text_field(m, "id_type"),
                art_dir: text_field(m, "art_dir"),
            })
            .unwrap_or_default();

        let games = value
            .get("games")
            .and_then(Value::as_array)
            .map(|games| {
                games
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|g| IndexGame {
                        id: text_field(g, "id"),
                        display_title: text_field(g, "displayTitle"),
                        dat_title: text_field(g, "datTitle"),
                        cover_file: text_field(g, "coverFile"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { meta, games }
    }
}

/// String or number field as text; empty strings and zero count as missing.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

impl IndexGame {
    /// Upper-cased, trimmed ID, if any.
    pub fn normalized_id(&self) -> Option<String> {
        self.id
            .as_deref()
            .map(|id| id.to_uppercase().trim().to_string())
            .filter(|id| !id.is_empty())
    }

    /// Display title with parenthesized tags removed.
    ///
    /// Prefers `displayTitle`, then `datTitle` without its trailing bracket
    /// group, then the raw `datTitle`.
    pub fn title(&self) -> String {
        let display = self.display_title.as_deref().map(str::trim).unwrap_or("");
        let dat = self.dat_title.as_deref().unwrap_or("");
        let raw = if !display.is_empty() {
            display.to_string()
        } else {
            let stripped = strip_trailing_bracket(dat);
            if stripped.is_empty() {
                dat.trim().to_string()
            } else {
                stripped
            }
        };
        strip_paren_groups(&raw)
    }

    /// Title candidate used for cover matching (parenthesized tags kept).
    pub fn cover_title(&self) -> String {
        match self.display_title.as_deref() {
            Some(display) => display.to_string(),
            None => strip_trailing_bracket(self.dat_title.as_deref().unwrap_or("")),
        }
    }
}

/// `<root>/lists/Indexs`
pub fn indexes_root(root: &Path) -> PathBuf {
    root.join("lists").join("Indexs")
}

/// Read one index file.
pub fn read_index_file(path: &Path) -> Result<IndexFile, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| CatalogError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(IndexFile::from_value(&value))
}

/// Load every `*_index.json` in each system folder under `indexes_dir`.
///
/// Folders and files are visited in name order. Unreadable or invalid
/// files are skipped with a warning.
pub fn load_indexes(indexes_dir: &Path) -> Result<Vec<LoadedIndex>, CatalogError> {
    if !indexes_dir.is_dir() {
        return Err(CatalogError::DirNotFound(indexes_dir.display().to_string()));
    }

    let mut loaded = Vec::new();
    for folder in sorted_entries(indexes_dir, |p| p.is_dir())? {
        let folder_name = file_name_of(&folder);
        let files = sorted_entries(&folder, |p| {
            p.is_file() && file_name_of(p).to_lowercase().ends_with("_index.json")
        })?;

        for path in files {
            match read_index_file(&path) {
                Ok(file) => loaded.push(LoadedIndex {
                    folder: folder_name.clone(),
                    path,
                    file,
                }),
                Err(e) => log::warn!("Skipping invalid index file: {}", e),
            }
        }
    }
    Ok(loaded)
}

fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>, CatalogError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| CatalogError::read(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| keep(p))
        .collect();
    paths.sort();
    Ok(paths)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// (meta.system, folder prefix, display name). First match wins.
const CONSOLE_NAMES: &[(&str, &str, &str)] = &[
    ("nds", "ds", "DS"),
    ("gc", "gc", "GameCube"),
    ("wii", "wii", "Wii"),
    ("ps2", "ps2", "PS2"),
    ("ps1", "ps1", "PS1"),
    ("n64", "n64", "N64"),
    ("nes", "nes", "NES"),
    ("snes", "snes", "SNES"),
    ("gba", "gba", "GBA"),
    ("gb", "gb", "GB"),
    ("atari 2600", "atari_2600", "Atari 2600"),
];

/// Console name used in `games.json`, from `meta.system` or the folder name.
pub fn console_display_name(system: Option<&str>, folder: &str) -> Option<String> {
    let sys = system.unwrap_or("").trim();
    let sys_lower = sys.to_lowercase();
    let folder = folder.to_lowercase();

    CONSOLE_NAMES
        .iter()
        .find(|(system, prefix, _)| sys_lower == *system || folder.starts_with(prefix))
        .map(|(_, _, name)| name.to_string())
        .or_else(|| (!sys.is_empty()).then(|| sys.to_string()))
}

/// Short tag shown in brackets next to the title.
pub fn console_tag(system: Option<&str>, fallback: &str) -> Option<String> {
    let sys = system.unwrap_or("").trim();
    match sys.to_lowercase().as_str() {
        "nds" => return Some("DS".to_string()),
        "atari 2600" => return Some("2600".to_string()),
        _ => {}
    }
    if !sys.is_empty() {
        return Some(sys.to_string());
    }
    let fallback = fallback.trim();
    (!fallback.is_empty()).then(|| fallback.to_string())
}

/// PS1/PS2 use serials and Wii/GameCube use game IDs; other systems key on title.
pub fn is_real_serial_system(id_type: Option<&str>) -> bool {
    matches!(
        id_type.unwrap_or("").to_lowercase().as_str(),
        "serial" | "game_id"
    )
}

/// Turn loaded index files into deduplicated, sorted records.
///
/// Systems with real serials dedupe on (console, ID); everything else on
/// (console, normalized title).
pub fn build_from_indexes(indexes: &[LoadedIndex]) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for index in indexes {
        let meta = &index.file.meta;
        let Some(console) = console_display_name(meta.system.as_deref(), &index.folder) else {
            log::debug!("No console for {}, skipping", index.path.display());
            continue;
        };
        let Some(tag) = console_tag(meta.system.as_deref(), &console) else {
            continue;
        };
        let real_serials = is_real_serial_system(meta.id_type.as_deref());

        for game in &index.file.games {
            let title = game.title();
            if title.is_empty() {
                continue;
            }

            let id = game.normalized_id().filter(|_| real_serials);
            let key = match &id {
                Some(id) => format!("{console}|{id}"),
                None => format!("{console}|{}", normalize_title(&title)),
            };
            if !seen.insert(key) {
                continue;
            }

            let display = format!("{title} [{tag}]");
            let mut record = GameRecord::new(title, console.as_str(), Some(tag.clone()), display);
            if let Some(id) = id {
                record = record.with_id(id);
            }
            out.push(record);
        }
    }

    sort_index_records(&mut out);
    out
}

/// Case-insensitive sort by console then title, with raw text as tie-break.
fn sort_index_records(records: &mut [GameRecord]) {
    fn loose_cmp(a: &str, b: &str) -> std::cmp::Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
    records.sort_by(|a, b| {
        loose_cmp(&a.console, &b.console).then_with(|| loose_cmp(&a.title, &b.title))
    });
}

/// Build `output` from the index files under `indexes_dir`.
pub fn import_index_catalog(
    indexes_dir: &Path,
    output: &Path,
) -> Result<CatalogSummary, CatalogError> {
    let indexes = load_indexes(indexes_dir)?;
    let records = build_from_indexes(&indexes);
    let json = serde_json::to_string_pretty(&records)?;
    write_catalog(output, &json)?;

    Ok(CatalogSummary {
        sources: indexes.len(),
        total: records.len(),
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "tests/index_import_tests.rs"]
mod tests;
