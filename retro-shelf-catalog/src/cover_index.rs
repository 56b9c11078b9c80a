//! Lookup table from serial or title to cover image path.
//!
//! Written to `docs/coverIndex.json` for the website:
//! ```json
//! {
//!   "bySerial": { "ps2": { "SLUS-20312": "Covers/ps2/SLUS-20312.webp" } },
//!   "byTitle":  { "ps2": { "final fantasy x": "Covers/ps2/SLUS-20312.webp" } }
//! }
//! ```
//! Built from the index files when any exist, otherwise by scanning the
//! `Covers/` tree and reading serials out of file names.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::index_import::{LoadedIndex, indexes_root, load_indexes};
use crate::titles::normalize_title;
use crate::{CatalogError, write_catalog};

const IMAGE_EXTENSIONS: &[&str] = &["webp", "png", "jpg", "jpeg"];

static TRAILING_SERIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]$").expect("static pattern"));
static CATALOG_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[A-Z]{3,5}-\d{3,6}").expect("static pattern"));
static DISC_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[A-Z0-9]{6}").expect("static pattern"));

/// Per-console maps from upper-cased serial and normalized title to a
/// root-relative cover path. The first path recorded for a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverIndex {
    #[serde(rename = "bySerial")]
    pub by_serial: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(rename = "byTitle")]
    pub by_title: BTreeMap<String, BTreeMap<String, String>>,
}

/// Where the cover index entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSource {
    Indexes,
    Scan,
}

impl CoverIndex {
    pub fn add_entry(&mut self, console: &str, serial: Option<&str>, title: &str, path: &str) {
        if console.is_empty() || path.is_empty() {
            return;
        }
        let serials = self.by_serial.entry(console.to_string()).or_default();
        if let Some(serial) = serial {
            let key = serial.to_uppercase().trim().to_string();
            if !key.is_empty() {
                serials.entry(key).or_insert_with(|| path.to_string());
            }
        }
        let titles = self.by_title.entry(console.to_string()).or_default();
        if !title.is_empty() {
            titles
                .entry(title.to_string())
                .or_insert_with(|| path.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_serial.is_empty() && self.by_title.is_empty()
    }
}

/// Cover folder key for an index system folder (`ps2_Index` -> `ps2`).
///
/// Wii and GameCube share `wii_gc`.
pub fn cover_console_key(folder: &str) -> Option<&'static str> {
    let folder = folder.to_lowercase();
    ["ps2", "ps1", "n64", "nes", "snes", "gba"]
        .into_iter()
        .find(|key| folder.starts_with(key))
        .or_else(|| {
            (folder.starts_with("wii") || folder.starts_with("gc")).then_some("wii_gc")
        })
}

/// Last component of an `art_dir` path, accepting `/` or `\` separators.
fn art_dir_folder(art_dir: &str) -> Option<&str> {
    art_dir
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .last()
}

/// Fill `index` from loaded index files.
///
/// Returns false when no index file lists any games.
pub fn add_from_indexes(
    index: &mut CoverIndex,
    covers_root: &Path,
    indexes: &[LoadedIndex],
) -> bool {
    let mut loaded_any = false;

    for loaded in indexes {
        let file = &loaded.file;
        if file.games.is_empty() {
            continue;
        }
        loaded_any = true;

        let console = cover_console_key(&loaded.folder).unwrap_or("");
        // art_dir may point outside this tree; only trust it if the folder exists here.
        let folder = file
            .meta
            .art_dir
            .as_deref()
            .and_then(art_dir_folder)
            .filter(|f| covers_root.join(f).is_dir())
            .unwrap_or(console);

        for game in &file.games {
            let Some(cover_file) = game.cover_file.as_deref() else {
                continue;
            };
            let path = format!("Covers/{folder}/{cover_file}").replace('\\', "/");
            let title = normalize_title(&game.cover_title());
            let id = game.normalized_id();
            index.add_entry(console, id.as_deref(), &title, &path);
        }
    }

    loaded_any
}

/// Fill `index` by walking `covers_root/<console>/**` for images.
pub fn add_from_scan(
    index: &mut CoverIndex,
    root: &Path,
    covers_root: &Path,
) -> Result<(), CatalogError> {
    let mut files = Vec::new();
    walk(covers_root, &mut files)?;

    for path in files {
        let Ok(rel) = path.strip_prefix(covers_root) else {
            continue;
        };
        let mut components = rel.components();
        let console = components
            .next()
            .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
            .unwrap_or_default();
        // Images sitting directly in Covers/ have no console folder.
        if components.next().is_none() {
            continue;
        }

        let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        let rel_from_root = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (serial, title_part) = serial_from_stem(&stem);
        index.add_entry(
            &console,
            serial.as_deref(),
            &normalize_title(&title_part),
            &rel_from_root,
        );
    }
    Ok(())
}

/// Split a cover file stem into (serial, title text).
///
/// `Name [SERIAL]` uses the bracketed serial and the text before it.
/// Otherwise the first catalog code, else the first 6-character ID, is the
/// serial and the whole stem is the title.
pub fn serial_from_stem(stem: &str) -> (Option<String>, String) {
    if let Some(caps) = TRAILING_SERIAL_RE.captures(stem) {
        let whole = caps.get(0).map_or(stem.len(), |m| m.start());
        let serial = caps.get(1).map(|m| m.as_str().to_uppercase().trim().to_string());
        return (serial, stem[..whole].trim().to_string());
    }
    let serial = CATALOG_CODE_RE
        .find(stem)
        .or_else(|| DISC_ID_RE.find(stem))
        .map(|m| m.as_str().to_uppercase());
    (serial, stem.to_string())
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CatalogError> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| CatalogError::read(dir, e))?
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            walk(&entry.path(), files)?;
        } else if file_type.is_file() {
            files.push(entry.path());
        }
    }
    Ok(())
}

/// Build the cover index for a site rooted at `root`.
///
/// Requires `root/Covers`. Index files under `root/lists/Indexs` are
/// preferred; the covers tree is scanned when none of them list games.
pub fn build_cover_index(root: &Path) -> Result<(CoverIndex, CoverSource), CatalogError> {
    let covers_root = root.join("Covers");
    if !covers_root.is_dir() {
        return Err(CatalogError::DirNotFound(covers_root.display().to_string()));
    }

    let mut index = CoverIndex::default();
    let indexes_dir = indexes_root(root);
    if indexes_dir.is_dir() {
        let indexes = load_indexes(&indexes_dir)?;
        if add_from_indexes(&mut index, &covers_root, &indexes) {
            return Ok((index, CoverSource::Indexes));
        }
    }

    add_from_scan(&mut index, root, &covers_root)?;
    Ok((index, CoverSource::Scan))
}

/// `<root>/docs/coverIndex.json`
pub fn cover_index_path(root: &Path) -> PathBuf {
    root.join("docs").join("coverIndex.json")
}

/// Serialize `index` to `<root>/docs/coverIndex.json`, creating `docs/`.
pub fn write_cover_index(root: &Path, index: &CoverIndex) -> Result<PathBuf, CatalogError> {
    let path = cover_index_path(root);
    let json = serde_json::to_string_pretty(index)?;
    write_catalog(&path, &json)?;
    Ok(path)
}
