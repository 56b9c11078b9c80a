//! Discovery and parsing of per-console `.txt` game lists.
//!
//! Expected layout:
//! ```text
//! root/
//!   games.json      <- written here
//!   lists/
//!     GameCube.txt
//!     PS2.txt
//!     Wii.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use retro_shelf_core::{GameRecord, decode_permissive, split_lines};

use crate::{CATALOG_FILE_NAME, CatalogError, dedupe, finalize, parse_line, write_catalog};

/// One text list; its file stem names the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSource {
    pub path: PathBuf,
    pub console: String,
}

impl ListSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let console = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, console }
    }

    /// File name for progress messages (e.g., "PS2.txt").
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Read and parse every line of the list.
    pub fn parse(&self) -> Result<Vec<GameRecord>, CatalogError> {
        let bytes = fs::read(&self.path).map_err(|e| CatalogError::read(&self.path, e))?;
        Ok(parse_text(&decode_permissive(&bytes), &self.console))
    }
}

/// Parse already-decoded list text for `console`, skipping lines that yield no record.
pub fn parse_text(text: &str, console: &str) -> Vec<GameRecord> {
    split_lines(text)
        .into_iter()
        .filter_map(|line| parse_line(line, console))
        .collect()
}

/// Find all `*.txt` files directly inside `dir`, sorted by path.
///
/// A missing directory yields no sources.
pub fn discover_sources(dir: &Path) -> Result<Vec<ListSource>, CatalogError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(CatalogError::DirNotFound(dir.display().to_string()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| CatalogError::read(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    Ok(paths.into_iter().map(ListSource::from_path).collect())
}

/// Where the catalog built from `lists_dir` is written: next to the lists folder.
///
/// The directory is resolved first, so `.` or `lists/..` still land in the
/// real parent. Paths ending in `.` or `..` must exist.
pub fn catalog_path_for(lists_dir: &Path) -> Result<PathBuf, CatalogError> {
    let resolved = if lists_dir.file_name().is_some() {
        std::path::absolute(lists_dir)
    } else {
        fs::canonicalize(lists_dir)
    }
    .map_err(|e| CatalogError::read(lists_dir, e))?;

    Ok(resolved
        .parent()
        .unwrap_or(&resolved)
        .join(CATALOG_FILE_NAME))
}

/// Progress callbacks for building from lists.
pub trait ListProgress {
    fn on_source(&self, source: &ListSource, parsed: usize);
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub sources: usize,
    pub total: usize,
    pub output: PathBuf,
}

/// Build `games.json` from every list in `lists_dir`.
///
/// Returns `Ok(None)` without writing anything when no lists are found.
pub fn build_from_lists(
    lists_dir: &Path,
    progress: Option<&dyn ListProgress>,
) -> Result<Option<CatalogSummary>, CatalogError> {
    let sources = discover_sources(lists_dir)?;
    if sources.is_empty() {
        return Ok(None);
    }

    let mut all = Vec::new();
    for source in &sources {
        let parsed = source.parse()?;
        log::debug!("{}: {} records", source.path.display(), parsed.len());
        if let Some(p) = progress {
            p.on_source(source, parsed.len());
        }
        all.extend(parsed);
    }

    let records = dedupe(all);
    let total = records.len();
    let json = finalize(records)?;

    let output = catalog_path_for(lists_dir)?;
    write_catalog(&output, &json)?;

    Ok(Some(CatalogSummary {
        sources: sources.len(),
        total,
        output,
    }))
}
