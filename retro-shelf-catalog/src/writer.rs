//! Sorting and serialization of the final catalog.

use std::fs;
use std::path::Path;

use retro_shelf_core::GameRecord;

use crate::CatalogError;

/// Stable sort by console, then lowercased title.
pub fn sort_records(records: &mut [GameRecord]) {
    records.sort_by_cached_key(|r| (r.console.clone(), r.sort_title()));
}

/// Sort records and render them as a pretty-printed JSON array.
///
/// Non-ASCII text is written literally. No trailing newline is added.
pub fn finalize(mut records: Vec<GameRecord>) -> Result<String, CatalogError> {
    sort_records(&mut records);
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Write serialized catalog JSON to `path`, replacing any existing file.
///
/// Writes to a sibling temp file first, then renames it into place.
pub fn write_catalog(path: &Path, json: &str) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CatalogError::write(parent, e))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| CatalogError::write(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(CatalogError::write(path, e));
    }
    Ok(())
}
