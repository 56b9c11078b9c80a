use std::path::Path;

use retro_shelf_catalog::{
    CatalogError, CoverSource, build_cover_index, indexes_root, write_cover_index,
};

use crate::error::CliError;

/// Build docs/coverIndex.json.
pub(crate) fn run_covers(root: &Path) -> Result<(), CliError> {
    let covers_root = root.join("Covers");

    let (index, source) = match build_cover_index(root) {
        Ok(built) => built,
        Err(CatalogError::DirNotFound(_)) if !covers_root.is_dir() => {
            return Err(CliError::missing_dir(
                "Covers root",
                &covers_root,
                "Covers/<console>/*.webp",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    match source {
        CoverSource::Indexes => {
            log::info!("Built cover index from: {}", indexes_root(root).display())
        }
        CoverSource::Scan => log::info!("Scanned covers under: {}", covers_root.display()),
    }

    let path = write_cover_index(root, &index)?;
    log::info!("Wrote cover index -> {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_covers_root_is_one_error_with_hint() {
        let tmp = TempDir::new().unwrap();
        let err = run_covers(tmp.path()).unwrap_err();
        match &err {
            CliError::MissingDir { what, path, .. } => {
                assert_eq!(*what, "Covers root");
                assert_eq!(path, &tmp.path().join("Covers"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("(expected Covers/<console>/*.webp)"));
        assert!(!tmp.path().join("docs").exists());
    }
}
