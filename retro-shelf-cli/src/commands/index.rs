use std::path::Path;

use retro_shelf_catalog::{CATALOG_FILE_NAME, CatalogError, import_index_catalog, indexes_root};

use crate::error::CliError;

/// Build games.json from the curated index files.
pub(crate) fn run_index(root: &Path) -> Result<(), CliError> {
    let indexes_dir = indexes_root(root);
    let output = root.join(CATALOG_FILE_NAME);

    let summary = match import_index_catalog(&indexes_dir, &output) {
        Ok(summary) => summary,
        Err(CatalogError::DirNotFound(_)) => {
            return Err(CliError::missing_dir(
                "Indexs folder",
                &indexes_dir,
                "lists/Indexs/<system>_Index/*_index.json",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    log::debug!("Loaded {} index files", summary.sources);
    log::info!("Wrote {} games -> {}", summary.total, summary.output.display());
    Ok(())
}
