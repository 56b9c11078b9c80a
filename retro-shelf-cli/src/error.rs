use std::path::{Path, PathBuf};

use retro_shelf_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog build failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// An input folder a command depends on is missing
    #[error("{what} not found: {} (expected {expected})", path.display())]
    MissingDir {
        what: &'static str,
        path: PathBuf,
        expected: &'static str,
    },

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

impl CliError {
    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }

    pub(crate) fn missing_dir(what: &'static str, path: &Path, expected: &'static str) -> Self {
        Self::MissingDir {
            what,
            path: path.to_path_buf(),
            expected,
        }
    }
}
