pub(crate) mod covers;
pub(crate) mod index;
pub(crate) mod lists;

use std::path::PathBuf;

/// Resolve the site root: `--root` if given, else the current directory.
pub(crate) fn resolve_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
