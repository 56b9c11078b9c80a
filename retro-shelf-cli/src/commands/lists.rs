use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use retro_shelf_catalog::{ListProgress, ListSource, build_from_lists};

use crate::error::CliError;

struct CliListProgress;

impl ListProgress for CliListProgress {
    fn on_source(&self, source: &ListSource, parsed: usize) {
        log::info!("Parsed {} from {}", parsed, source.file_name());
    }
}

/// Build games.json from `<lists_dir>/*.txt`.
///
/// Finding no lists is reported but is not an error.
pub(crate) fn run_lists(root: &Path, lists_dir: Option<PathBuf>) -> Result<(), CliError> {
    let lists_dir = lists_dir.unwrap_or_else(|| root.join("lists"));

    match build_from_lists(&lists_dir, Some(&CliListProgress))? {
        None => {
            log::warn!("No .txt files found in: {}", lists_dir.display());
            log::info!(
                "Put GameCube.txt / PS2.txt / Wii.txt in {}",
                lists_dir.display()
            );
        }
        Some(summary) => {
            log::info!("");
            log::info!(
                "Wrote {} total -> {}",
                summary.total.if_supports_color(Stdout, |t| t.bold()),
                summary.output.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_next_to_lists_dir() {
        let tmp = TempDir::new().unwrap();
        let lists = tmp.path().join("lists");
        fs::create_dir(&lists).unwrap();
        fs::write(lists.join("N64.txt"), "Super Mario 64 [NUS-001]\n").unwrap();

        run_lists(tmp.path(), None).unwrap();
        assert!(tmp.path().join("games.json").is_file());
    }

    #[test]
    fn no_lists_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        run_lists(tmp.path(), None).unwrap();
        assert!(!tmp.path().join("games.json").exists());
    }

    #[test]
    fn custom_lists_dir() {
        let tmp = TempDir::new().unwrap();
        let lists = tmp.path().join("site").join("txt");
        fs::create_dir_all(&lists).unwrap();
        fs::write(lists.join("Wii.txt"), "Wii Sports\n").unwrap();

        run_lists(tmp.path(), Some(lists)).unwrap();
        assert!(tmp.path().join("site").join("games.json").is_file());
    }
}
