//! Builds the `games.json` catalog and cover lookup index.
//!
//! The main pipeline reads per-console text lists (`PS2.txt`, `Wii.txt`, ...),
//! parses each line into a [`GameRecord`], drops duplicates, sorts, and
//! serializes the result. Curated `*_index.json` files can be imported
//! instead, and are also used to build the cover index.

pub mod cover_index;
pub mod dedupe;
pub mod error;
pub mod index_import;
pub mod line_parser;
pub mod lists;
pub mod titles;
pub mod writer;

pub use cover_index::{
    CoverIndex, CoverSource, build_cover_index, cover_index_path, write_cover_index,
};
pub use dedupe::dedupe;
pub use error::CatalogError;
pub use index_import::{
    IndexFile, IndexGame, IndexMeta, LoadedIndex, build_from_indexes, import_index_catalog,
    indexes_root, load_indexes,
};
pub use line_parser::parse_line;
pub use lists::{
    CatalogSummary, ListProgress, ListSource, build_from_lists, catalog_path_for, discover_sources,
    parse_text,
};
pub use retro_shelf_core::GameRecord;
pub use writer::{finalize, sort_records, write_catalog};

/// File name of the generated catalog.
pub const CATALOG_FILE_NAME: &str = "games.json";
