//! Core types shared by the retro-shelf crates.
//!
//! Defines the [`GameRecord`] entry written to `games.json` and the text
//! helpers used to read hand-maintained game lists.

pub mod record;
pub mod text;

pub use record::{DedupKey, GameRecord};
pub use text::{decode_permissive, is_divider, split_lines};
