//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirEntry`], [`EntryKind`], [`ItemStat`] - Filesystem listing results
//! - [`OutputLine`], [`TextStyle`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{DirEntry, EntryKind, ItemStat};
pub use terminal::{OutputLine, TextStyle};
