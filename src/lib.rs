//! A tiny interactive shell confined to one directory subtree.
//!
//! Input lines are classified by [`core::Command::parse`], executed by a
//! [`core::Session`] against the host filesystem, and rendered by the
//! [`terminal`] front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod terminal;
pub mod utils;
