//! Core business logic for the shell.
//!
//! This module provides:
//! - [`Command`] parsing and [`execute_command`] dispatch
//! - [`DiskFs`] filesystem access and [`Navigator`] position tracking
//! - [`autocomplete`] for tab completion
//! - [`Session`] tying them together for one interactive user

pub mod autocomplete;
pub mod commands;
pub mod error;
mod filesystem;
pub mod navigation;
pub mod parser;
mod session;

pub use autocomplete::{Completion, autocomplete};
pub use commands::{CommandResult, Effect, execute_command};
pub use filesystem::DiskFs;
pub use navigation::Navigator;
pub use parser::Command;
pub use session::Session;
