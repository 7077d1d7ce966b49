//! Application configuration.
//!
//! Centralizes the constants used throughout the shell (messages, command
//! vocabulary, formats) and the runtime [`Settings`] built from the command line.

use std::path::PathBuf;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used in logs.
pub const APP_NAME: &str = "tinysh";

/// Environment variable consulted for the log level when no flag is given.
pub const LOG_LEVEL_ENV: &str = "TINYSH_LOG_LEVEL";

/// Log level used when neither flags nor environment set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Hostname shown in the prompt when the system one cannot be resolved.
pub const FALLBACK_HOSTNAME: &str = "localhost";

// =============================================================================
// Command Vocabulary
// =============================================================================

/// Command keywords offered by tab completion.
///
/// Each keyword carries a trailing space so completing it leaves the cursor
/// ready for the argument.
pub const COMMAND_KEYWORDS: &[&str] = &["ls ", "ll ", "touch ", "cat ", "mkdir ", "rm ", "cd "];

/// Usage hint printed for unrecognized input.
pub const USAGE_HINT: &str =
    "You can use the following commands: ls, ll, touch, cat, mkdir, rm, cd, cd .., exit, quit";

// =============================================================================
// Listing Format
// =============================================================================

/// Header printed above a non-empty directory listing.
pub const LIST_HEADER: &str = "Type Created at       Name";

/// `chrono` format string for entry creation times (`YYYY-MM-DD HH:mm`).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

// =============================================================================
// Messages
// =============================================================================

pub mod messages {
    pub const DIRECTORY_EMPTY: &str = "The directory is empty";
    pub const DIRECTORY_CREATED: &str = "Directory created successfully";
    pub const DIRECTORY_EXISTS: &str = "Directory already exists";
    pub const DIRECTORY_MISSING: &str = "Directory not exists";
    pub const DIRECTORY_NOT_EMPTY: &str = "Directory not empty";
    pub const NOT_A_DIRECTORY: &str = "It does not a directory";
    pub const FILE_CREATED: &str = "File created successfully";
    pub const CONFIRM_OVERWRITE: &str = "File already exists, do you want continue? y/n: ";
}

// =============================================================================
// Runtime Settings
// =============================================================================

/// Settings resolved once at startup and fixed for the session.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Root of the navigable subtree.
    pub root: PathBuf,
    /// Hostname shown in the prompt.
    pub hostname: String,
    /// Whether output lines are rendered with ANSI colors.
    pub color: bool,
}

impl Settings {
    /// Build settings, treating an empty root as the working directory.
    pub fn new(root: Option<PathBuf>, hostname: impl Into<String>, color: bool) -> Self {
        let root = match root {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => PathBuf::from("."),
        };
        Self {
            root,
            hostname: hostname.into(),
            color,
        }
    }
}
