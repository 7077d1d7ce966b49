//! Command execution logic.
//!
//! Each command is a single transition over the [`Navigator`]: it touches
//! the disk through [`DiskFs`], reloads the entry cache after any structural
//! change, and translates every [`FsError`] into exactly one output line.

use tracing::{debug, warn};

use crate::config::{LIST_HEADER, USAGE_HINT, messages};
use crate::core::error::FsError;
use crate::core::navigation::{EnterError, Navigator};
use crate::core::parser::{Command, PathArg};
use crate::core::DiskFs;
use crate::models::{EntryKind, OutputLine};

use super::{CommandResult, PendingAction};

/// Execute a parsed command.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `nav` - Navigation state, updated in place
/// * `fs` - Disk adapter
pub fn execute_command(cmd: Command, nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    debug!(?cmd, at = %nav.display_path(), "executing command");

    match cmd {
        Command::List => execute_list(nav, fs),
        Command::CreateFile(name) => execute_touch(name, nav, fs),
        Command::MakeDirectory(name) => execute_mkdir(name, nav, fs),
        Command::ChangeDirectory(name) => execute_cd(name, nav, fs),
        Command::GoBack => execute_back(nav, fs),
        Command::Remove(name) => execute_rm(name, nav, fs),
        Command::ShowFile(name) => execute_cat(name, nav, fs),
        Command::Quit => CommandResult::quit(),
        Command::Unknown(_) => CommandResult::line(OutputLine::hint(USAGE_HINT)),
    }
}

/// Finish an operation that was waiting for a yes/no answer.
pub fn resolve_pending(
    action: PendingAction,
    accepted: bool,
    nav: &mut Navigator,
    fs: &DiskFs,
) -> CommandResult {
    match action {
        PendingAction::OverwriteFile(name) if accepted => create_file(&name, true, nav, fs),
        PendingAction::OverwriteFile(name) => {
            debug!(file = %name, "overwrite declined");
            CommandResult::empty()
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

fn execute_list(nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    if let Err(err) = nav.reload(fs) {
        return fs_failure("Cannot list directory", err);
    }

    let mut lines: Vec<OutputLine> = nav
        .directories()
        .chain(nav.files())
        .map(OutputLine::entry)
        .collect();

    if lines.is_empty() {
        return CommandResult::line(OutputLine::warning(messages::DIRECTORY_EMPTY));
    }
    lines.insert(0, OutputLine::ListHeader(LIST_HEADER.to_string()));
    CommandResult::output(lines)
}

// =============================================================================
// Creation
// =============================================================================

fn execute_touch(name: PathArg, nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    if nav.has_file(name.as_str()) {
        return ask_overwrite(name);
    }
    create_file(&name, false, nav, fs)
}

fn create_file(
    name: &PathArg,
    overwrite: bool,
    nav: &mut Navigator,
    fs: &DiskFs,
) -> CommandResult {
    let path = nav.resolve(name.as_str());
    match fs.create_file(&path, overwrite) {
        Ok(()) => with_reload(nav, fs, OutputLine::success(messages::FILE_CREATED)),
        // Stale cache, or a symlink whose target is a file: overwriting
        // truncates the target.
        Err(FsError::AlreadyExists(_)) if fs.resolves_to_file(&path) => {
            ask_overwrite(name.clone())
        }
        Err(err) => fs_failure(&format!("Cannot create \"{name}\""), err),
    }
}

fn ask_overwrite(name: PathArg) -> CommandResult {
    CommandResult::confirm(
        messages::CONFIRM_OVERWRITE,
        PendingAction::OverwriteFile(name),
    )
}

fn execute_mkdir(name: PathArg, nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    match fs.make_directory(&nav.resolve(name.as_str())) {
        Ok(()) => with_reload(nav, fs, OutputLine::success(messages::DIRECTORY_CREATED)),
        Err(FsError::AlreadyExists(_)) => {
            CommandResult::line(OutputLine::error(messages::DIRECTORY_EXISTS))
        }
        Err(err) => fs_failure(&format!("Cannot create directory \"{name}\""), err),
    }
}

// =============================================================================
// Navigation
// =============================================================================

fn execute_cd(name: PathArg, nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    match nav.enter(name.as_str(), fs) {
        Ok(()) => CommandResult::empty(),
        Err(EnterError::Missing) => {
            CommandResult::line(OutputLine::error(messages::DIRECTORY_MISSING))
        }
        Err(EnterError::NotDirectory) => {
            CommandResult::line(OutputLine::error(messages::NOT_A_DIRECTORY))
        }
        Err(EnterError::Unreadable(err)) => fs_failure(&format!("Cannot enter \"{name}\""), err),
    }
}

fn execute_back(nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    match nav.leave(fs) {
        Ok(()) => CommandResult::empty(),
        Err(err) => fs_failure("Cannot list directory", err),
    }
}

// =============================================================================
// Removal
// =============================================================================

fn execute_rm(name: PathArg, nav: &mut Navigator, fs: &DiskFs) -> CommandResult {
    let path = nav.resolve(name.as_str());
    if !fs.exists(&path) {
        return CommandResult::line(OutputLine::warning(format!("\"{name}\" not exists")));
    }

    let removed = fs.stat(&path).and_then(|stat| match stat.kind {
        EntryKind::Directory => fs.remove_directory(&path),
        EntryKind::File | EntryKind::Other => fs.remove_file(&path),
    });

    match removed {
        Ok(()) => with_reload(nav, fs, OutputLine::success(format!("\"{name}\" deleted"))),
        Err(FsError::NotEmpty(_)) => {
            CommandResult::line(OutputLine::error(messages::DIRECTORY_NOT_EMPTY))
        }
        Err(err) => fs_failure(&format!("Cannot remove \"{name}\""), err),
    }
}

// =============================================================================
// Reading
// =============================================================================

fn execute_cat(name: PathArg, nav: &Navigator, fs: &DiskFs) -> CommandResult {
    let path = nav.resolve(name.as_str());
    if !fs.exists(&path) {
        return CommandResult::line(OutputLine::error(format!("\"{name}\" not exists")));
    }

    match fs.stat(&path) {
        Ok(stat) if stat.kind.is_file() => match fs.read_file(&path) {
            Ok(content) => CommandResult::line(OutputLine::text(content)),
            Err(err) => fs_failure(&format!("Cannot read \"{name}\""), err),
        },
        Ok(_) => CommandResult::line(OutputLine::error(format!("\"{name}\" is not a file"))),
        Err(err) => fs_failure(&format!("Cannot read \"{name}\""), err),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Reload after a mutation and report `success`, or the reload failure.
fn with_reload(nav: &mut Navigator, fs: &DiskFs, success: OutputLine) -> CommandResult {
    match nav.reload(fs) {
        Ok(()) => CommandResult::line(success),
        Err(err) => {
            let mut result = fs_failure("Cannot list directory", err);
            result.output.insert(0, success);
            result
        }
    }
}

/// Translate an unclassified failure into a single error line.
fn fs_failure(context: &str, err: FsError) -> CommandResult {
    warn!(error = %err, "{context}");
    CommandResult::line(OutputLine::error(format!("{context}: {err}")))
}

// =============================================================================
// Tests
// =============================================================================
