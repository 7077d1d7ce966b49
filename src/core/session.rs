//! A single interactive session.
//!
//! Owns the navigation state, the disk adapter and the prompt host. Nothing
//! is global, so several sessions can run side by side.

use tracing::info;

use crate::config::Settings;
use crate::core::commands::{self, CommandResult, PendingAction};
use crate::core::error::ShellError;
use crate::core::navigation::Navigator;
use crate::core::parser::Command;
use crate::core::{Completion, DiskFs, autocomplete};

pub struct Session {
    nav: Navigator,
    fs: DiskFs,
    hostname: String,
}

impl Session {
    /// Open a session rooted at `settings.root`.
    ///
    /// Fails if the root is not an existing, listable directory.
    pub fn open(settings: &Settings) -> Result<Self, ShellError> {
        let fs = DiskFs::new();
        let root = &settings.root;
        // Follows symlinks: a linked root is fine if it resolves to a directory.
        if !root.is_dir() {
            return Err(ShellError::InvalidRoot(root.clone()));
        }

        let mut nav = Navigator::new(root.clone());
        nav.reload(&fs).map_err(ShellError::RootUnreadable)?;
        info!(root = %root.display(), "session opened");

        Ok(Self {
            nav,
            fs,
            hostname: settings.hostname.clone(),
        })
    }

    /// Prompt string: `<hostname>@<path-from-root>/>`.
    pub fn prompt(&self) -> String {
        format!("{}@{}/>", self.hostname, self.nav.display_path())
    }

    /// Child names the completer should offer right now.
    pub fn child_names(&self) -> Vec<String> {
        self.nav.child_names()
    }

    pub fn complete(&self, line: &str) -> Completion {
        autocomplete(line, &self.nav.child_names())
    }

    /// Parse and run one input line.
    pub fn run_line(&mut self, line: &str) -> CommandResult {
        self.execute(Command::parse(line))
    }

    pub fn execute(&mut self, cmd: Command) -> CommandResult {
        commands::execute_command(cmd, &mut self.nav, &self.fs)
    }

    /// Resume a command that asked for confirmation.
    pub fn resolve(&mut self, action: PendingAction, accepted: bool) -> CommandResult {
        commands::resolve_pending(action, accepted, &mut self.nav, &self.fs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(tmp: &TempDir) -> Session {
        Session::open(&Settings::new(Some(tmp.path().to_path_buf()), "box", false)).unwrap()
    }

    #[test]
    fn test_prompt_follows_navigation() {
        let tmp = TempDir::new().unwrap();
        let mut session = open(&tmp);
        assert_eq!(session.prompt(), "box@/>");

        session.run_line("mkdir docs");
        session.run_line("cd docs");
        assert_eq!(session.prompt(), "box@docs/>");

        session.run_line("cd ..");
        assert_eq!(session.prompt(), "box@/>");
    }

    #[test]
    fn test_invalid_root() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::new(Some(tmp.path().join("missing")), "box", false);
        assert!(matches!(
            Session::open(&settings),
            Err(ShellError::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_sessions_are_independent() {
        let tmp = TempDir::new().unwrap();
        let mut first = open(&tmp);
        let second = open(&tmp);

        first.run_line("mkdir a");
        first.run_line("cd a");
        assert_eq!(first.prompt(), "box@a/>");
        assert_eq!(second.prompt(), "box@/>");
        assert!(second.child_names().is_empty());
    }

    #[test]
    fn test_completion_sees_new_entries() {
        let tmp = TempDir::new().unwrap();
        let mut session = open(&tmp);
        session.run_line("touch report.txt");
        let completion = session.complete("cat re");
        assert_eq!(completion.candidates, vec!["report.txt"]);
    }
}
