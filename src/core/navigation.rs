//! Navigation state: where the session is inside the root subtree.
//!
//! The current directory is never stored. It is always derived from the
//! immutable root plus the ordered path segments, so the two cannot drift
//! apart. The child entry cache mirrors the last listing of that directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::DiskFs;
use crate::core::error::FsError;
use crate::models::DirEntry;

/// Why [`Navigator::enter`] refused to move.
#[derive(Debug)]
pub enum EnterError {
    /// Nothing exists at the requested path
    Missing,
    /// The target exists but is not a directory
    NotDirectory,
    /// The target could not be listed
    Unreadable(FsError),
}

/// Session position and cached listing of the current directory.
#[derive(Clone, Debug)]
pub struct Navigator {
    root: PathBuf,
    segments: Vec<String>,
    entries: Vec<DirEntry>,
}

impl Navigator {
    /// Start at `root` with an empty cache. Call [`Navigator::reload`] before use.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            segments: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Real path of the current directory: root joined with every segment.
    pub fn current_dir(&self) -> PathBuf {
        join_segments(&self.root, &self.segments)
    }

    /// Path of `name` inside the current directory.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.current_dir().join(name)
    }

    /// Segments joined with `/`; empty at root.
    pub fn display_path(&self) -> String {
        self.segments.join("/")
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.kind.is_dir())
    }

    pub fn files(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.kind.is_file())
    }

    /// Every cached child name, in listing order.
    pub fn child_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Whether the last listing contained a regular file called `name`.
    pub fn has_file(&self, name: &str) -> bool {
        self.files().any(|e| e.name == name)
    }

    /// Re-list the current directory into the cache.
    ///
    /// On failure the cache is cleared rather than left describing a
    /// directory that could not be read.
    pub fn reload(&mut self, fs: &DiskFs) -> Result<(), FsError> {
        match fs.list(&self.current_dir()) {
            Ok(entries) => {
                debug!(
                    dir = %self.current_dir().display(),
                    count = entries.len(),
                    "reloaded entries"
                );
                self.entries = entries;
                Ok(())
            }
            Err(err) => {
                self.entries.clear();
                Err(err)
            }
        }
    }

    /// Move into `target`, which may span several segments (`a/b`).
    ///
    /// Empty and `.` segments are ignored and `..` steps back, never above
    /// the root. The destination is validated and listed before any state
    /// changes, so a failed call leaves the navigator untouched.
    pub fn enter(&mut self, target: &str, fs: &DiskFs) -> Result<(), EnterError> {
        let mut segments = self.segments.clone();
        for part in target.split(['/', std::path::MAIN_SEPARATOR]) {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        let path = join_segments(&self.root, &segments);
        if !fs.exists(&path) {
            return Err(EnterError::Missing);
        }
        let stat = fs.stat(&path).map_err(EnterError::Unreadable)?;
        if !stat.kind.is_dir() {
            return Err(EnterError::NotDirectory);
        }
        let entries = fs.list(&path).map_err(EnterError::Unreadable)?;

        debug!(from = %self.display_path(), to = %segments.join("/"), "entered directory");
        self.segments = segments;
        self.entries = entries;
        Ok(())
    }

    /// Step back one segment. At the root this only refreshes the cache.
    pub fn leave(&mut self, fs: &DiskFs) -> Result<(), FsError> {
        if let Some(left) = self.segments.pop() {
            debug!(left = %left, "left directory");
        }
        self.reload(fs)
    }
}

fn join_segments(root: &Path, segments: &[String]) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(segments);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Navigator, DiskFs) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b")).unwrap();
        fs::write(tmp.path().join("a/note.txt"), "").unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();
        let disk = DiskFs::new();
        let mut nav = Navigator::new(tmp.path());
        nav.reload(&disk).unwrap();
        (tmp, nav, disk)
    }

    #[test]
    fn test_current_dir_derived_from_segments() {
        let (tmp, mut nav, disk) = setup();
        assert_eq!(nav.current_dir(), tmp.path());
        nav.enter("a/b", &disk).unwrap();
        assert_eq!(nav.segments(), &["a".to_string(), "b".to_string()]);
        assert_eq!(nav.current_dir(), tmp.path().join("a").join("b"));
        assert_eq!(nav.display_path(), "a/b");
    }

    #[test]
    fn test_enter_then_leave_round_trip() {
        let (_tmp, mut nav, disk) = setup();
        let before_names = nav.child_names();

        nav.enter("a", &disk).unwrap();
        assert_eq!(nav.child_names(), vec!["b", "note.txt"]);
        nav.enter("b", &disk).unwrap();
        nav.leave(&disk).unwrap();
        nav.leave(&disk).unwrap();

        assert_eq!(nav.display_path(), "");
        assert_eq!(nav.child_names(), before_names);
    }

    #[test]
    fn test_enter_missing_leaves_state() {
        let (_tmp, mut nav, disk) = setup();
        assert!(matches!(nav.enter("ghost", &disk), Err(EnterError::Missing)));
        assert!(nav.segments().is_empty());
    }

    #[test]
    fn test_enter_file_rejected() {
        let (_tmp, mut nav, disk) = setup();
        assert!(matches!(
            nav.enter("top.txt", &disk),
            Err(EnterError::NotDirectory)
        ));
        assert!(nav.segments().is_empty());
        assert!(nav.has_file("top.txt"));
    }

    #[test]
    fn test_leave_at_root_is_noop() {
        let (_tmp, mut nav, disk) = setup();
        nav.leave(&disk).unwrap();
        assert!(nav.segments().is_empty());
        assert_eq!(nav.child_names(), vec!["a", "top.txt"]);
    }

    #[test]
    fn test_dot_dot_segments_never_escape_root() {
        let (_tmp, mut nav, disk) = setup();
        nav.enter("a/../../a/b", &disk).unwrap();
        assert_eq!(nav.display_path(), "a/b");
    }
}
