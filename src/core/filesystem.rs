//! Host filesystem adapter.
//!
//! Thin wrapper over `std::fs` that reports typed [`FsError`] outcomes
//! instead of raw `io::Error`s. Every call is synchronous and attempted
//! exactly once.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::core::error::FsError;
use crate::models::{DirEntry, EntryKind, ItemStat};

/// Stateless handle to the host filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskFs;

impl DiskFs {
    pub fn new() -> Self {
        Self
    }

    /// List a directory: directories first, then files, then anything else,
    /// each group ordered by name.
    pub fn list(&self, dir: &Path) -> Result<Vec<DirEntry>, FsError> {
        let reader = fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;

        let mut entries = Vec::new();
        for item in reader {
            let item = item.map_err(|e| FsError::from_io(dir, e))?;
            let name = item.file_name().to_string_lossy().into_owned();
            let kind = item
                .file_type()
                .map(EntryKind::from_file_type)
                .unwrap_or(EntryKind::Other);
            // Metadata may race with concurrent deletion; the entry still lists.
            let created_at = fs::symlink_metadata(item.path())
                .ok()
                .and_then(|meta| created_time(&meta));
            entries.push(DirEntry {
                name,
                kind,
                created_at,
            });
        }

        entries.sort_by(|a, b| {
            kind_rank(a.kind)
                .cmp(&kind_rank(b.kind))
                .then(a.name.cmp(&b.name))
        });
        Ok(entries)
    }

    /// Check whether anything exists at `path` (a dangling symlink counts).
    pub fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    /// Whether `path` is a regular file once symlinks are followed.
    pub fn resolves_to_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.is_file())
    }

    /// Stat an item without following symlinks.
    pub fn stat(&self, path: &Path) -> Result<ItemStat, FsError> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(ItemStat {
            kind: EntryKind::from_file_type(meta.file_type()),
        })
    }

    pub fn make_directory(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir(path).map_err(|e| FsError::from_io(path, e))
    }

    /// Create an empty file. Without `overwrite`, an existing file is an error.
    pub fn create_file(&self, path: &Path, overwrite: bool) -> Result<(), FsError> {
        let mut options = fs::OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        options
            .open(path)
            .map(drop)
            .map_err(|e| FsError::from_io(path, e))
    }

    pub fn remove_directory(&self, path: &Path) -> Result<(), FsError> {
        fs::remove_dir(path).map_err(|e| FsError::from_io(path, e))
    }

    pub fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    /// Read a file as UTF-8 text; invalid sequences are replaced.
    pub fn read_file(&self, path: &Path) -> Result<String, FsError> {
        let bytes = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn kind_rank(kind: EntryKind) -> u8 {
    match kind {
        EntryKind::Directory => 0,
        EntryKind::File => 1,
        EntryKind::Other => 2,
    }
}

fn created_time(meta: &fs::Metadata) -> Option<DateTime<Local>> {
    meta.created()
        .or_else(|_| meta.modified())
        .ok()
        .map(|time: SystemTime| DateTime::<Local>::from(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_orders_dirs_before_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("zeta")).unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();

        let entries = DiskFs::new().list(tmp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "zeta", "a.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[2].kind, EntryKind::File);
        assert!(entries.iter().all(|e| e.created_at.is_some()));
    }

    #[test]
    fn test_list_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let result = DiskFs::new().list(&tmp.path().join("nope"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn test_make_directory_twice() {
        let tmp = TempDir::new().unwrap();
        let fs = DiskFs::new();
        let path = tmp.path().join("docs");
        fs.make_directory(&path).unwrap();
        assert!(matches!(
            fs.make_directory(&path),
            Err(FsError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_create_file_overwrite() {
        let tmp = TempDir::new().unwrap();
        let fs = DiskFs::new();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "old").unwrap();

        assert!(matches!(
            fs.create_file(&path, false),
            Err(FsError::AlreadyExists(_))
        ));
        fs.create_file(&path, true).unwrap();
        assert_eq!(fs.read_file(&path).unwrap(), "");
    }

    #[test]
    fn test_remove_non_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let fs = DiskFs::new();
        let dir = tmp.path().join("full");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("inner"), "x").unwrap();

        assert!(matches!(fs.remove_directory(&dir), Err(FsError::NotEmpty(_))));
        assert!(fs.exists(&dir.join("inner")));
    }

    #[test]
    fn test_stat_kinds() {
        let tmp = TempDir::new().unwrap();
        let fs = DiskFs::new();
        std::fs::write(tmp.path().join("f"), "").unwrap();

        assert_eq!(fs.stat(tmp.path()).unwrap().kind, EntryKind::Directory);
        assert_eq!(fs.stat(&tmp.path().join("f")).unwrap().kind, EntryKind::File);
        assert!(!fs.exists(&tmp.path().join("g")));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolves_to_file_follows_symlinks() {
        let tmp = TempDir::new().unwrap();
        let fs = DiskFs::new();
        std::fs::write(tmp.path().join("f"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("f"), tmp.path().join("l")).unwrap();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("d")).unwrap();

        assert_eq!(fs.stat(&tmp.path().join("l")).unwrap().kind, EntryKind::Other);
        assert!(fs.resolves_to_file(&tmp.path().join("l")));
        assert!(!fs.resolves_to_file(&tmp.path().join("d")));
    }
}
