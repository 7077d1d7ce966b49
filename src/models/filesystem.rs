use chrono::{DateTime, Local};

// =============================================================================
// Entry Kind
// =============================================================================

/// What a directory entry is, as reported without following symlinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, devices. Never listed, but still completable.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    pub fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

// =============================================================================
// Directory Entry
// =============================================================================

/// Result of `stat` on a single item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStat {
    pub kind: EntryKind,
}

/// Directory entry returned by a listing.
#[derive(Clone, Debug, PartialEq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Birth time, or modification time where the platform has none.
    pub created_at: Option<DateTime<Local>>,
}
