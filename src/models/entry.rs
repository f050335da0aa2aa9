use std::ffi::OsStr;
use std::path::PathBuf;

/// Kind of an entry. `Symlink` only comes out of directory listings;
/// `stat` follows links and reports the target as a directory or file.
/// Anything that is neither a directory nor a link counts as a file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Byte count; only meaningful for files.
    pub size: u64,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Raw bytes of the file name, so names that are not valid UTF-8 still
    /// order by their bytes rather than by the lossy display name.
    pub fn sort_key(&self) -> &[u8] {
        self.path
            .file_name()
            .map_or(self.name.as_bytes(), OsStr::as_encoded_bytes)
    }
}
