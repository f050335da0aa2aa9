use async_trait::async_trait;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{TreeError, TreeResult};
use crate::models::{EntryKind, FsEntry};

use super::{FileSystem, base_name};

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn stat(&self, path: &Path) -> TreeResult<FsEntry> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|err| TreeError::access(path, err))?;
        Ok(to_entry(path.to_path_buf(), base_name(path), &metadata))
    }

    async fn read_dir(&self, dir: &Path) -> TreeResult<Vec<FsEntry>> {
        let owned = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            let listing =
                std::fs::read_dir(&owned).map_err(|err| TreeError::access(&owned, err))?;
            for entry in listing {
                let entry = entry.map_err(|err| TreeError::access(&owned, err))?;
                let path = entry.path();
                // DirEntry::metadata does not traverse symlinks.
                let metadata = entry
                    .metadata()
                    .map_err(|err| TreeError::access(&path, err))?;
                let name = entry.file_name().to_string_lossy().into_owned();
                entries.push(to_entry(path, name, &metadata));
            }
            Ok(entries)
        })
        .await
        .map_err(|err| TreeError::access(dir, err.into()))?
    }
}

fn to_entry(path: PathBuf, name: String, metadata: &Metadata) -> FsEntry {
    let file_type = metadata.file_type();
    let kind = if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    FsEntry {
        path,
        name,
        kind,
        size: metadata.len(),
    }
}
