use std::io;
use std::path::Path;

use log::debug;

use crate::error::{TreeError, TreeResult};
use crate::fs::FileSystem;
use crate::models::{DirTree, TreeNode};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// List plain files as well as directories. Directories only when false.
    pub include_files: bool,
}

/// Walk the directory tree rooted at `dir`.
///
/// The first stat or listing failure anywhere in the tree aborts the walk.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
) -> TreeResult<DirTree> {
    let root = fs.stat(dir).await?;
    if !root.is_dir() {
        return Err(TreeError::access(
            dir,
            io::Error::from(io::ErrorKind::NotADirectory),
        ));
    }

    let children = walk_dir_internal(fs, dir, options).await?;
    Ok(DirTree { children })
}

async fn walk_dir_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
) -> TreeResult<Vec<TreeNode>> {
    let mut entries = fs.read_dir(dir).await?;
    debug!("listed {} ({} entries)", dir.display(), entries.len());

    // Filtering uses the listing's own kind, so links are dropped in
    // directories-only mode without ever being followed.
    if !options.include_files {
        entries.retain(|entry| entry.is_dir());
    }

    // Stable, so equal names keep listing order.
    entries.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        let target = fs.stat(&entry.path).await?;
        let grandchildren = if target.is_dir() {
            Box::pin(walk_dir_internal(fs, &entry.path, options)).await?
        } else {
            Vec::new()
        };

        children.push(TreeNode {
            name: entry.name,
            kind: target.kind,
            size: target.size,
            children: grandchildren,
        });
    }

    Ok(children)
}
