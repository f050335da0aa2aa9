mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::path::Path;

use crate::error::TreeResult;
use crate::models::FsEntry;

/// Filesystem capability consumed by the walk. Both calls follow symlinks.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn stat(&self, path: &Path) -> TreeResult<FsEntry>;

    /// Lists the immediate children of `dir`, each one stat'ed. The
    /// directory handle is released before this returns.
    async fn read_dir(&self, dir: &Path) -> TreeResult<Vec<FsEntry>>;
}

pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}
