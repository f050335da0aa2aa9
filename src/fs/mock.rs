use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{TreeError, TreeResult};
use crate::models::{EntryKind, FsEntry};

use super::{FileSystem, base_name};

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Response>,
    stats: HashMap<PathBuf, FsEntry>,
    calls: Vec<PathBuf>,
}

impl Inner {
    fn register_dir(&mut self, dir: &Path) {
        self.stats
            .entry(dir.to_path_buf())
            .or_insert_with(|| FsEntry {
                path: dir.to_path_buf(),
                name: base_name(dir),
                kind: EntryKind::Directory,
                size: 0,
            });
    }
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.register_dir(&dir);
        // Links only stat once a target is registered with `set_stat`.
        for entry in entries.iter().filter(|e| e.kind != EntryKind::Symlink) {
            inner.stats.insert(entry.path.clone(), entry.clone());
        }
        inner.listings.insert(dir, Response::Ok(entries));
    }

    /// Sets what `stat` reports for `path`, e.g. the target of a symlink.
    pub fn set_stat(&self, path: impl Into<PathBuf>, kind: EntryKind, size: u64) {
        let path = path.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.stats.insert(
            path.clone(),
            FsEntry {
                name: base_name(&path),
                path,
                kind,
                size,
            },
        );
    }

    /// Makes listing `dir` fail. `dir` still stats as a directory.
    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind, message: &str) {
        let dir = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.register_dir(&dir);
        inner
            .listings
            .insert(dir, Response::Err(kind, message.to_owned()));
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn stat(&self, path: &Path) -> TreeResult<FsEntry> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.stats.get(path).cloned().ok_or_else(|| {
            TreeError::access(path, io::Error::new(io::ErrorKind::NotFound, "no such entry"))
        })
    }

    async fn read_dir(&self, dir: &Path) -> TreeResult<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(kind, message)) => {
                Err(TreeError::access(dir, io::Error::new(*kind, message.clone())))
            }
            None => Err(TreeError::access(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "no mock listing"),
            )),
        }
    }
}
