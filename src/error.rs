use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    /// Stat or listing failed for the root or one of its descendants.
    #[error("cannot access {}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write tree output")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub fn access(path: &Path, source: io::Error) -> Self {
        Self::Access {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Access { source, .. } | Self::Output(source) => source.kind(),
        }
    }
}
