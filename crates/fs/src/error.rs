use std::{io, path::PathBuf};

use thiserror::Error;

/// Metadata of a single entry could not be read. The walk skips the entry
/// and carries on.
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", .path.display())]
pub struct FileAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
