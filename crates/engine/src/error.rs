use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateField::Start => "start",
            DateField::End => "end",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Root,
    OutputDir,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PathRole::Root => "root",
            PathRole::OutputDir => "output directory",
        })
    }
}

/// Errors that abort a run. Per-file read failures are not among them,
/// see [`datefind_fs::FileAccessError`].
#[derive(Debug, Error)]
pub enum FindError {
    #[error("invalid {field} date {value:?}, expected {expected}")]
    InvalidDateFormat {
        field: DateField,
        value: String,
        expected: &'static str,
    },

    #[error("{role} {} does not exist or is not a directory", .path.display())]
    InvalidPath { role: PathRole, path: PathBuf },

    #[error("cannot write report {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
