use std::{
    fs::Metadata,
    path::{Path, PathBuf},
    time::SystemTime,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub full_path: PathBuf,
    /// File name
    pub name: String,
    /// Lowercase extension without dot e.g., 'pdf'
    pub ext: Option<String>,
    /// File creation time (unsupported by many Linux filesystems)
    pub created: Option<SystemTime>,
    /// File last modified time
    pub modified: Option<SystemTime>,
    /// File last accessed time (may be unavailable on some platforms/mount options)
    pub accessed: Option<SystemTime>,
}

impl FileRecord {
    pub fn from_metadata(full_path: PathBuf, metadata: &Metadata) -> Self {
        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = extension_of(&full_path);

        Self {
            name,
            ext,
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
            accessed: metadata.accessed().ok(),
            full_path,
        }
    }

    /// Timestamps in report column order: created, modified, accessed.
    pub fn timestamps(&self) -> [Option<SystemTime>; 3] {
        [self.created, self.modified, self.accessed]
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|os| os.to_string_lossy().to_lowercase())
}
