use std::{
    fs::{self, DirEntry, read_dir},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{error::FileAccessError, record::FileRecord};

#[derive(Debug, Default)]
pub struct WalkStats {
    /// Directories read, the root included
    pub dirs: usize,
    /// Files handed to the visitor
    pub files: usize,
    /// Entries whose metadata could not be read
    pub skipped: Vec<FileAccessError>,
}

impl WalkStats {
    fn skip(&mut self, err: FileAccessError) {
        warn!("[walk] skipping {err}");
        self.skipped.push(err);
    }
}

enum EntryKind {
    Dir(PathBuf),
    File(FileRecord),
    /// Sockets, fifos, devices and symlinks to directories
    Other,
}

/// Sequential depth-first walk over every file below `root`.
///
/// Entries of a directory are visited in name order, its files before its
/// subdirectories. Symlinks are never followed into directories; a symlink
/// to a file is reported with the target's metadata. An entry that cannot
/// be read is recorded in [`WalkStats::skipped`] and the walk continues.
pub fn walk_files(root: &Path, mut visit: impl FnMut(FileRecord)) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = match sorted_entries(&dir, &mut stats) {
            Ok(entries) => entries,
            Err(e) => {
                stats.skip(FileAccessError::new(&dir, e));
                continue;
            }
        };
        stats.dirs += 1;

        let mut subdirs = Vec::new();
        for entry in entries {
            match inspect_entry(&entry) {
                Ok(EntryKind::Dir(path)) => subdirs.push(path),
                Ok(EntryKind::File(record)) => {
                    stats.files += 1;
                    visit(record);
                }
                Ok(EntryKind::Other) => {
                    debug!("[walk] ignoring {:?}", entry.path());
                }
                Err(e) => stats.skip(e),
            }
        }

        // Reversed so the first subdirectory is popped first
        stack.extend(subdirs.into_iter().rev());
    }

    debug!(
        "[walk] {} dirs, {} files, {} skipped under {:?}",
        stats.dirs,
        stats.files,
        stats.skipped.len(),
        root
    );

    stats
}

fn sorted_entries(dir: &Path, stats: &mut WalkStats) -> std::io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry_res in read_dir(dir)? {
        match entry_res {
            Ok(entry) => entries.push(entry),
            Err(e) => stats.skip(FileAccessError::new(dir, e)),
        }
    }
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn inspect_entry(entry: &DirEntry) -> Result<EntryKind, FileAccessError> {
    let full_path = entry.path();
    let file_type = entry
        .file_type()
        .map_err(|e| FileAccessError::new(&full_path, e))?;

    if file_type.is_dir() {
        return Ok(EntryKind::Dir(full_path));
    }

    let metadata = if file_type.is_symlink() {
        fs::metadata(&full_path)
    } else {
        entry.metadata()
    }
    .map_err(|e| FileAccessError::new(&full_path, e))?;

    if metadata.is_file() {
        Ok(EntryKind::File(FileRecord::from_metadata(
            full_path, &metadata,
        )))
    } else {
        Ok(EntryKind::Other)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
