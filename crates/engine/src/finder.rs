use std::path::PathBuf;

use chrono::{DateTime, Local};
use datefind_fs::{FileRecord, walk_files};
use datefind_runtime::REPORT_FILE_NAMES;
use log::{debug, info};
use serde::Serialize;

use crate::{
    criteria::{SearchCriteria, SearchOptions},
    error::FindError,
    report::{BlockHeader, ReportBlock, ReportKind, append_block},
};

/// Outcome of one [`FilesFinder::find_files`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindSummary {
    pub files_found: usize,
    /// Entries left out because their metadata could not be read
    pub skipped: usize,
    pub output_dir: PathBuf,
    /// Report files appended to, in write order
    pub reports: Vec<PathBuf>,
}

/// Finds files whose timestamps fall in a date range and appends a report
/// block for them to the output directory.
///
/// ```no_run
/// use datefind_engine::{FilesFinder, SearchOptions};
///
/// let finder = FilesFinder::new(
///     SearchOptions::new()
///         .root("/home/user/Documents")
///         .start_date("2022-01-14 10:00:00")
///         .end_date("2022-01-15 16:36:59")
///         .include_time(true)
///         .output_info_to("/home/user/Notes")
///         .extensions(["TXT", ".md"])
///         .sort_info(true),
/// )?;
/// let summary = finder.find_files()?;
/// println!("Files found: {}", summary.files_found);
/// # Ok::<(), datefind_engine::FindError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilesFinder {
    criteria: SearchCriteria,
}

impl FilesFinder {
    /// Resolves `options` once; date and path errors surface here.
    pub fn new(options: SearchOptions) -> Result<Self, FindError> {
        let criteria = SearchCriteria::resolve(options, Local::now())?;
        Ok(Self { criteria })
    }

    pub fn with_criteria(criteria: SearchCriteria) -> Self {
        Self { criteria }
    }

    pub fn find_files(&self) -> Result<FindSummary, FindError> {
        self.find_files_at(Local::now())
    }

    /// Same as [`find_files`](Self::find_files), with the run's start
    /// time given by the caller.
    pub fn find_files_at(&self, started_at: DateTime<Local>) -> Result<FindSummary, FindError> {
        let criteria = &self.criteria;
        let own_reports: Vec<PathBuf> = REPORT_FILE_NAMES
            .iter()
            .map(|name| criteria.output_dir.join(name))
            .collect();

        let mut found: Vec<FileRecord> = Vec::new();
        let stats = walk_files(&criteria.root, |record| {
            if own_reports.contains(&record.full_path) {
                debug!("[find] not reporting own report {:?}", record.full_path);
                return;
            }
            if criteria.matches(&record) {
                found.push(record);
            }
        });

        info!(
            "[find] {} of {} files matched under {:?}, {} skipped",
            found.len(),
            stats.files,
            criteria.root,
            stats.skipped.len()
        );

        let header = BlockHeader {
            started_at,
            start: criteria.range.start,
            end: criteria.range.end,
        };

        // Render everything before touching any report file
        let blocks: Vec<(PathBuf, String)> = ReportKind::for_run(criteria.sort)
            .iter()
            .map(|&kind| {
                let path = criteria.output_dir.join(kind.file_name());
                (path, ReportBlock::new(kind, header, &found).render())
            })
            .collect();

        for (path, rendered) in &blocks {
            append_block(path, rendered).map_err(|source| FindError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            debug!("[find] appended block to {:?}", path);
        }

        Ok(FindSummary {
            files_found: found.len(),
            skipped: stats.skipped.len(),
            output_dir: criteria.output_dir.clone(),
            reports: blocks.into_iter().map(|(path, _)| path).collect(),
        })
    }
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
