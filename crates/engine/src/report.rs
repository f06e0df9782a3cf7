use std::{
    fs::OpenOptions,
    io::{self, Read, Seek, SeekFrom, Write},
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Local};
use datefind_fs::FileRecord;
use datefind_runtime::{
    HEADER_TIME_FORMAT, LIST_SORTED_FILE_NAME, RECORD_TIME_FORMAT, TABLE_FILE_NAME,
    TABLE_SORTED_FILE_NAME,
};

/// Written between an existing report and the block appended to it.
const BLOCK_SEPARATOR: &str = "\n\n";
const COLUMN_SEPARATOR: &str = " | ";
const MISSING_TIME: &str = "-";
/// Width of a rendered `RECORD_TIME_FORMAT` timestamp
const TIME_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// `founded_table.txt`, rows in walk order
    Table,
    /// `founded_list_sorted.txt`, one path per line
    ListSorted,
    /// `founded_table_sorted.txt`
    TableSorted,
}

impl ReportKind {
    /// Reports produced by one run, in write order.
    pub fn for_run(sort: bool) -> &'static [ReportKind] {
        if sort {
            &[
                ReportKind::Table,
                ReportKind::ListSorted,
                ReportKind::TableSorted,
            ]
        } else {
            &[ReportKind::Table]
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Table => TABLE_FILE_NAME,
            ReportKind::ListSorted => LIST_SORTED_FILE_NAME,
            ReportKind::TableSorted => TABLE_SORTED_FILE_NAME,
        }
    }

    pub fn is_sorted(self) -> bool {
        !matches!(self, ReportKind::Table)
    }

    fn is_table(self) -> bool {
        !matches!(self, ReportKind::ListSorted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// When the run started
    pub started_at: DateTime<Local>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl BlockHeader {
    fn render_into(&self, out: &mut String) {
        out.push_str(&format!(
            "script started at: {}\n",
            self.started_at.format(HEADER_TIME_FORMAT)
        ));
        out.push_str(&format!("start date: {}\n", self.start.format(HEADER_TIME_FORMAT)));
        out.push_str(&format!("end date: {}\n", self.end.format(HEADER_TIME_FORMAT)));
        out.push('\n');
    }
}

/// One run's contribution to one report file.
#[derive(Debug)]
pub struct ReportBlock<'a> {
    pub kind: ReportKind,
    pub header: BlockHeader,
    pub records: Vec<&'a FileRecord>,
}

impl<'a> ReportBlock<'a> {
    /// Sorted kinds order the records by full path, as printed.
    pub fn new(kind: ReportKind, header: BlockHeader, records: &'a [FileRecord]) -> Self {
        let mut records: Vec<&FileRecord> = records.iter().collect();
        if kind.is_sorted() {
            records.sort_by(|a, b| a.full_path.as_os_str().cmp(b.full_path.as_os_str()));
        }

        Self {
            kind,
            header,
            records,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.header.render_into(&mut out);

        if self.kind.is_table() {
            self.render_table(&mut out);
        } else {
            for rec in &self.records {
                out.push_str(&rec.full_path.display().to_string());
                out.push('\n');
            }
        }

        out
    }

    fn render_table(&self, out: &mut String) {
        let paths: Vec<String> = self
            .records
            .iter()
            .map(|r| r.full_path.display().to_string())
            .collect();
        let width = paths
            .iter()
            .map(|p| p.chars().count())
            .chain(std::iter::once("file".len()))
            .max()
            .unwrap_or_default();

        let title = table_row(width, "file", ["created", "modified", "accessed"]);
        let rule = "-".repeat(title.chars().count());
        out.push_str(&title);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for (path, rec) in paths.iter().zip(&self.records) {
            let [created, modified, accessed] = rec.timestamps().map(format_time);
            let times = [created.as_str(), modified.as_str(), accessed.as_str()];
            out.push_str(&table_row(width, path, times));
            out.push('\n');
        }
    }
}

fn table_row(width: usize, path: &str, times: [&str; 3]) -> String {
    format!(
        "{path:<width$}{sep}{:<tw$}{sep}{:<tw$}{sep}{}",
        times[0],
        times[1],
        times[2],
        sep = COLUMN_SEPARATOR,
        tw = TIME_WIDTH,
    )
}

/// Unavailable times, and times before the epoch or beyond chrono's range,
/// render as `-`.
fn format_time(t: Option<SystemTime>) -> String {
    t.and_then(to_local)
        .map(|t| t.format(RECORD_TIME_FORMAT).to_string())
        .unwrap_or_else(|| MISSING_TIME.to_owned())
}

fn to_local(t: SystemTime) -> Option<DateTime<Local>> {
    let since_epoch = t.duration_since(UNIX_EPOCH).ok()?;
    let secs = i64::try_from(since_epoch.as_secs()).ok()?;
    DateTime::from_timestamp(secs, since_epoch.subsec_nanos()).map(|t| t.with_timezone(&Local))
}

/// Append `rendered` to the report at `path`, creating it when missing.
/// Existing content is never rewritten; a non-empty file gets two blank
/// lines before the new block, whether or not it ended in a newline.
pub fn append_block(path: &Path, rendered: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(path)?;

    let mut buf = String::with_capacity(BLOCK_SEPARATOR.len() + 1 + rendered.len());
    if file.metadata()?.len() > 0 {
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            buf.push('\n');
        }
        buf.push_str(BLOCK_SEPARATOR);
    }
    buf.push_str(rendered);

    file.write_all(buf.as_bytes())?;
    file.flush()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
