use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "datefind";
pub const PROGRAM_LOG_LEVEL: &str = "DATEFIND_LOG_LEVEL";

/// Report written on every run.
pub const TABLE_FILE_NAME: &str = "founded_table.txt";
/// Report written only when sorting is enabled.
pub const LIST_SORTED_FILE_NAME: &str = "founded_list_sorted.txt";
/// Report written only when sorting is enabled.
pub const TABLE_SORTED_FILE_NAME: &str = "founded_table_sorted.txt";

/// Every file name the program may write into an output directory.
pub const REPORT_FILE_NAMES: &[&str] = &[
    TABLE_FILE_NAME,
    LIST_SORTED_FILE_NAME,
    TABLE_SORTED_FILE_NAME,
];

/// Input format for dates when time is not included
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Input format for dates when time is included
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the timestamps in report headers
pub const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// ctime-like format of the file timestamps in report rows, e.g. `Mon Jan 10 09:03:00 2022`
pub const RECORD_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// How far back the default start date lies.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// Default root for the program to start scanning: the working directory
pub fn default_scan_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
