mod config;
pub mod logging;

pub use config::{
    DATE_FORMAT, DATETIME_FORMAT, DEFAULT_LOOKBACK_DAYS, HEADER_TIME_FORMAT,
    LIST_SORTED_FILE_NAME, PROGRAM_NAME, RECORD_TIME_FORMAT, REPORT_FILE_NAMES, TABLE_FILE_NAME,
    TABLE_SORTED_FILE_NAME, default_scan_root,
};

pub use logging::init;
