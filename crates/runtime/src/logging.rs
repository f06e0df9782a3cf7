use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

enum LogTarget {
    Stderr,
    /// Collects formatted lines in memory
    #[cfg(test)]
    Buffer(std::sync::Mutex<Vec<String>>),
}

pub struct Logger {
    level: Level,
    target: LogTarget,
}

fn format_line(record: &Record<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!(
        "{} {:<5} [{}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record);
        match &self.target {
            LogTarget::Stderr => eprintln!("{line}"),
            #[cfg(test)]
            LogTarget::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }

    fn flush(&self) {}
}

fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

/// Install the stderr logger, level taken from `DATEFIND_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs the logger, later calls keep the
    // level chosen then so `max_level` cannot drift from it.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
