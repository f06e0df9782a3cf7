use std::{fs, path::PathBuf, time::SystemTime};

use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use datefind_fs::FileRecord;
use datefind_runtime::{DATE_FORMAT, DATETIME_FORMAT, DEFAULT_LOOKBACK_DAYS, default_scan_root};
use log::{debug, warn};

use crate::{
    error::{DateField, FindError, PathRole},
    filter::{ExtensionFilter, MatchPolicy},
};

/// Raw configuration of a run. Every field is optional; the defaults are
/// filled in by [`SearchCriteria::resolve`].
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Defaults to the working directory
    pub root: Option<PathBuf>,
    /// `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` with `include_time`.
    /// Defaults to midnight seven days ago.
    pub start_date: Option<String>,
    /// Same format as `start_date`, defaults to now
    pub end_date: Option<String>,
    pub include_time: bool,
    /// Defaults to `root`
    pub output_info_to: Option<PathBuf>,
    /// Case-insensitive, leading dot optional. `None` matches everything.
    pub extensions: Option<Vec<String>>,
    /// Also write the sorted list and sorted table reports
    pub sort_info: bool,
    pub match_policy: MatchPolicy,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn include_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    pub fn output_info_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_info_to = Some(dir.into());
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort_info(mut self, sort_info: bool) -> Self {
        self.sort_info = sort_info;
        self
    }

    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}

/// Closed interval of local timestamps. `start <= end` is not enforced; an
/// inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl DateRange {
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self { start, end }
    }

    /// Compared as `SystemTime`, which holds file times chrono cannot represent.
    pub fn contains(&self, t: SystemTime) -> bool {
        SystemTime::from(self.start) <= t && t <= SystemTime::from(self.end)
    }
}

/// Fully resolved, immutable parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Canonical scan root
    pub root: PathBuf,
    pub range: DateRange,
    pub extensions: ExtensionFilter,
    /// Canonical directory receiving the reports
    pub output_dir: PathBuf,
    pub sort: bool,
    pub policy: MatchPolicy,
}

impl SearchCriteria {
    /// Resolve `options` against the clock reading `now`. Dates are checked
    /// before paths; nothing touches the filesystem beyond the two
    /// directory checks.
    pub fn resolve(options: SearchOptions, now: DateTime<Local>) -> Result<Self, FindError> {
        let range = resolve_range(&options, now)?;
        if range.start > range.end {
            warn!(
                "[criteria] start date {} is after end date {}, nothing can match",
                range.start, range.end
            );
        }

        let root = resolve_dir(
            options.root.unwrap_or_else(default_scan_root),
            PathRole::Root,
        )?;
        let output_dir = match options.output_info_to {
            Some(dir) => resolve_dir(dir, PathRole::OutputDir)?,
            None => root.clone(),
        };

        let extensions = ExtensionFilter::from_list(options.extensions);

        let criteria = Self {
            root,
            range,
            extensions,
            output_dir,
            sort: options.sort_info,
            policy: options.match_policy,
        };
        debug!("[criteria] resolved {:?}", criteria);

        Ok(criteria)
    }

    /// Whether `record` is a founded file under these criteria.
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.extensions.allows(record.ext.as_deref()) && self.policy.matches(&self.range, record)
    }
}

fn resolve_range(options: &SearchOptions, now: DateTime<Local>) -> Result<DateRange, FindError> {
    let include_time = options.include_time;

    let start = match options.start_date.as_deref() {
        Some(value) => {
            let naive = parse_date(value, DateField::Start, include_time)?;
            to_local(naive, DateField::Start)
                .ok_or_else(|| invalid_date(DateField::Start, value, include_time))?
        }
        None => {
            let lookback = now - Duration::days(DEFAULT_LOOKBACK_DAYS);
            to_local(lookback.date_naive().and_time(NaiveTime::MIN), DateField::Start)
                .unwrap_or(lookback)
        }
    };

    let end = match options.end_date.as_deref() {
        Some(value) => {
            let mut naive = parse_date(value, DateField::End, include_time)?;
            if !include_time {
                naive = naive.date().and_time(end_of_day());
            }
            to_local(naive, DateField::End)
                .ok_or_else(|| invalid_date(DateField::End, value, include_time))?
        }
        None if include_time => now,
        None => {
            to_local(now.date_naive().and_time(end_of_day()), DateField::End).unwrap_or(now)
        }
    };

    Ok(DateRange::new(start, end))
}

fn parse_date(
    value: &str,
    field: DateField,
    include_time: bool,
) -> Result<NaiveDateTime, FindError> {
    let trimmed = value.trim();
    let parsed = if include_time {
        NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
    } else {
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map(|d| d.and_time(NaiveTime::MIN))
    };

    parsed.map_err(|_| invalid_date(field, value, include_time))
}

fn invalid_date(field: DateField, value: &str, include_time: bool) -> FindError {
    FindError::InvalidDateFormat {
        field,
        value: value.to_owned(),
        expected: if include_time {
            "YYYY-MM-DD HH:MM:SS"
        } else {
            "YYYY-MM-DD"
        },
    }
}

/// Last representable instant of a day: 23:59:59.999999999
fn end_of_day() -> NaiveTime {
    NaiveTime::MIN - Duration::nanoseconds(1)
}

/// Ambiguous local times (DST fall-back) widen the range: earliest for a
/// start bound, latest for an end bound. Times inside a DST gap yield `None`.
fn to_local(naive: NaiveDateTime, field: DateField) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(t) => Some(t),
        LocalResult::Ambiguous(earliest, latest) => Some(match field {
            DateField::Start => earliest,
            DateField::End => latest,
        }),
        LocalResult::None => None,
    }
}

fn resolve_dir(path: PathBuf, role: PathRole) -> Result<PathBuf, FindError> {
    match fs::canonicalize(&path) {
        Ok(canonical) if canonical.is_dir() => Ok(canonical),
        _ => Err(FindError::InvalidPath { role, path }),
    }
}

#[cfg(test)]
#[path = "criteria_tests.rs"]
mod tests;
