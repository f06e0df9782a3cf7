use std::{collections::BTreeSet, fmt, str::FromStr};

use datefind_fs::FileRecord;

use crate::criteria::DateRange;

/// Allowed file extensions, normalized: lowercase, no leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtensionFilter {
    #[default]
    All,
    /// `""` in the set stands for files without an extension.
    Only(BTreeSet<String>),
}

impl ExtensionFilter {
    /// `None` and an empty list both mean every extension is allowed.
    pub fn from_list<I, S>(extensions: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(extensions) = extensions else {
            return ExtensionFilter::All;
        };

        let set: BTreeSet<String> = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();

        if set.is_empty() {
            ExtensionFilter::All
        } else {
            ExtensionFilter::Only(set)
        }
    }

    /// `ext` is expected lowercase without dot, as [`FileRecord::ext`] stores it.
    pub fn allows(&self, ext: Option<&str>) -> bool {
        match self {
            ExtensionFilter::All => true,
            ExtensionFilter::Only(set) => set.contains(ext.unwrap_or("")),
        }
    }
}

/// `".TXT"`, `"txt"` and `" Txt "` all normalize to `"txt"`.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

/// Which file timestamps have to fall inside the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// At least one of created, modified, accessed
    #[default]
    Any,
    /// Every timestamp the filesystem reports, and at least one
    All,
    Created,
    Modified,
    Accessed,
}

impl MatchPolicy {
    pub const NAMES: &'static [&'static str] = &["any", "all", "created", "modified", "accessed"];

    pub fn matches(self, range: &DateRange, record: &FileRecord) -> bool {
        let in_range = |t: Option<std::time::SystemTime>| t.is_some_and(|t| range.contains(t));

        match self {
            MatchPolicy::Any => record.timestamps().into_iter().any(in_range),
            MatchPolicy::All => {
                let mut available = record.timestamps().into_iter().flatten().peekable();
                available.peek().is_some() && available.all(|t| range.contains(t))
            }
            MatchPolicy::Created => in_range(record.created),
            MatchPolicy::Modified => in_range(record.modified),
            MatchPolicy::Accessed => in_range(record.accessed),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchPolicy::Any => "any",
            MatchPolicy::All => "all",
            MatchPolicy::Created => "created",
            MatchPolicy::Modified => "modified",
            MatchPolicy::Accessed => "accessed",
        })
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(MatchPolicy::Any),
            "all" => Ok(MatchPolicy::All),
            "created" | "ctime" => Ok(MatchPolicy::Created),
            "modified" | "mtime" => Ok(MatchPolicy::Modified),
            "accessed" | "atime" => Ok(MatchPolicy::Accessed),
            other => Err(format!(
                "unknown match policy {other:?}, expected one of: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
