use super::*;

use std::{
    path::PathBuf,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use chrono::{Local, TimeZone};

fn at(y: i32, m: u32, d: u32) -> SystemTime {
    Local
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("valid local time")
        .into()
}

fn january_range() -> DateRange {
    let start = Local.with_ymd_and_hms(2022, 1, 9, 0, 0, 0).single().expect("start");
    let end = Local.with_ymd_and_hms(2022, 1, 13, 23, 59, 59).single().expect("end");
    DateRange::new(start, end)
}

fn record(
    created: Option<SystemTime>,
    modified: Option<SystemTime>,
    accessed: Option<SystemTime>,
) -> FileRecord {
    FileRecord {
        full_path: PathBuf::from("/data/a.txt"),
        name: "a.txt".into(),
        ext: Some("txt".into()),
        created,
        modified,
        accessed,
    }
}

#[test]
fn normalize_extension_strips_dot_and_case() {
    let cases: &[(&str, &str)] = &[
        ("txt", "txt"),
        (".TXT", "txt"),
        ("Txt", "txt"),
        (" .Md ", "md"),
        (".", ""),
        ("", ""),
        ("..gz", ".gz"),
    ];

    for (input, expected) in cases {
        assert_eq!(
            normalize_extension(input),
            *expected,
            "normalize_extension({input:?})"
        );
    }
}

#[test]
fn missing_or_empty_list_allows_everything() {
    let none: Option<Vec<&str>> = None;
    assert_eq!(ExtensionFilter::from_list(none), ExtensionFilter::All);
    assert_eq!(
        ExtensionFilter::from_list(Some(Vec::<String>::new())),
        ExtensionFilter::All
    );
    assert!(ExtensionFilter::All.allows(None));
    assert!(ExtensionFilter::All.allows(Some("exe")));
}

#[test]
fn extension_filter_is_case_and_dot_insensitive() {
    let a = ExtensionFilter::from_list(Some(["TXT", ".md"]));
    let b = ExtensionFilter::from_list(Some(["txt", "MD"]));
    assert_eq!(a, b);

    assert!(a.allows(Some("txt")));
    assert!(a.allows(Some("md")));
    assert!(!a.allows(Some("log")));
    assert!(!a.allows(None));
}

#[test]
fn empty_extension_selects_files_without_one() {
    let filter = ExtensionFilter::from_list(Some(["."]));
    assert!(filter.allows(None));
    assert!(!filter.allows(Some("txt")));
}

#[test]
fn range_bounds_are_inclusive() {
    let range = january_range();

    assert!(range.contains(range.start.into()));
    assert!(range.contains(range.end.into()));
    assert!(!range.contains(SystemTime::from(range.start) - Duration::from_secs(1)));
    assert!(!range.contains(SystemTime::from(range.end) + Duration::from_secs(1)));
}

#[test]
fn times_beyond_calendar_range_are_out_of_range() {
    let range = january_range();
    let far_future = UNIX_EPOCH + Duration::from_secs(10_000_000_000_000);

    assert!(!range.contains(far_future));

    let rec = record(None, Some(far_future), Some(at(2022, 1, 10)));
    assert!(MatchPolicy::Any.matches(&range, &rec));
    assert!(!MatchPolicy::Modified.matches(&range, &rec));
    assert!(!MatchPolicy::All.matches(&range, &rec));
}

#[test]
fn any_policy_needs_one_timestamp_in_range() {
    let range = january_range();
    let inside = at(2022, 1, 10);
    let outside = at(2021, 6, 1);

    let cases = [
        (record(Some(outside), Some(inside), Some(outside)), true),
        (record(Some(outside), Some(outside), Some(inside)), true),
        (record(None, Some(outside), Some(outside)), false),
        (record(None, None, None), false),
    ];

    for (rec, expected) in &cases {
        assert_eq!(MatchPolicy::Any.matches(&range, rec), *expected, "{rec:?}");
    }
}

#[test]
fn all_policy_needs_every_available_timestamp_in_range() {
    let range = january_range();
    let inside = at(2022, 1, 10);
    let outside = at(2021, 6, 1);

    let cases = [
        (record(Some(inside), Some(inside), Some(inside)), true),
        (record(None, Some(inside), Some(inside)), true),
        (record(Some(outside), Some(inside), Some(inside)), false),
        (record(None, None, None), false),
    ];

    for (rec, expected) in &cases {
        assert_eq!(MatchPolicy::All.matches(&range, rec), *expected, "{rec:?}");
    }
}

#[test]
fn single_field_policies_ignore_other_timestamps() {
    let range = january_range();
    let inside = at(2022, 1, 10);
    let old = UNIX_EPOCH + Duration::from_secs(1_000);

    let accessed_only = record(Some(old), Some(old), Some(inside));
    assert!(!MatchPolicy::Modified.matches(&range, &accessed_only));
    assert!(!MatchPolicy::Created.matches(&range, &accessed_only));
    assert!(MatchPolicy::Accessed.matches(&range, &accessed_only));

    let no_birth_time = record(None, Some(inside), Some(inside));
    assert!(!MatchPolicy::Created.matches(&range, &no_birth_time));
    assert!(MatchPolicy::Modified.matches(&range, &no_birth_time));
}

#[test]
fn match_policy_parses_names_and_aliases() {
    let cases: &[(&str, MatchPolicy)] = &[
        ("any", MatchPolicy::Any),
        ("ALL", MatchPolicy::All),
        ("created", MatchPolicy::Created),
        ("mtime", MatchPolicy::Modified),
        (" Accessed ", MatchPolicy::Accessed),
    ];

    for (input, expected) in cases {
        assert_eq!(input.parse::<MatchPolicy>(), Ok(*expected), "{input:?}");
    }

    let err = "newest".parse::<MatchPolicy>().unwrap_err();
    assert!(err.contains("newest"));
    assert!(err.contains("modified"));
}

#[test]
fn match_policy_display_round_trips_names() {
    for name in MatchPolicy::NAMES {
        let policy: MatchPolicy = name.parse().expect("known name");
        assert_eq!(policy.to_string(), *name);
    }
}
