use super::*;

use std::fs::{create_dir, create_dir_all, write};

fn collect(root: &Path) -> (Vec<FileRecord>, WalkStats) {
    let mut records = Vec::new();
    let stats = walk_files(root, |rec| records.push(rec));
    (records, stats)
}

fn names(records: &[FileRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn walk_empty_dir_yields_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let (records, stats) = collect(tmp.path());

    assert!(records.is_empty());
    assert_eq!(stats.dirs, 1);
    assert_eq!(stats.files, 0);
    assert!(stats.skipped.is_empty());
}

#[test]
fn walk_recurses_depth_first_in_name_order() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    create_dir_all(root.join("b/inner")).expect("mkdir b/inner");
    create_dir(root.join("a")).expect("mkdir a");
    write(root.join("z.txt"), b"z").expect("write z");
    write(root.join("a/one.txt"), b"1").expect("write one");
    write(root.join("b/two.md"), b"2").expect("write two");
    write(root.join("b/inner/three.log"), b"3").expect("write three");

    let (records, stats) = collect(root);

    assert_eq!(
        names(&records),
        vec!["z.txt", "one.txt", "two.md", "three.log"]
    );
    assert_eq!(stats.dirs, 4);
    assert_eq!(stats.files, 4);
    assert_eq!(records[3].full_path, root.join("b/inner/three.log"));
    assert_eq!(records[3].ext.as_deref(), Some("log"));
}

#[test]
fn directories_are_not_reported_as_files() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    create_dir(tmp.path().join("empty.txt")).expect("mkdir");

    let (records, stats) = collect(tmp.path());

    assert!(records.is_empty());
    assert_eq!(stats.dirs, 2);
}

#[test]
fn missing_root_is_skipped_not_fatal() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("gone");

    let (records, stats) = collect(&missing);

    assert!(records.is_empty());
    assert_eq!(stats.dirs, 0);
    assert_eq!(stats.skipped.len(), 1);
    assert_eq!(stats.skipped[0].path, missing);
}

#[cfg(unix)]
#[test]
fn broken_symlink_is_skipped_and_walk_continues() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("kept.txt"), b"k").expect("write");
    std::os::unix::fs::symlink(root.join("nowhere"), root.join("dangling.txt"))
        .expect("symlink");

    let (records, stats) = collect(root);

    assert_eq!(names(&records), vec!["kept.txt"]);
    assert_eq!(stats.skipped.len(), 1);
    assert_eq!(stats.skipped[0].path, root.join("dangling.txt"));
}

#[cfg(unix)]
#[test]
fn symlinks_follow_files_but_not_directories() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    create_dir(root.join("real")).expect("mkdir");
    write(root.join("real/target.txt"), b"t").expect("write");
    std::os::unix::fs::symlink(root.join("real"), root.join("linked_dir")).expect("symlink dir");
    std::os::unix::fs::symlink(root.join("real/target.txt"), root.join("alias.txt"))
        .expect("symlink file");

    let (records, stats) = collect(root);

    assert_eq!(names(&records), vec!["alias.txt", "target.txt"]);
    assert!(stats.skipped.is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    let locked = root.join("locked");

    create_dir(&locked).expect("mkdir");
    write(locked.join("hidden.txt"), b"h").expect("write");
    write(root.join("open.txt"), b"o").expect("write");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Privileged users read the directory anyway
    if read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");
        return;
    }

    let (records, stats) = collect(root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");

    assert_eq!(names(&records), vec!["open.txt"]);
    assert_eq!(stats.skipped.len(), 1);
    assert_eq!(stats.skipped[0].path, locked);
}
