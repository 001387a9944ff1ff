#![allow(dead_code)]

use pleasenocheck::cli::process_tree;
use pleasenocheck::summary::RunSummary;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Copies every file under `source` into `dest`, keeping the layout.
pub fn copy_tree(source: &Path, dest: &Path) {
    for entry in WalkDir::new(source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(source).unwrap();
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Prints files that differ between the actual and expected trees.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for entry in WalkDir::new(expected)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let rel = entry.path().strip_prefix(expected).unwrap();
        let want = fs::read(entry.path()).unwrap();
        match fs::read(actual.join(rel)) {
            Ok(got) if got == want => {}
            Ok(got) => {
                println!("\n  File: {:?}", rel);
                println!("  --- Actual content:\n{}", String::from_utf8_lossy(&got));
                println!("  --- Expected content:\n{}", String::from_utf8_lossy(&want));
            }
            Err(e) => println!("  - {:?} missing from actual output: {e}", rel),
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing a diff if not.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Copies `fixture/input` into a scratch directory, runs over it and compares
/// the result with `fixture/expected`.
pub fn run_and_assert(fixture: &str) -> (TempDir, RunSummary) {
    let fixture = Path::new(fixture);
    let tmp_dir = tempfile::tempdir().unwrap();
    copy_tree(&fixture.join("input"), tmp_dir.path());

    let summary = process_tree(tmp_dir.path()).unwrap();

    assert_same_tree(tmp_dir.path(), &fixture.join("expected"));
    (tmp_dir, summary)
}

/// Relative paths of the given files, as the summary prints them.
pub fn relative(summary_paths: &[std::path::PathBuf], root: &Path) -> Vec<String> {
    summary_paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

/// Whether opening `path` for writing fails. Root ignores permission bits.
pub fn write_is_denied(path: &Path) -> bool {
    fs::OpenOptions::new().write(true).open(path).is_err()
}

/// Whether listing `dir` fails. Root ignores permission bits.
pub fn listing_is_denied(dir: &Path) -> bool {
    fs::read_dir(dir).is_err()
}
