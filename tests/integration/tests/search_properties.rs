//! End-to-end properties of the search pipeline
//!
//! Each test builds a small tree on disk, runs a full search and checks the
//! reported matches against what the files actually contain.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use term_core::{Match, SearchRequest, dotted_extension, search};

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(root, "README.md", "# Project\nSee DEBUG notes.\n");
    write(root, "src/main.go", "package main\n\n// debug helper\nfunc main() {}\n");
    write(root, "src/util.go", "package main\nvar Debug = false\n");
    write(root, "config/app.json", "{\n  \"debug\": true,\n  \"name\": \"app\"\n}\n");
    write(root, "config/.env", "DEBUG=1\n");
    write(root, "logs/empty.log", "");
    write(root, "notes.txt", "no match here\r\nnone here either");

    dir
}

fn run(request: &SearchRequest) -> Vec<Match> {
    search(request)
        .unwrap()
        .map(|result| result.unwrap())
        .collect()
}

/// Brute-force oracle: every (file, line) pair whose line contains the term.
fn expected_matches(request: &SearchRequest, files: &[PathBuf]) -> Vec<(PathBuf, u64)> {
    let needle = if request.case_insensitive {
        request.term.to_lowercase()
    } else {
        request.term.clone()
    };

    let mut expected = Vec::new();
    for file in files {
        if !request.accepts(file) {
            continue;
        }
        let content = fs::read_to_string(file).unwrap();
        for (idx, line) in content.lines().enumerate() {
            let line = if request.case_insensitive {
                line.to_lowercase()
            } else {
                line.to_string()
            };
            if line.contains(&needle) {
                expected.push((file.clone(), idx as u64 + 1));
            }
        }
    }
    expected
}

fn all_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}

#[rstest]
#[case::sensitive("debug", false, "")]
#[case::insensitive("DEBUG", true, "")]
#[case::sensitive_go_only("debug", false, ".go")]
#[case::insensitive_json_only("Debug", true, ".json")]
#[case::absent_term("zzz", false, "")]
fn test_reported_matches_are_exactly_the_containing_lines(
    #[case] term: &str,
    #[case] icase: bool,
    #[case] ext: &str,
) {
    let dir = sample_tree();
    let request = SearchRequest::new(dir.path(), term)
        .case_insensitive(icase)
        .extension(ext);

    let mut found: Vec<_> = run(&request)
        .into_iter()
        .map(|m| (m.path, m.line_number))
        .collect();
    let mut expected = expected_matches(&request, &all_files(dir.path()));

    found.sort();
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_extension_filter_never_reports_other_extensions() {
    let dir = sample_tree();
    let request = SearchRequest::new(dir.path(), "e").extension(".go");

    let found = run(&request);

    assert!(!found.is_empty());
    for m in &found {
        assert_eq!(dotted_extension(&m.path), Some(".go"));
    }
}

#[test]
fn test_case_fold_matches_all_spellings() {
    let dir = sample_tree();
    let request = SearchRequest::new(dir.path(), "DEBUG").case_insensitive(true);

    let relative: Vec<_> = run(&request)
        .into_iter()
        .map(|m| {
            let rel = m.path.strip_prefix(dir.path()).unwrap().to_path_buf();
            (rel, m.line_number)
        })
        .collect();

    assert_eq!(
        relative,
        vec![
            (PathBuf::from("README.md"), 2),
            (PathBuf::from("config/.env"), 1),
            (PathBuf::from("config/app.json"), 2),
            (PathBuf::from("src/main.go"), 3),
            (PathBuf::from("src/util.go"), 2),
        ]
    );
}

#[test]
fn test_match_on_last_line_reports_line_count() {
    let dir = TempDir::new().unwrap();
    let content: String = (1..=99).map(|n| format!("line {n}\n")).collect::<String>() + "last";
    write(dir.path(), "long.txt", &content);

    let found = run(&SearchRequest::new(dir.path(), "last"));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line_number, 100);
}

#[test]
fn test_line_numbers_increase_within_each_file() {
    let dir = sample_tree();
    let found = run(&SearchRequest::new(dir.path(), "a"));

    for pair in found.windows(2) {
        if pair[0].path == pair[1].path {
            assert!(pair[0].line_number < pair[1].line_number);
        }
    }
}

#[cfg(unix)]
#[test]
fn test_link_to_ancestor_terminates() {
    use std::os::unix::fs::symlink;

    let dir = sample_tree();
    symlink(dir.path(), dir.path().join("src").join("root")).unwrap();
    symlink(dir.path().join("src"), dir.path().join("logs").join("src")).unwrap();

    let found = run(&SearchRequest::new(dir.path(), "package"));

    assert_eq!(found.len(), 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = sample_tree();
    let request = SearchRequest::new(dir.path(), "e").case_insensitive(true);

    let first = run(&request);
    let second = run(&request);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
