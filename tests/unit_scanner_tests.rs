//! # Scanner Module Unit Tests / Scanner 模块单元测试
//!
//! Drives `visit_files` with a recording visitor to check which files become
//! fixture pairs and how outcomes fold into the run status.
//!
//! 使用记录型访问器驱动 `visit_files`，检查哪些文件成为夹具对，
//! 以及结果如何汇总为运行状态。

mod common;

use common::fixture_dir;
use fixture_runner::core::{PairVisitor, PatternSet, visit_files};
use fixture_runner::models::{
    Config, FailureReason, FixturePair, PairOutcome, RunStatus,
};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Records every pair it sees and fails the inputs listed in `fail`.
#[derive(Default)]
struct RecordingVisitor {
    seen: Vec<FixturePair>,
    fail: Vec<&'static str>,
}

impl PairVisitor for RecordingVisitor {
    async fn visit(&mut self, pair: &FixturePair) -> PairOutcome {
        self.seen.push(pair.clone());
        if self.fail.contains(&pair.input_name().as_str()) {
            PairOutcome::failed(FailureReason::Mismatch, "recorded failure")
        } else {
            PairOutcome::Passed
        }
    }
}

fn config(dir: &Path, patterns: PatternSet) -> Config {
    Config::new(
        dir.to_path_buf(),
        "cat".to_string(),
        patterns,
        Duration::from_secs(5),
    )
}

fn seen_names(visitor: &RecordingVisitor) -> Vec<(String, String)> {
    let mut names: Vec<_> = visitor
        .seen
        .iter()
        .map(|pair| (pair.input_name(), pair.output_name()))
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_only_matching_files_are_visited() {
    let dir = fixture_dir(&[
        ("a.in", b""),
        ("a.out", b""),
        ("b.in", b""),
        ("notes.md", b""),
        ("a.out.err", b""),
    ]);
    let config = config(dir.path(), PatternSet::default());
    let mut visitor = RecordingVisitor::default();

    let report = visit_files(&config, &mut visitor).await.unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(
        seen_names(&visitor),
        vec![
            ("a.in".to_string(), "a.out".to_string()),
            ("b.in".to_string(), "b.out".to_string()),
        ]
    );
    assert_eq!(report.status(), RunStatus::Success);
}

#[tokio::test]
async fn test_output_path_lives_in_fixture_directory() {
    let dir = fixture_dir(&[("x.in", b"")]);
    let config = config(dir.path(), PatternSet::default());
    let mut visitor = RecordingVisitor::default();

    visit_files(&config, &mut visitor).await.unwrap();

    let pair = &visitor.seen[0];
    assert_eq!(pair.input, dir.path().join("x.in"));
    assert_eq!(pair.output, dir.path().join("x.out"));
    assert_eq!(pair.error_path(), dir.path().join("x.out.err"));
}

#[tokio::test]
async fn test_subdirectories_are_not_scanned() {
    let dir = fixture_dir(&[]);
    fs::create_dir(dir.path().join("deep.in")).unwrap();
    fs::write(dir.path().join("deep.in").join("c.in"), b"").unwrap();
    let config = config(dir.path(), PatternSet::default());
    let mut visitor = RecordingVisitor::default();

    let report = visit_files(&config, &mut visitor).await.unwrap();

    assert!(report.is_empty());
    assert!(visitor.seen.is_empty());
    assert_eq!(report.status(), RunStatus::NoTests);
    assert_eq!(report.status().exit_code(), 3);
}

#[tokio::test]
async fn test_any_failure_fails_the_run_but_all_pairs_are_visited() {
    let dir = fixture_dir(&[("a.in", b""), ("b.in", b""), ("c.in", b"")]);
    let config = config(dir.path(), PatternSet::default());
    let mut visitor = RecordingVisitor {
        fail: vec!["b.in"],
        ..Default::default()
    };

    let report = visit_files(&config, &mut visitor).await.unwrap();

    assert_eq!(visitor.seen.len(), 3);
    assert!(!report.all_succeeded());
    assert_eq!(report.count(PairOutcome::is_failure), 1);
    assert_eq!(report.status(), RunStatus::Failed);
    assert_eq!(report.status().exit_code(), 1);
}

#[tokio::test]
async fn test_custom_pattern_set_is_exclusive() {
    let dir = fixture_dir(&[("a.in", b""), ("t1.q", b"")]);
    let patterns = PatternSet::parse_override(r"\.q$:.a").unwrap();
    let config = config(dir.path(), patterns);
    let mut visitor = RecordingVisitor::default();

    visit_files(&config, &mut visitor).await.unwrap();

    assert_eq!(
        seen_names(&visitor),
        vec![("t1.q".to_string(), "t1.a".to_string())]
    );
}

#[tokio::test]
async fn test_missing_directory_is_an_error() {
    fixture_runner::init_locale("en");
    let dir = fixture_dir(&[]);
    let config = config(&dir.path().join("gone"), PatternSet::default());
    let mut visitor = RecordingVisitor::default();

    let err = visit_files(&config, &mut visitor).await.unwrap_err();

    assert!(err.to_string().contains("is not a directory"));
    assert!(visitor.seen.is_empty());
}
