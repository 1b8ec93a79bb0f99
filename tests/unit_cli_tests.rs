//! # CLI Module Unit Tests / CLI 模块单元测试
//!
//! Tests for the `--lang` pre-parse that runs before clap builds the CLI.
//!
//! 测试在 clap 构建 CLI 之前运行的 `--lang` 预解析。

use fixture_runner::cli::requested_language;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn test_separate_value_form() {
    assert_eq!(
        requested_language(args(&["fixture-runner", "--lang", "zh-CN", "test"])),
        Some("zh-CN".to_string())
    );
}

#[test]
fn test_equals_form() {
    assert_eq!(
        requested_language(args(&["fixture-runner", "test", "cat", ".", "--lang=en"])),
        Some("en".to_string())
    );
}

#[test]
fn test_last_occurrence_wins() {
    assert_eq!(
        requested_language(args(&["fixture-runner", "--lang=en", "--lang", "zh-CN"])),
        Some("zh-CN".to_string())
    );
}

#[test]
fn test_absent_or_dangling_flag() {
    assert_eq!(requested_language(args(&["fixture-runner", "test"])), None);
    assert_eq!(requested_language(args(&["fixture-runner", "--lang"])), None);
}
