//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the fixture runner:
//! the run configuration, discovered fixture pairs, per-pair outcomes and the
//! aggregated scan report.
//!
//! 此模块定义了整个夹具运行器中使用的核心数据结构：
//! 运行配置、发现的夹具对、单对结果以及汇总的扫描报告。

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::patterns::PatternSet;

/// Default per-invocation timeout in seconds.
/// 每次调用的默认超时时间（秒）。
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// The action selected on the command line, resolved once at parse time.
/// 命令行上选择的操作，在解析时一次性确定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Compare the command output against the expected-output files.
    /// 将命令输出与预期输出文件进行比较。
    Test,
    /// Populate missing or empty expected-output files.
    /// 填充缺失或为空的预期输出文件。
    Gen,
}

impl Action {
    /// The subcommand name for this action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Test => "test",
            Action::Gen => "gen",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable run configuration, built once from the command line and passed by reference.
/// 不可变的运行配置，从命令行一次性构建并按引用传递。
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the fixtures; also the child's working directory.
    /// 存放夹具的目录，同时也是子进程的工作目录。
    pub path: PathBuf,
    /// Command line executed for every fixture pair.
    /// 为每个夹具对执行的命令行。
    pub cmd: String,
    /// Active input -> output file name rules.
    /// 当前生效的输入 -> 输出文件名规则。
    pub patterns: PatternSet,
    /// Hard limit for one command invocation.
    /// 单次命令调用的硬性时间上限。
    pub timeout: Duration,
}

impl Config {
    pub fn new(path: PathBuf, cmd: String, patterns: PatternSet, timeout: Duration) -> Self {
        Self {
            path,
            cmd,
            patterns,
            timeout,
        }
    }
}

/// An (input file, expected-output file) pair discovered by pattern matching.
/// 通过模式匹配发现的（输入文件，预期输出文件）对。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FixturePair {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    /// Base name of the input file, for display.
    pub fn input_name(&self) -> String {
        base_name(&self.input)
    }

    /// Base name of the expected-output file, for display.
    pub fn output_name(&self) -> String {
        base_name(&self.output)
    }

    /// Path of the error-output sidecar: `<output>.err`.
    /// 错误输出附属文件的路径：`<output>.err`。
    pub fn error_path(&self) -> PathBuf {
        let mut name = self.output.clone().into_os_string();
        name.push(".err");
        PathBuf::from(name)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Enumerates the possible reasons for a fixture pair failure.
/// 枚举夹具对失败的可能原因。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureReason {
    /// The command output differs from the expected bytes.
    /// 命令输出与预期字节不同。
    Mismatch,
    /// The command exceeded the configured timeout and was killed.
    /// 命令超出了配置的超时时间并被终止。
    Timeout,
    /// File I/O, command parsing or process spawn failed.
    /// 文件 I/O、命令解析或进程启动失败。
    Error,
}

/// The result of visiting one fixture pair.
/// 访问单个夹具对的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// Actual output matched the expectation byte for byte.
    Passed,
    /// The expected-output file was written from the command's stdout.
    Generated,
    /// The expected-output file already had content; the command was not run.
    Skipped,
    Failed {
        reason: FailureReason,
        message: String,
    },
}

impl PairOutcome {
    pub fn failed(reason: FailureReason, message: impl Into<String>) -> Self {
        PairOutcome::Failed {
            reason,
            message: message.into(),
        }
    }

    /// Everything but `Failed` counts as success for the run status.
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PairOutcome::Failed { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            PairOutcome::Failed {
                reason: FailureReason::Timeout,
                ..
            }
        )
    }
}

/// One visited pair together with its outcome and the time it took.
#[derive(Debug, Clone)]
pub struct PairResult {
    pub pair: FixturePair,
    pub outcome: PairOutcome,
    pub duration: Duration,
}

/// Aggregated result of one directory scan.
/// 一次目录扫描的汇总结果。
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub results: Vec<PairResult>,
    pub duration: Duration,
}

impl ScanReport {
    /// Number of matched fixture pairs.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Logical AND of every visitor result.
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_success())
    }

    pub fn count(&self, predicate: impl Fn(&PairOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.outcome)).count()
    }

    /// Maps the report to the process exit status.
    /// 将报告映射为进程退出状态。
    pub fn status(&self) -> RunStatus {
        if self.is_empty() {
            RunStatus::NoTests
        } else if self.all_succeeded() {
            RunStatus::Success
        } else {
            RunStatus::Failed
        }
    }
}

/// Final status of a run, mapped one-to-one to the process exit code.
/// 运行的最终状态，与进程退出码一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every discovered pair passed or was generated.
    Success,
    /// At least one pair failed.
    Failed,
    /// No file in the directory matched any pattern.
    NoTests,
}

impl RunStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failed => 1,
            RunStatus::NoTests => 3,
        }
    }
}
