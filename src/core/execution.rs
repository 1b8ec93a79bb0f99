//! # Fixture Execution Module / 夹具执行模块
//!
//! The two per-pair actions: checking a fixture against its expected output
//! (`FixtureTester`) and creating a missing expectation (`FixtureGenerator`).
//! Both catch every error at the pair boundary and report it as an outcome.
//!
//! 两种单对操作：将夹具与其预期输出进行比对（`FixtureTester`），
//! 以及生成缺失的预期文件（`FixtureGenerator`）。
//! 两者都会在单对边界捕获所有错误，并将其作为结果报告。

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::core::models::{Action, Config, FailureReason, FixturePair, PairOutcome};
use crate::core::scanner::PairVisitor;
use crate::infra::command::{self, CapturedOutput, ProcessOutcome};
use crate::infra::{fs, t};
use crate::reporting::console;

/// Compares the command output for each input with the expected-output bytes.
/// 将每个输入的命令输出与预期输出字节进行比较。
pub struct FixtureTester<'a> {
    config: &'a Config,
}

impl<'a> FixtureTester<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    async fn check(&self, pair: &FixturePair) -> Result<PairOutcome> {
        let input = read_bytes(&pair.input).await?;
        let expected = read_bytes(&pair.output).await?;

        let actual = match execute(self.config, &input).await? {
            Execution::Completed(captured) => captured.stdout,
            Execution::TimedOut(outcome) => return Ok(outcome),
        };

        let error_path = pair.error_path();
        if actual != expected {
            console::print_mismatch(&expected, &actual);
            tokio::fs::write(&error_path, &actual)
                .await
                .with_context(|| {
                    t!("error.write_file_failed", path = error_path.display()).to_string()
                })?;
            return Ok(PairOutcome::failed(
                FailureReason::Mismatch,
                t!("run.mismatch_message", path = error_path.display()),
            ));
        }

        fs::remove_if_exists(&error_path).await.with_context(|| {
            t!("error.remove_file_failed", path = error_path.display()).to_string()
        })?;
        console::print_pass();
        Ok(PairOutcome::Passed)
    }
}

impl PairVisitor for FixtureTester<'_> {
    async fn visit(&mut self, pair: &FixturePair) -> PairOutcome {
        console::print_pair_header(Action::Test, pair);
        self.check(pair).await.unwrap_or_else(into_failure)
    }
}

/// Writes the command output into every empty or missing expected-output file.
/// Files that already hold content are left untouched.
///
/// 将命令输出写入每个为空或缺失的预期输出文件。已有内容的文件保持不变。
pub struct FixtureGenerator<'a> {
    config: &'a Config,
}

impl<'a> FixtureGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    async fn generate(&self, pair: &FixturePair) -> Result<PairOutcome> {
        let input = read_bytes(&pair.input).await?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&pair.output)
            .await
            .with_context(|| t!("error.open_file_failed", path = pair.output.display()).to_string())?;
        let existing = file
            .metadata()
            .await
            .with_context(|| t!("error.open_file_failed", path = pair.output.display()).to_string())?
            .len();
        if existing > 0 {
            console::print_skipped(&pair.output);
            return Ok(PairOutcome::Skipped);
        }

        let actual = match execute(self.config, &input).await? {
            Execution::Completed(captured) => captured.stdout,
            Execution::TimedOut(outcome) => return Ok(outcome),
        };

        file.write_all(&actual).await.with_context(|| {
            t!("error.write_file_failed", path = pair.output.display()).to_string()
        })?;
        file.flush().await.with_context(|| {
            t!("error.write_file_failed", path = pair.output.display()).to_string()
        })?;

        console::print_generated(&pair.output);
        Ok(PairOutcome::Generated)
    }
}

impl PairVisitor for FixtureGenerator<'_> {
    async fn visit(&mut self, pair: &FixturePair) -> PairOutcome {
        console::print_pair_header(Action::Gen, pair);
        self.generate(pair).await.unwrap_or_else(into_failure)
    }
}

/// Result of one command run as seen by the visitors.
enum Execution {
    Completed(CapturedOutput),
    /// Already converted into the failed outcome to report.
    TimedOut(PairOutcome),
}

/// Tokenizes and runs the configured command with `input` on stdin, echoing
/// any stderr and a non-zero exit status.
async fn execute(config: &Config, input: &[u8]) -> Result<Execution> {
    let argv = command::split_command(&config.cmd)?;
    match command::run_with_input(&argv, &config.path, input, config.timeout).await? {
        ProcessOutcome::Completed(captured) => {
            console::print_stderr(&captured.stderr);
            if !captured.status.success() {
                console::print_exit_status(&captured.status);
            }
            Ok(Execution::Completed(captured))
        }
        ProcessOutcome::TimedOut(limit) => {
            console::print_timeout();
            Ok(Execution::TimedOut(PairOutcome::failed(
                FailureReason::Timeout,
                t!("run.timeout_message", seconds = limit.as_secs()),
            )))
        }
    }
}

async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| t!("error.read_file_failed", path = path.display()).to_string())
}

fn into_failure(error: anyhow::Error) -> PairOutcome {
    console::print_error(&error);
    PairOutcome::failed(FailureReason::Error, format!("{error:#}"))
}
