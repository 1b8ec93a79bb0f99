//! # Command Execution Module / 命令执行模块
//!
//! Runs the configured command for one fixture: tokenizes it with shell word
//! splitting, feeds the input bytes on stdin, captures stdout and stderr as raw
//! bytes and enforces a hard timeout.
//!
//! 为单个夹具运行配置的命令：按 shell 规则切分命令，将输入字节写入 stdin，
//! 以原始字节捕获 stdout 和 stderr，并强制执行硬性超时。

use anyhow::{Context, Result, anyhow};
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

use crate::infra::t;

/// Everything a finished child produced.
/// 已结束的子进程产生的全部内容。
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Recorded for diagnostics only; it never decides pass or fail.
    /// 仅用于诊断记录；从不决定通过或失败。
    pub status: ExitStatus,
}

/// How a single invocation ended.
/// 单次调用的结束方式。
#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    Completed(CapturedOutput),
    /// The child outlived the limit and was killed. No partial output is kept.
    /// 子进程超出时限并被终止。不保留任何部分输出。
    TimedOut(Duration),
}

/// Splits a command line using shell word rules (quotes and escapes honored,
/// no expansion, globbing or pipes).
///
/// # Returns
/// The argument vector, program first. Fails on unbalanced quotes or when no
/// word is left.
///
/// 使用 shell 单词规则切分命令行（支持引号与转义，不做展开、通配或管道）。
pub fn split_command(cmd: &str) -> Result<Vec<String>> {
    let parts =
        shlex::split(cmd).ok_or_else(|| anyhow!("{}", t!("error.parse_command", cmd = cmd)))?;
    if parts.is_empty() {
        return Err(anyhow!("{}", t!("error.empty_command")));
    }
    Ok(parts)
}

/// Spawns `argv` in `cwd`, writes `input` to its stdin and closes it, then
/// collects stdout and stderr until the child exits or `limit` elapses.
///
/// # Arguments
/// * `argv` - Program followed by its arguments, as produced by [`split_command`].
/// * `cwd` - Working directory of the child.
/// * `input` - Bytes written to the child's stdin.
/// * `limit` - Hard upper bound for the whole exchange.
///
/// # Returns
/// `ProcessOutcome::TimedOut` when the child had to be killed; an error when
/// the process could not be spawned or its pipes failed.
///
/// 在 `cwd` 中启动 `argv`，将 `input` 写入 stdin 后关闭，
/// 然后收集 stdout 和 stderr，直到子进程退出或超过 `limit`。
pub async fn run_with_input(
    argv: &[String],
    cwd: &Path,
    input: &[u8],
    limit: Duration,
) -> Result<ProcessOutcome> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow!("{}", t!("error.empty_command")))?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| t!("error.spawn_failed", program = program).to_string())?;

    let waited = tokio::time::timeout(limit, communicate(&mut child, input)).await;
    match waited {
        Ok(result) => result.map(ProcessOutcome::Completed),
        Err(_) => {
            // kill() also reaps the child before the next fixture starts.
            child
                .kill()
                .await
                .with_context(|| t!("error.kill_failed", program = program).to_string())?;
            Ok(ProcessOutcome::TimedOut(limit))
        }
    }
}

/// Feeds stdin and drains both output pipes concurrently so a chatty child
/// cannot block on a full pipe, then waits for the exit status.
async fn communicate(child: &mut Child, input: &[u8]) -> Result<CapturedOutput> {
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| anyhow!("{}", t!("error.capture_stdin_failed")))?;
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("{}", t!("error.capture_stdout_failed")))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("{}", t!("error.capture_stderr_failed")))?;

    let feed = async move {
        match stdin.write_all(input).await {
            // The child is free to exit without reading its input.
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e),
            _ => {}
        }
        drop(stdin);
        Ok(())
    };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let (fed, read_out, read_err) = tokio::join!(
        feed,
        stdout.read_to_end(&mut out),
        stderr.read_to_end(&mut err)
    );
    fed.with_context(|| t!("error.write_stdin_failed").to_string())?;
    read_out.with_context(|| t!("error.capture_stdout_failed").to_string())?;
    read_err.with_context(|| t!("error.capture_stderr_failed").to_string())?;

    let status = child
        .wait()
        .await
        .with_context(|| t!("error.wait_failed").to_string())?;

    Ok(CapturedOutput {
        stdout: out,
        stderr: err,
        status,
    })
}
