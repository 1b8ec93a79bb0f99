//! # Console Reporting Module / 控制台报告模块
//!
//! Every line the runner prints goes through this module: the run banner,
//! per-pair progress, output dumps on mismatch and the final summary.
//! Messages are localized and colored.
//!
//! 运行器打印的每一行都经过此模块：运行横幅、单对进度、
//! 不匹配时的输出转储以及最终摘要。消息经过本地化并带有颜色。

use colored::*;
use std::fmt::Write;
use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;

use crate::core::models::{Action, Config, FixturePair, PairOutcome, ScanReport};
use crate::infra::t;

/// Number of bytes per line in the hex fallback of [`decode_for_display`].
const HEX_BYTES_PER_LINE: usize = 16;

/// Prints the run banner: action, command and fixture directory.
/// 打印运行横幅：操作、命令和夹具目录。
pub fn print_banner(action: Action, config: &Config) {
    println!("{}", t!("banner.action", action = action).bold());
    println!("{}", t!("banner.cmd", cmd = &config.cmd));
    println!("{}", t!("banner.path", path = config.path.display()));
}

/// Prints the identifying line for a pair, before anything is executed.
/// 在执行任何操作之前，打印标识该夹具对的行。
pub fn print_pair_header(action: Action, pair: &FixturePair) {
    let input = pair.input_name();
    let output = pair.output_name();
    let header = match action {
        Action::Test => t!("run.test_header", input = input, output = output),
        Action::Gen => t!("run.gen_header", input = input, output = output),
    };
    println!("{}", header.blue());
}

/// Echoes the child's stderr when it wrote anything. Diagnostic only.
/// 当子进程写入了 stderr 时回显其内容。仅用于诊断。
pub fn print_stderr(stderr: &[u8]) {
    if stderr.is_empty() {
        return;
    }
    println!("{}", t!("run.stderr_header").yellow());
    print_block(stderr);
}

pub fn print_exit_status(status: &ExitStatus) {
    println!(
        "{}",
        t!("run.exit_status", status = status.to_string()).dimmed()
    );
}

/// Dumps both sides of a failed comparison.
///
/// The bytes are decoded for display only; the comparison itself never looks
/// at the decoded text.
///
/// 转储失败比较的两侧内容。字节仅为显示而解码；比较本身从不使用解码后的文本。
pub fn print_mismatch(expected: &[u8], actual: &[u8]) {
    println!("{}", t!("run.fail").red().bold());
    println!("{}", t!("run.expect_header").yellow());
    print_block(expected);
    println!("{}", t!("run.actual_header").yellow());
    print_block(actual);
}

pub fn print_pass() {
    println!("{}", t!("run.pass").green());
}

pub fn print_timeout() {
    println!("{}", t!("run.timeout").red());
}

/// Prints an error caught at the pair boundary, including its context chain.
pub fn print_error(error: &anyhow::Error) {
    println!("{}", format!("{error:#}").red());
}

pub fn print_skipped(output: &Path) {
    println!("{}", t!("gen.skipped", path = output.display()).dimmed());
}

pub fn print_generated(output: &Path) {
    println!("{}", t!("gen.generated", path = output.display()).green());
}

pub fn print_no_tests() {
    println!("{}", t!("summary.no_tests").yellow());
}

/// Prints a one-line summary of the scan, with counts that fit the action.
///
/// # Output Format / 输出格式
/// ```text
/// --- Summary: 4 fixtures ---
/// 3 passed, 1 failed in 1.52s (1 timed out)
///   - slow.in                  |    1.00s | killed after 1s
/// ```
pub fn print_summary(action: Action, report: &ScanReport) {
    let passed = report.count(|o| *o == PairOutcome::Passed);
    let generated = report.count(|o| *o == PairOutcome::Generated);
    let skipped = report.count(|o| *o == PairOutcome::Skipped);
    let failed = report.count(PairOutcome::is_failure);
    let timed_out = report.count(PairOutcome::is_timeout);
    let duration = format_duration(report.duration);

    println!("\n{}", t!("summary.banner", total = report.len()).bold());
    let line = match action {
        Action::Test => t!(
            "summary.test",
            passed = passed,
            failed = failed,
            duration = duration
        ),
        Action::Gen => t!(
            "summary.gen",
            generated = generated,
            skipped = skipped,
            failed = failed,
            duration = duration
        ),
    };
    let timeouts = if timed_out > 0 {
        format!(" {}", t!("summary.timed_out", count = timed_out))
    } else {
        String::new()
    };

    let line = format!("{line}{timeouts}");
    if failed > 0 {
        println!("{}", line.red());
    } else {
        println!("{}", line.green());
    }
    for result in report.results.iter().filter(|r| r.outcome.is_failure()) {
        if let PairOutcome::Failed { message, .. } = &result.outcome {
            println!(
                "  - {:<24} | {:>8} | {}",
                result.pair.input_name().cyan(),
                format_duration(result.duration),
                message
            );
        }
    }
}

/// Best-effort text rendering of raw bytes for the console.
///
/// Valid UTF-8 is returned as is. Anything else is rendered as a hex dump,
/// prefixed with a note giving the byte count. This never fails.
///
/// 为控制台尽力将原始字节渲染为文本。
/// 有效的 UTF-8 原样返回；否则渲染为十六进制转储，并附带字节数说明。此函数从不失败。
pub fn decode_for_display(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let mut dump = format!("{}\n", t!("run.binary_output", len = bytes.len()));
            for chunk in bytes.chunks(HEX_BYTES_PER_LINE) {
                let line: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
                let _ = writeln!(dump, "{}", line.join(" "));
            }
            dump
        }
    }
}

fn print_block(bytes: &[u8]) {
    let text = decode_for_display(bytes);
    if text.is_empty() {
        return;
    }
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}
