//! # Commands Module / 命令模块
//!
//! Action handlers dispatched from the CLI, one per subcommand.
//!
//! 由 CLI 分发的操作处理器，每个子命令一个。

pub mod generate;

use crate::core::models::{Action, RunStatus, ScanReport};
use crate::reporting::console;

/// Turns a finished scan into the run status, printing either the
/// "no tests" notice or the summary.
fn finish(action: Action, report: &ScanReport) -> RunStatus {
    let status = report.status();
    if status == RunStatus::NoTests {
        console::print_no_tests();
    } else {
        console::print_summary(action, report);
    }
    status
}
