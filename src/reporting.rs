//! # Reporting Module / 报告模块
//!
//! This module handles everything printed to the console during a run.
//! There is no structured report format; output is meant for humans.
//!
//! 此模块处理运行期间打印到控制台的所有内容。
//! 没有结构化的报告格式；输出面向人类阅读。

pub mod console;

// Re-export common reporting functions
pub use console::{decode_for_display, print_summary};
