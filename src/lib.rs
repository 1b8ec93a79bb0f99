//! # Fixture Runner Library / Fixture Runner 库
//!
//! This library provides the core functionality for the fixture runner,
//! a file-pattern driven test harness. It discovers input/expected-output
//! file pairs in a directory, runs a command on each input and either
//! compares the output byte for byte (`test`) or writes it out as the new
//! expectation (`gen`).
//!
//! 此库为夹具运行器提供核心功能，这是一个由文件名模式驱动的测试工具。
//! 它在目录中发现输入/预期输出文件对，对每个输入运行命令，
//! 然后逐字节比较输出（`test`）或将其写出为新的预期文件（`gen`）。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, file name patterns, directory scanning and per-pair actions
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Console output
//! - `commands` - Action handlers
//! - `cli` - Command-line interface
//!
//! - `core` - 数据模型、文件名模式、目录扫描和单对操作
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 控制台输出
//! - `commands` - 操作处理器
//! - `cli` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::execution;
pub use self::core::models;
pub use self::core::patterns;

/// Sets the application language from a requested locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to the default
/// language ("en").
pub fn init_locale(requested: &str) {
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
