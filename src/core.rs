//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the fixture runner:
//! data models, file name patterns, directory scanning and the per-pair
//! test/generation logic.
//!
//! 此模块包含夹具运行器的核心功能：
//! 数据模型、文件名模式、目录扫描以及单对测试/生成逻辑。

pub mod execution;
pub mod models;
pub mod patterns;
pub mod scanner;

// Re-exports
pub use execution::{FixtureGenerator, FixtureTester};
pub use models::{Action, Config, RunStatus};
pub use patterns::PatternSet;
pub use scanner::{PairVisitor, visit_files};
