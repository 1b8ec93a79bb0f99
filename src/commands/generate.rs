//! `gen` action: create the expected-output files that are missing or empty.

use anyhow::Result;

use crate::commands::finish;
use crate::core::models::{Action, Config, RunStatus};
use crate::core::{FixtureGenerator, visit_files};

/// Generates expectations for every fixture pair in the configured directory.
/// Non-empty expected-output files are never overwritten.
///
/// 为配置目录中的每个夹具对生成预期输出。非空的预期输出文件永远不会被覆盖。
pub async fn execute(config: &Config) -> Result<RunStatus> {
    let mut generator = FixtureGenerator::new(config);
    let report = visit_files(config, &mut generator).await?;
    Ok(finish(Action::Gen, &report))
}
