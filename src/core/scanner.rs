//! # Directory Scanner Module / 目录扫描模块
//!
//! Walks the fixture directory (flat, no recursion), pairs every matching input
//! with its derived expected-output file and hands each pair to a visitor.
//!
//! 遍历夹具目录（扁平，不递归），将每个匹配的输入与推导出的预期输出文件配对，
//! 并把每一对交给访问器处理。

use anyhow::{Result, bail};
use std::time::Instant;

use crate::core::models::{Config, FixturePair, PairOutcome, PairResult, ScanReport};
use crate::infra::{fs, t};

/// Per-pair action driven by [`visit_files`].
///
/// Implementations must turn every failure into a `PairOutcome::Failed`
/// instead of returning early, so one bad fixture cannot stop the scan.
///
/// 由 [`visit_files`] 驱动的单对操作。
/// 实现必须将所有失败转换为 `PairOutcome::Failed`，而不是提前返回，
/// 这样单个有问题的夹具不会中断整个扫描。
#[allow(async_fn_in_trait)]
pub trait PairVisitor {
    async fn visit(&mut self, pair: &FixturePair) -> PairOutcome;
}

/// Lists the configured directory, applies the pattern set to each regular
/// file and calls `visitor` once per match, strictly one pair at a time.
/// Files matching no pattern are neither visited nor counted.
///
/// # Returns
/// The report of every visited pair; an error only when the directory itself
/// cannot be read.
///
/// 列出配置的目录，对每个普通文件应用模式集，并对每个匹配调用一次 `visitor`，
/// 严格逐对执行。不匹配任何模式的文件既不会被访问也不会被计数。
pub async fn visit_files<V: PairVisitor>(config: &Config, visitor: &mut V) -> Result<ScanReport> {
    if !fs::is_directory(&config.path) {
        bail!("{}", t!("error.not_a_directory", path = config.path.display()));
    }

    let scan_start = Instant::now();
    let mut report = ScanReport::default();

    for (name, input) in fs::list_regular_files(&config.path)? {
        let Some((_, output_name)) = config.patterns.match_file(&name) else {
            continue;
        };
        let pair = FixturePair::new(input, config.path.join(output_name));

        let start = Instant::now();
        let outcome = visitor.visit(&pair).await;
        report.results.push(PairResult {
            pair,
            outcome,
            duration: start.elapsed(),
        });
    }

    report.duration = scan_start.elapsed();
    Ok(report)
}
