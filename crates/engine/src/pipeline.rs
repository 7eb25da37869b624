use std::time::Instant;

use repo_outline_common::{OutlineConfig, OutlineError};
use repo_outline_domain::{DisplayMode, OutlineReport, OutlineTree};
use repo_outline_scanner::{find_files, PatternSet};

use crate::render_markdown;

/// 执行完整流程：查找 → 建树 → 渲染
pub fn generate_outline(config: &OutlineConfig) -> Result<OutlineReport, OutlineError> {
    config.validate()?;
    let start = Instant::now();
    let patterns = PatternSet::new(&config.patterns)?;
    let mode = DisplayMode::from_show_parent_only(config.show_parent_only);

    let files = find_files(&config.root, &patterns)?;
    let tree = OutlineTree::from_paths(&files);
    let markdown = render_markdown(&tree, &patterns, mode);

    let report = OutlineReport {
        root: config.root.display().to_string(),
        file_count: files.len() as u64,
        files,
        tree,
        mode,
        markdown,
        scan_time_ms: start.elapsed().as_millis() as u64,
    };
    log::info!(
        "outline done, root: {}, files: {}, mode: {:?}, elapsed: {} ms",
        report.root,
        report.file_count,
        report.mode,
        report.scan_time_ms
    );
    Ok(report)
}

/// 只返回 Markdown 文本
pub fn get_graph(config: &OutlineConfig) -> Result<String, OutlineError> {
    generate_outline(config).map(|report| report.markdown)
}
