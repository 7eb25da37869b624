//! 生成命令：执行查找 → 建树 → 渲染，并输出到 stdout 或文件。

use std::io::Write;

use repo_outline_common::OutlineConfig;
use repo_outline_domain::OutlineReport;
use repo_outline_engine::generate_outline;
use repo_outline_writer::write_markdown;

use crate::{CliError, OutputFormat};

/// 按输出格式序列化结果
pub fn render_output(report: &OutlineReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Markdown => Ok(report.markdown.clone()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn run_outline(config: &OutlineConfig, format: OutputFormat, announce: bool) -> Result<(), CliError> {
    log::info!(
        "outline start, root: {}, patterns: {:?}, parent only: {}",
        config.root.display(),
        config.patterns,
        config.show_parent_only
    );
    let report = generate_outline(config)?;
    if report.files.is_empty() {
        log::warn!("no files matched {:?} under {}", config.patterns, report.root);
    }
    let content = render_output(&report, format)?;

    match &config.output {
        Some(path) => {
            let written = write_markdown(path, &content)?;
            if announce {
                println!("Markdown representation saved to {}", written.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(content.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
