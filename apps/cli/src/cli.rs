use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use repo_outline_common::{OutlineConfig, DEFAULT_PATTERNS};

use crate::CliError;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown outline (nested bullet list with links)
    Markdown,
    /// Full report as JSON: matched files, tree and rendered markdown
    Json,
}

/// Generate a markdown outline of a repository.
///
/// Scans ROOT for files whose names match the given patterns and renders the
/// folder hierarchy as a nested markdown list, linking every folder that
/// directly contains a match.
///
/// Examples:
///   repo-outline-tool .                         # Outline README.md folders
///   repo-outline-tool -p '\.md$' --show-all     # All markdown files, leaves included
///   repo-outline-tool -o OUTLINE.md             # Write to a file
#[derive(Parser, Debug)]
#[command(name = "repo-outline-tool")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Repository root to scan (default: current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Regex matched against bare file names; repeatable (default: README.md)
    #[arg(short, long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Also render matched files themselves, not only their parent folders
    #[arg(long)]
    pub show_all: bool,

    /// Write the outline to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Ask for root, patterns, display mode and output path
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// 由命令行参数构造配置；未给出的项使用默认值
    pub fn to_config(&self) -> Result<OutlineConfig, CliError> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let patterns: Vec<String> = if self.patterns.is_empty() {
            DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            self.patterns.clone()
        };

        Ok(OutlineConfig::new(root)
            .with_patterns(patterns)
            .with_show_parent_only(!self.show_all)
            .with_output(self.output.clone()))
    }
}
