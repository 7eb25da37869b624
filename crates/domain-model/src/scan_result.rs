use serde::{Deserialize, Serialize};

use crate::{DisplayMode, OutlineTree};

/// 一次大纲生成的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineReport {
    pub root: String,
    /// 相对根目录、按字典序排序的匹配文件
    pub files: Vec<String>,
    pub tree: OutlineTree,
    pub mode: DisplayMode,
    pub markdown: String,
    pub file_count: u64,
    pub scan_time_ms: u64,
}
