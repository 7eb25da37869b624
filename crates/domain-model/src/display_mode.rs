use serde::{Deserialize, Serialize};

/// 渲染模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// 渲染所有节点，包括匹配到的文件本身
    All,
    /// 跳过名称匹配的节点，只显示包含匹配文件的父目录
    #[default]
    ParentOnly,
}

impl DisplayMode {
    pub fn from_show_parent_only(show_parent_only: bool) -> Self {
        if show_parent_only {
            DisplayMode::ParentOnly
        } else {
            DisplayMode::All
        }
    }

    pub fn skips_matched(self) -> bool {
        self == DisplayMode::ParentOnly
    }
}
