use std::path::PathBuf;

use crate::OutlineError;

/// 默认匹配的文件名模式
pub const DEFAULT_PATTERNS: &[&str] = &["README.md"];

/// 默认输出文件名（位于扫描根目录下）
pub const DEFAULT_OUTPUT_NAME: &str = "README.md";

/// 规范化用户输入的路径（支持正斜杠、去除首尾空白）
pub fn normalize_path(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

/// 大纲生成配置
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    pub root: PathBuf,
    pub patterns: Vec<String>,
    /// 仅显示包含匹配文件的父目录（默认开启）
    pub show_parent_only: bool,
    /// 为 None 时输出到 stdout
    pub output: Option<PathBuf>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            show_parent_only: true,
            output: None,
        }
    }
}

impl OutlineConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_show_parent_only(mut self, show_parent_only: bool) -> Self {
        self.show_parent_only = show_parent_only;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// 根目录默认的输出路径：`<root>/README.md`
    pub fn default_output_path(&self) -> PathBuf {
        self.root.join(DEFAULT_OUTPUT_NAME)
    }

    pub fn validate(&self) -> Result<(), OutlineError> {
        if self.root.as_os_str().is_empty() {
            return Err(OutlineError::Config("root path is empty".to_string()));
        }
        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(OutlineError::Config("output path is empty".to_string()));
            }
        }
        Ok(())
    }
}
