use std::fs;
use std::path::{Path, PathBuf};

use repo_outline_common::OutlineError;

/// 写入 Markdown 文件，必要时创建父目录；返回写入的路径
pub fn write_markdown(path: &Path, content: &str) -> Result<PathBuf, OutlineError> {
    if path.as_os_str().is_empty() {
        return Err(OutlineError::InvalidPath("output path is empty".to_string()));
    }

    // 确保父目录存在
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(path.to_path_buf())
}
