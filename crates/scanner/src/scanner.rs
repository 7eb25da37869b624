use std::path::Path;
use std::time::Instant;

use repo_outline_common::OutlineError;
use walkdir::{DirEntry, WalkDir};

use crate::PatternSet;

fn ensure_dir(root: &Path) -> Result<(), OutlineError> {
    let metadata = std::fs::metadata(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OutlineError::file_system(root.display(), "路径不存在")
        } else {
            OutlineError::file_system(root.display(), e)
        }
    })?;
    if !metadata.is_dir() {
        return Err(OutlineError::file_system(root.display(), "not a directory"));
    }
    Ok(())
}

/// 普通文件，或指向普通文件的符号链接（链接本身不跟随遍历）
fn is_regular_file(entry: &DirEntry) -> Result<bool, OutlineError> {
    if entry.path_is_symlink() {
        let metadata = std::fs::metadata(entry.path())
            .map_err(|e| OutlineError::file_system(entry.path().display(), e))?;
        return Ok(metadata.is_file());
    }
    Ok(entry.file_type().is_file())
}

/// 递归查找文件名匹配任一模式的文件。
///
/// 返回相对 `root` 的路径（平台分隔符），按字符串字典序排序。遍历中的任何错误
/// 都会中止整个查找。
pub fn find_files(root: &Path, patterns: &PatternSet) -> Result<Vec<String>, OutlineError> {
    let start = Instant::now();
    ensure_dir(root)?;
    log::debug!(
        "scan start, root: {}, {} pattern(s): {:?}",
        root.display(),
        patterns.len(),
        patterns.as_strs()
    );

    let mut files = Vec::new();
    let mut visited = 0u64;
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string());
            OutlineError::file_system(path, e)
        })?;
        if !is_regular_file(&entry)? {
            continue;
        }
        visited += 1;

        let name = entry.file_name().to_string_lossy();
        if !patterns.is_match(&name) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| OutlineError::InvalidPath(format!("{}: {}", entry.path().display(), e)))?;
        files.push(rel.to_string_lossy().into_owned());
    }

    files.sort();
    files.dedup();
    log::info!(
        "scan done, root: {}, files visited: {}, matched: {}, elapsed: {} ms",
        root.display(),
        visited,
        files.len(),
        start.elapsed().as_millis()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn readme_set() -> PatternSet {
        PatternSet::new(["README.md"]).unwrap()
    }

    #[test]
    fn test_find_nonexistent_root() {
        let err = find_files(Path::new("/nonexistent_xyz_12345_folder"), &readme_set()).unwrap_err();
        assert!(matches!(err, OutlineError::FileSystem { .. }));
    }

    #[test]
    fn test_find_root_is_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("README.md");
        File::create(&file).unwrap();
        let err = find_files(&file, &readme_set()).unwrap_err();
        match err {
            OutlineError::FileSystem { message, .. } => assert_eq!(message, "not a directory"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_find_matches_bare_name_only() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let sub = dir.path().join("README.md.d");
        fs::create_dir_all(&sub).unwrap();
        File::create(sub.join("notes.txt")).unwrap();

        let files = find_files(dir.path(), &readme_set()).unwrap();
        assert!(files.is_empty());
    }
}
