//! 端到端测试：查找 → 建树 → 渲染。

use std::fs::{self, File};
use std::path::{Path, MAIN_SEPARATOR};

use repo_outline_common::{OutlineConfig, OutlineError};
use repo_outline_domain::DisplayMode;
use repo_outline_engine::{generate_outline, get_graph};

fn touch(root: &Path, rel: &[&str]) {
    let path = rel.iter().fold(root.to_path_buf(), |acc, s| acc.join(s));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(&path).unwrap();
}

fn sep_path(segments: &[&str]) -> String {
    segments.join(&MAIN_SEPARATOR.to_string())
}

fn create_docs_repo(with_root_readme: bool) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    touch(dir.path(), &["docs", "README.md"]);
    touch(dir.path(), &["docs", "sub", "README.md"]);
    touch(dir.path(), &["docs", "sub", "notes.txt"]);
    if with_root_readme {
        touch(dir.path(), &["README.md"]);
    }
    dir
}

#[test]
fn show_all_lists_links_and_leaves() {
    let dir = create_docs_repo(false);
    let config = OutlineConfig::new(dir.path()).with_show_parent_only(false);
    let report = generate_outline(&config).unwrap();

    assert_eq!(report.mode, DisplayMode::All);
    assert_eq!(report.file_count, 2);
    assert_eq!(
        report.markdown,
        format!(
            "- [Docs](docs)\n  - Readme Md\n  - [Sub]({})\n    - Readme Md\n",
            sep_path(&["docs", "sub"])
        )
    );
}

#[test]
fn parent_only_hides_matched_files() {
    let dir = create_docs_repo(true);
    let config = OutlineConfig::new(dir.path());
    let markdown = get_graph(&config).unwrap();

    assert_eq!(
        markdown,
        format!("- [Docs](docs)\n  - [Sub]({})\n", sep_path(&["docs", "sub"]))
    );
    assert!(!markdown.contains("Readme"));
}

#[test]
fn tree_leaves_match_found_files() {
    let dir = create_docs_repo(true);
    let config = OutlineConfig::new(dir.path()).with_patterns([r"\.(md|txt)$"]);
    let report = generate_outline(&config).unwrap();

    assert_eq!(report.tree.file_paths(), report.files);
    assert_eq!(report.tree.file_count(), report.files.len());
    assert_eq!(report.files.len(), 4);
}

#[test]
fn no_matches_render_empty_markdown() {
    let dir = create_docs_repo(false);
    let config = OutlineConfig::new(dir.path()).with_patterns(["^CHANGELOG"]);
    let report = generate_outline(&config).unwrap();
    assert!(report.files.is_empty());
    assert_eq!(report.markdown, "");
}

#[test]
fn invalid_pattern_fails_before_walking() {
    let config = OutlineConfig::new("/nonexistent_xyz_12345_folder").with_patterns(["[a-"]);
    let err = generate_outline(&config).unwrap_err();
    assert!(matches!(err, OutlineError::Pattern { .. }));
}

#[test]
fn missing_root_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = OutlineConfig::new(dir.path().join("gone"));
    let err = generate_outline(&config).unwrap_err();
    assert!(matches!(err, OutlineError::FileSystem { .. }));
}
