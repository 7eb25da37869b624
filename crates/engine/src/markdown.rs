use std::path::MAIN_SEPARATOR;

use repo_outline_domain::{DisplayMode, OutlineNode, OutlineTree};
use repo_outline_scanner::PatternSet;

use crate::format_label;

/// 将大纲树渲染为 Markdown 列表。
///
/// 先序遍历，根不渲染。每个节点一行，缩进为两个空格乘以相对路径中的分隔符数量。
/// 当某个直接子节点的名称命中模式时，该节点渲染为指向自身路径的链接，否则为纯文本。
/// `DisplayMode::ParentOnly` 下名称命中模式的节点连同子树一起跳过。
pub fn render_markdown(tree: &OutlineTree, patterns: &PatternSet, mode: DisplayMode) -> String {
    let mut md = String::new();
    render_level(&tree.children, "", patterns, mode, &mut md);
    log::debug!("rendered {} lines ({:?})", md.lines().count(), mode);
    md
}

fn render_level(
    nodes: &[OutlineNode],
    parent_path: &str,
    patterns: &PatternSet,
    mode: DisplayMode,
    md: &mut String,
) {
    for node in nodes {
        if mode.skips_matched() && patterns.is_match(&node.name) {
            continue;
        }

        let path = if parent_path.is_empty() {
            node.name.clone()
        } else {
            format!("{}{}{}", parent_path, MAIN_SEPARATOR, node.name)
        };
        let indent = "  ".repeat(path.matches(MAIN_SEPARATOR).count());
        let label = format_label(&node.name);

        if patterns.any_match(node.children.iter().map(|c| c.name.as_str())) {
            md.push_str(&format!("{}- [{}]({})\n", indent, label, path));
        } else {
            md.push_str(&format!("{}- {}\n", indent, label));
        }

        render_level(&node.children, &path, patterns, mode, md);
    }
}
