use std::path::MAIN_SEPARATOR;

use serde::{Deserialize, Serialize};

/// 节点类型：显式区分文件与目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// 大纲树节点，对应路径中的一段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub name: String,
    pub kind: NodeKind,
    /// 按首次插入顺序排列
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// 大纲树的根；根本身不参与渲染
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineTree {
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineTree {
    /// 将已排序的相对路径折叠为树。
    ///
    /// 路径按平台分隔符切分，中间段为目录、最后一段为文件；同一层按 `(name, kind)`
    /// 查找已有节点，因此同名的文件与目录会成为两个兄弟节点而不是被合并。
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut tree = OutlineTree::default();
        for path in paths {
            let segments: Vec<&str> = path
                .as_ref()
                .split(MAIN_SEPARATOR)
                .filter(|s| !s.is_empty())
                .collect();
            let Some((file_name, dirs)) = segments.split_last() else {
                continue;
            };

            let mut level = &mut tree.children;
            for dir in dirs {
                level = &mut child_entry(level, dir, NodeKind::Directory).children;
            }
            child_entry(level, file_name, NodeKind::File);
        }
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 还原所有文件叶子的相对路径（先序遍历顺序）
    pub fn file_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_file_paths(&self.children, "", &mut out);
        out
    }

    pub fn file_count(&self) -> usize {
        fn count(nodes: &[OutlineNode]) -> usize {
            nodes
                .iter()
                .map(|n| usize::from(n.is_file()) + count(&n.children))
                .sum()
        }
        count(&self.children)
    }
}

fn child_entry<'a>(level: &'a mut Vec<OutlineNode>, name: &str, kind: NodeKind) -> &'a mut OutlineNode {
    let idx = match level.iter().position(|n| n.kind == kind && n.name == name) {
        Some(idx) => idx,
        None => {
            if level.iter().any(|n| n.name == name) {
                log::warn!("segment `{}` appears both as a file and a directory", name);
            }
            level.push(OutlineNode::new(name, kind));
            level.len() - 1
        }
    };
    &mut level[idx]
}

fn collect_file_paths(nodes: &[OutlineNode], parent: &str, out: &mut Vec<String>) {
    for node in nodes {
        let path = if parent.is_empty() {
            node.name.clone()
        } else {
            format!("{}{}{}", parent, MAIN_SEPARATOR, node.name)
        };
        if node.is_file() {
            out.push(path.clone());
        }
        collect_file_paths(&node.children, &path, out);
    }
}
