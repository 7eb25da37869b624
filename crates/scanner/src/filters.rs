use regex::Regex;
use repo_outline_common::OutlineError;

/// 文件名匹配模式集合：任一模式命中即视为匹配（非锚定搜索）
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// 编译全部模式；任一模式非法立即返回 `OutlineError::Pattern`
    pub fn new<I, S>(patterns: I) -> Result<Self, OutlineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|e| OutlineError::Pattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }

    /// 任一名称命中任一模式
    pub fn any_match<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().any(|name| self.is_match(name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.patterns.iter().map(Regex::as_str).collect()
    }
}
