//! 交互式配置：依次询问仓库路径、文件模式、是否仅显示父目录以及输出路径。

use dialoguer::{Confirm, Input};
use repo_outline_common::{normalize_path, OutlineConfig, DEFAULT_OUTPUT_NAME};

use crate::CliError;

/// 逐行收集模式，遇到空行结束；一个都没有时使用 `defaults`
pub fn collect_patterns<I, S>(lines: I, defaults: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let patterns: Vec<String> = lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .take_while(|line| !line.is_empty())
        .collect();
    if patterns.is_empty() {
        defaults.to_vec()
    } else {
        patterns
    }
}

fn prompt_patterns(defaults: &[String]) -> Result<Vec<String>, CliError> {
    eprintln!(
        "Enter the file patterns one per line, empty line to finish (default: {:?})",
        defaults
    );
    let mut lines = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt("Pattern")
            .allow_empty(true)
            .interact_text()?;
        let done = line.trim().is_empty();
        lines.push(line);
        if done {
            break;
        }
    }
    Ok(collect_patterns(lines, defaults))
}

/// 以 `base` 中的值作为默认值交互式询问；未指定输出时默认写入 `<root>/README.md`
pub fn prompt_config(base: OutlineConfig) -> Result<OutlineConfig, CliError> {
    let root: String = Input::new()
        .with_prompt("Enter the repository path")
        .default(base.root.display().to_string())
        .interact_text()?;
    let root = normalize_path(&root);

    let patterns = prompt_patterns(&base.patterns)?;

    let show_parent_only = Confirm::new()
        .with_prompt("Do you want to show parent folder only?")
        .default(base.show_parent_only)
        .interact()?;

    let default_output = base
        .output
        .clone()
        .unwrap_or_else(|| root.join(DEFAULT_OUTPUT_NAME));
    let output: String = Input::new()
        .with_prompt("Enter the output markdown file path")
        .default(default_output.display().to_string())
        .interact_text()?;

    let config = OutlineConfig::new(root)
        .with_patterns(patterns)
        .with_show_parent_only(show_parent_only)
        .with_output(Some(normalize_path(&output)));
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        vec!["README.md".to_string()]
    }

    #[test]
    fn test_collect_patterns_stops_at_empty_line() {
        let patterns = collect_patterns(["README.md", "  ^NOTES  ", "", "ignored"], &defaults());
        assert_eq!(patterns, vec!["README.md".to_string(), "^NOTES".to_string()]);
    }

    #[test]
    fn test_collect_patterns_defaults() {
        assert_eq!(collect_patterns(Vec::<String>::new(), &defaults()), defaults());
        assert_eq!(collect_patterns(["   "], &defaults()), defaults());
    }

    #[test]
    fn test_collect_patterns_keeps_cli_defaults() {
        let cli_patterns = vec![r"\.md$".to_string(), "^NOTES".to_string()];
        assert_eq!(collect_patterns([""], &cli_patterns), cli_patterns);
    }
}
