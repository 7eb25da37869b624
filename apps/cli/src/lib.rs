mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, OutputFormat};
pub use error::CliError;

/// 解析配置（必要时交互式询问），然后生成并输出大纲
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = cli.to_config()?;
    if cli.interactive {
        config = commands::interactive::prompt_config(config)?;
    }
    commands::outline::run_outline(&config, cli.format, !cli.quiet)
}
