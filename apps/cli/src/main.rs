use std::process::ExitCode;

use clap::Parser;
use repo_outline_common::{init_logging, level_for};
use repo_outline_tool::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(level_for(cli.verbose, cli.quiet));

    match repo_outline_tool::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
