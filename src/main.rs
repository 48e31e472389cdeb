mod cli;

use clap::Parser;
use colored::Colorize;
use worktrees::config::Config;
use worktrees::logging;

use cli::{dispatch, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = Config::load()
        .map_err(anyhow::Error::from)
        .and_then(|config| dispatch(cli.command, &config));

    if let Err(err) = result {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
