use anyhow::Result;
use clap::CommandFactory;
use worktrees::commands::{
    self, add, clean, completions, init, install, list, original, remove, switch,
};
use worktrees::config::Config;
use worktrees::shell::Shell;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Add { path, branch } => {
            add::execute(&commands::manager(config), &path, branch.as_deref())
        }
        Commands::List { json } => list::execute(&commands::manager(config), json),
        Commands::Remove { target } => remove::execute(&commands::manager(config), &target),
        Commands::Switch { name } => switch::execute(&commands::manager(config), name.as_deref()),
        Commands::Original => original::execute(&commands::manager(config)),
        Commands::Clean => clean::execute(&commands::manager(config)),
        Commands::Install => install::execute(config),
        Commands::Init { shell } => init::execute(config, shell.parse::<Shell>()?),
        Commands::Completions { shell } => {
            let shell = shell.parse::<Shell>()?;
            let mut cmd = Cli::command();
            completions::generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
