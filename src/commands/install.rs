//! Install the `wt` shell function
//! Usage: worktree install

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::shell::{install, InstallOutcome, ShellEnv};

pub fn execute(config: &Config) -> Result<()> {
    let outcome = install(&ShellEnv::from_process(), &config.binary)
        .context("Error installing shell integration")?;

    let profile = outcome.profile();
    println!("Detected shell: {}", profile.shell.to_string().cyan());
    println!("Shell config file: {}", profile.config_path.display());

    match &outcome {
        InstallOutcome::AlreadyInstalled(_) => {
            println!("Shell integration is already installed.");
        }
        InstallOutcome::Installed(profile) => {
            println!("{} Shell integration installed successfully!", "✓".green().bold());
            println!(
                "Please restart your shell or run 'source {}' to use the wt function.",
                profile.config_path.display()
            );
            println!();
            println!("Usage:");
            println!("  wt og            - Jump to original worktree");
            println!("  wt s <name>      - Jump to worktree by name");
            println!("  wt switch <name> - Jump to worktree by name");
            println!("  wt <other>       - Pass command to {}", config.binary);
        }
    }

    Ok(())
}
