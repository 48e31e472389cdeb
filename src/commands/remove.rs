//! Remove a worktree by name or path
//! Usage: worktree remove <name-or-path>

use anyhow::{Context, Result};
use colored::Colorize;

use crate::git::{GitExecutor, WorktreeManager};

pub fn execute<E: GitExecutor>(manager: &WorktreeManager<E>, target: &str) -> Result<()> {
    let path = manager
        .resolve_remove_target(target)
        .context("Error removing worktree")?;

    println!("Removing worktree: {}", path.cyan());

    manager
        .remove(&path)
        .context("Error removing worktree")?;

    println!("{} Worktree removed successfully!", "✓".green().bold());
    Ok(())
}
