//! Prune stale worktree references
//! Usage: worktree clean

use anyhow::{Context, Result};
use colored::Colorize;

use crate::git::{GitExecutor, WorktreeManager};

pub fn execute<E: GitExecutor>(manager: &WorktreeManager<E>) -> Result<()> {
    println!("Cleaning up stale worktree references...");
    println!("{}", "─".repeat(50).dimmed());

    manager.prune().context("Error cleaning worktrees")?;

    println!("{} Cleanup completed!", "✓".green().bold());
    Ok(())
}
