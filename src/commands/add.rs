//! Create a worktree
//! Usage: worktree add <path> [branch]

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::git::{GitExecutor, WorktreeManager};

/// Branch to create when none is given: the final component of `path`.
pub fn default_branch(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn execute<E: GitExecutor>(
    manager: &WorktreeManager<E>,
    path: &str,
    branch: Option<&str>,
) -> Result<()> {
    let branch = branch.map(str::to_string).unwrap_or_else(|| default_branch(path));

    if branch.is_empty() {
        println!("Creating worktree at {}...", path.cyan());
    } else {
        println!(
            "Creating worktree at {} with branch {}...",
            path.cyan(),
            branch.cyan()
        );
    }

    manager
        .add(path, &branch)
        .context("Error creating worktree")?;

    println!("{} Worktree created successfully!", "✓".green().bold());
    println!("   Path: {path}");
    if !branch.is_empty() {
        println!("   Branch: {branch}");
    }

    Ok(())
}
