//! List worktrees
//! Usage: worktree list [--json]

use anyhow::{Context, Result};
use colored::Colorize;

use crate::git::{GitExecutor, WorktreeManager, WorktreeRecord};

pub fn execute<E: GitExecutor>(manager: &WorktreeManager<E>, json: bool) -> Result<()> {
    let worktrees = manager.list().context("Error listing worktrees")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&worktrees)?);
        return Ok(());
    }

    if worktrees.is_empty() {
        println!("No worktrees found");
        return Ok(());
    }

    print!("{}", render(&worktrees));
    Ok(())
}

/// Human-readable listing; the first entry is marked as the main worktree.
pub fn render(worktrees: &[WorktreeRecord]) -> String {
    let mut out = String::from("Worktrees:\n");

    for (i, wt) in worktrees.iter().enumerate() {
        let icon = if i == 0 { "🏠" } else { "📁" };

        let branch = if wt.bare {
            "bare".to_string()
        } else if wt.branch.is_empty() {
            "detached HEAD".yellow().to_string()
        } else {
            wt.branch.cyan().to_string()
        };

        let mut tags = String::new();
        if wt.bare {
            tags.push_str(" (bare)");
        }
        if wt.locked {
            tags.push_str(" (locked)");
        }
        if wt.prunable {
            tags.push_str(" (prunable)");
        }

        out.push_str(&format!("  {icon} {}\n", wt.name().bold()));
        out.push_str(&format!("     Path: {}\n", wt.path));
        if tags.is_empty() {
            out.push_str(&format!("     Branch: {branch}\n"));
        } else {
            out.push_str(&format!("     Branch: {branch}{}\n", tags.dimmed()));
        }
        if i + 1 < worktrees.len() {
            out.push('\n');
        }
    }

    out
}
