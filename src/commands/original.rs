//! Print the main worktree's path
//! Usage: worktree original

use anyhow::Result;
use std::io::{self, Write};

use crate::git::{GitExecutor, WorktreeManager};

pub fn execute<E: GitExecutor>(manager: &WorktreeManager<E>) -> Result<()> {
    let main = manager.original()?;

    // Bare path, no newline: the wt shell function captures this.
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", main.path)?;
    stdout.flush()?;
    Ok(())
}
