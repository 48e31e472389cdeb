//! Print the path of a worktree resolved by name
//! Usage: worktree switch <name>
//!
//! On success stdout holds only the path. Everything else goes to stderr so
//! the `wt` shell function can tell a path from a diagnostic.

use anyhow::{bail, Result};
use std::io::{self, Write};

use crate::error::WorktreeError;
use crate::git::{resolve, GitExecutor, WorktreeManager, WorktreeRecord};

pub fn execute<E: GitExecutor>(manager: &WorktreeManager<E>, name: Option<&str>) -> Result<()> {
    let worktrees = manager.list()?;

    let Some(name) = name else {
        eprint!("{}", available(&worktrees));
        bail!("missing worktree name (usage: switch <name>)");
    };

    match resolve(&worktrees, name) {
        Ok(record) => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", record.path)?;
            stdout.flush()?;
            Ok(())
        }
        Err(err @ WorktreeError::NotFound { .. }) => {
            eprint!("{}", available(&worktrees));
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Recovery hint listing every worktree as `name (path)`.
pub fn available(worktrees: &[WorktreeRecord]) -> String {
    let mut out = String::from("Available worktrees:\n");
    if worktrees.is_empty() {
        out.push_str("  (none)\n");
    }
    for wt in worktrees {
        out.push_str(&format!("  - {} ({})\n", wt.name(), wt.path));
    }
    out
}
