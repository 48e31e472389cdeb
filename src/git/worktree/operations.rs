//! Worktree operations
//!
//! Domain operations over the external tool: list, add, remove, prune and
//! lookup by name. Nothing is cached; every listing re-runs the tool.

use tracing::debug;

use crate::error::{Result, WorktreeError};
use crate::git::runner::GitExecutor;

use super::parser::{parse_worktree_list, WorktreeRecord};
use super::resolve::resolve;

/// Build the `git worktree add` argument list.
///
/// With a branch: `worktree add -b <branch> <path>`.
/// Without one: `worktree add <path>`.
pub fn add_args<'a>(path: &'a str, branch: &'a str) -> Vec<&'a str> {
    let mut args = vec!["worktree", "add"];
    if !branch.is_empty() {
        args.push("-b");
        args.push(branch);
    }
    args.push(path);
    args
}

pub struct WorktreeManager<E> {
    git: E,
}

impl<E: GitExecutor> WorktreeManager<E> {
    pub fn new(git: E) -> Self {
        Self { git }
    }

    /// List all worktrees, main worktree first
    pub fn list(&self) -> Result<Vec<WorktreeRecord>> {
        let stdout = self.git.capture(&["worktree", "list", "--porcelain"])?;
        let worktrees = parse_worktree_list(&stdout);
        debug!(count = worktrees.len(), "parsed worktree listing");
        Ok(worktrees)
    }

    /// Create a worktree at `path`, creating `branch` when it is non-empty
    pub fn add(&self, path: &str, branch: &str) -> Result<()> {
        self.git.stream(&add_args(path, branch))
    }

    /// Remove the worktree at `path`
    ///
    /// Git refuses dirty worktrees; that refusal surfaces as an execution error.
    pub fn remove(&self, path: &str) -> Result<()> {
        self.git.stream(&["worktree", "remove", path])
    }

    /// Prune stale worktree administrative files
    pub fn prune(&self) -> Result<()> {
        self.git.stream(&["worktree", "prune", "-v"])
    }

    pub fn find_by_name(&self, token: &str) -> Result<WorktreeRecord> {
        let worktrees = self.list()?;
        resolve(&worktrees, token).cloned()
    }

    /// The main worktree, which git always lists first
    pub fn original(&self) -> Result<WorktreeRecord> {
        self.list()?
            .into_iter()
            .next()
            .ok_or(WorktreeError::NoWorktrees)
    }

    /// Resolve a removal target by name, falling back to treating `token` as a path.
    pub fn resolve_remove_target(&self, token: &str) -> Result<String> {
        match self.find_by_name(token) {
            Ok(record) => Ok(record.path),
            Err(err) if err.is_not_found() => {
                debug!(token, "no worktree matched, using token as path");
                Ok(token.to_string())
            }
            Err(err) => Err(err),
        }
    }
}
