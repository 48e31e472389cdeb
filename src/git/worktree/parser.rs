//! Worktree output parsing
//!
//! Parses git worktree list --porcelain output into structured data.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// One worktree as reported by `git worktree list --porcelain`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorktreeRecord {
    #[serde(rename = "worktree")]
    pub path: String,
    #[serde(rename = "HEAD")]
    pub head: String,
    /// Branch name without the `refs/heads/` prefix; empty when detached
    pub branch: String,
    pub bare: bool,
    pub locked: bool,
    pub prunable: bool,
}

impl WorktreeRecord {
    /// Final path component, or the whole path when there is none.
    pub fn name(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path)
    }

    pub fn is_detached(&self) -> bool {
        self.branch.is_empty() && !self.bare
    }
}

/// Parse git worktree list --porcelain output
///
/// Blocks are separated by blank lines. Records are emitted in source order,
/// and a block that never set `worktree` is dropped. Parsing never fails.
///
/// Example input:
/// ```text
/// worktree /home/user/repo
/// HEAD abc123def456
/// branch refs/heads/main
///
/// worktree /home/user/repo-feature
/// HEAD def789abc012
/// branch refs/heads/feature
/// locked
/// ```
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeRecord> {
    let mut worktrees = Vec::new();
    let mut current = WorktreeRecord::default();

    for line in output.trim().lines() {
        let line = line.trim();

        if line.is_empty() {
            if !current.path.is_empty() {
                worktrees.push(std::mem::take(&mut current));
            }
            continue;
        }

        let (key, value) = match line.split_once(' ') {
            Some((key, value)) => (key, Some(value)),
            None => (line, None),
        };

        match (key, value) {
            ("worktree", Some(path)) => current.path = path.to_string(),
            ("HEAD", Some(head)) => current.head = head.to_string(),
            ("branch", Some(branch)) => {
                current.branch = branch
                    .strip_prefix("refs/heads/")
                    .unwrap_or(branch)
                    .to_string();
            }
            ("bare", _) => current.bare = true,
            ("locked", _) => current.locked = true,
            ("prunable", _) => current.prunable = true,
            _ => debug!(key, "ignoring porcelain line"),
        }
    }

    if !current.path.is_empty() {
        worktrees.push(current);
    }

    worktrees
}
