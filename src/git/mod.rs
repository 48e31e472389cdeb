//! Git operations for worktree management
//!
//! This module provides:
//! - The executor seam used to run the external `git` binary
//! - Porcelain parsing and the worktree registry built on top of it

pub mod runner;
pub mod worktree;

pub use runner::{GitExecutor, SystemGit};
pub use worktree::{parse_worktree_list, resolve, WorktreeManager, WorktreeRecord};
