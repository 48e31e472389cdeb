//! Git worktree registry
//!
//! ## Module structure
//!
//! - `parser`: `git worktree list --porcelain` parsing
//! - `operations`: list, add, remove, prune and lookup over a [`GitExecutor`]
//! - `resolve`: name-to-worktree matching
//!
//! [`GitExecutor`]: crate::git::runner::GitExecutor

mod operations;
mod parser;
mod resolve;

pub use operations::{add_args, WorktreeManager};
pub use parser::{parse_worktree_list, WorktreeRecord};
pub use resolve::resolve;
