//! User-facing command implementations
//!
//! Each module renders its own human-oriented output. `switch` and `original`
//! are the exception: on success they print a bare path for the `wt` shell
//! function to capture.

pub mod add;
pub mod clean;
pub mod completions;
pub mod init;
pub mod install;
pub mod list;
pub mod original;
pub mod remove;
pub mod switch;

use crate::config::Config;
use crate::git::{SystemGit, WorktreeManager};

/// Registry backed by the configured git binary, run from the current directory
pub fn manager(config: &Config) -> WorktreeManager<SystemGit> {
    WorktreeManager::new(SystemGit::new(config.git.clone()))
}
