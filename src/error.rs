//! Error kinds surfaced by the worktree registry and the shell installer

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorktreeError {
    /// The external tool could not be launched or exited non-zero.
    #[error("{command} failed: {detail}")]
    Execution { command: String, detail: String },

    /// No worktree matched the requested name or path.
    #[error("worktree '{name}' not found")]
    NotFound { name: String },

    /// The listing was empty, so there is no main worktree to return.
    #[error("no worktrees found")]
    NoWorktrees,

    /// Shell detection, config path resolution or config loading failed.
    #[error("{0}")]
    Configuration(String),

    /// File I/O against a shell configuration file failed.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WorktreeError {
    pub fn not_found(name: impl Into<String>) -> Self {
        WorktreeError::NotFound { name: name.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        WorktreeError::Configuration(message.into())
    }

    /// True for the configuration kind, which covers installer file I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            WorktreeError::Configuration(_) | WorktreeError::Io { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WorktreeError::NotFound { .. } | WorktreeError::NoWorktrees
        )
    }
}

pub type Result<T> = std::result::Result<T, WorktreeError>;
