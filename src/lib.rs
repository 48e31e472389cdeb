pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod shell;

pub use error::{Result, WorktreeError};
