//! Shell detection and `wt` shell-function integration
//!
//! - `profile`: maps `$SHELL` to the rc file the integration lives in
//! - `scripts`: the `wt` function for each shell family
//! - `install`: the idempotent append into the rc file

pub mod install;
pub mod profile;
pub mod scripts;

use std::fmt;
use std::str::FromStr;

use crate::error::WorktreeError;

pub use install::{install, InstallOutcome};
pub use profile::{ShellEnv, ShellProfile};
pub use scripts::{script, INTEGRATION_MARKER};

/// Shells the integration supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub fn name(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = WorktreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(WorktreeError::configuration(format!(
                "unsupported shell: {s}. Supported shells: bash, zsh, fish"
            ))),
        }
    }
}
