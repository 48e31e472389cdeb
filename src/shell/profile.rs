//! Shell profile resolution
//!
//! Maps the interactive shell to the configuration file that receives the
//! `wt` function.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, WorktreeError};

use super::Shell;

/// Environment inputs read by the installer
#[derive(Debug, Clone, Default)]
pub struct ShellEnv {
    /// Raw value of `$SHELL`
    pub shell: Option<String>,
    pub home: Option<PathBuf>,
}

impl ShellEnv {
    pub fn from_process() -> Self {
        Self {
            shell: std::env::var("SHELL").ok(),
            home: dirs::home_dir(),
        }
    }

    /// Shell identifier: the final component of `$SHELL`.
    pub fn detect_shell(&self) -> Result<String> {
        let raw = self
            .shell
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                WorktreeError::configuration(
                    "unable to detect shell from $SHELL environment variable",
                )
            })?;

        let name = Path::new(raw)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(raw);
        Ok(name.to_string())
    }

    fn home(&self) -> Result<&Path> {
        self.home
            .as_deref()
            .ok_or_else(|| WorktreeError::configuration("unable to get home directory"))
    }
}

/// A shell paired with the file its integration is appended to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellProfile {
    pub shell: Shell,
    pub config_path: PathBuf,
}

impl ShellProfile {
    /// Resolve the configuration file for `shell_id` under the home directory.
    ///
    /// - bash: `~/.bashrc` if it exists, otherwise `~/.bash_profile`
    /// - zsh: `~/.zshrc`
    /// - fish: `~/.config/fish/config.fish`, creating the directory if needed
    pub fn resolve(shell_id: &str, env: &ShellEnv) -> Result<Self> {
        let shell: Shell = shell_id.parse()?;
        let home = env.home()?;

        let config_path = match shell {
            Shell::Bash => {
                let bashrc = home.join(".bashrc");
                if bashrc.exists() {
                    bashrc
                } else {
                    home.join(".bash_profile")
                }
            }
            Shell::Zsh => home.join(".zshrc"),
            Shell::Fish => {
                let config_dir = home.join(".config").join("fish");
                fs::create_dir_all(&config_dir).map_err(|source| WorktreeError::Io {
                    action: "Unable to create fish config directory",
                    path: config_dir.clone(),
                    source,
                })?;
                config_dir.join("config.fish")
            }
        };

        debug!(%shell, path = %config_path.display(), "resolved shell config");
        Ok(Self { shell, config_path })
    }
}
