//! Git command runner abstraction
//!
//! Every interaction with the external version-control binary goes through
//! [`GitExecutor`], so the registry can be exercised against a recording
//! executor in tests and against the real binary in production.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;

use crate::error::{Result, WorktreeError};

/// Runs the external binary with a given argument list.
pub trait GitExecutor {
    /// Run with stdout and stderr captured; return stdout on success.
    fn capture(&self, args: &[&str]) -> Result<String>;

    /// Run with stdout and stderr passed through to the terminal.
    fn stream(&self, args: &[&str]) -> Result<()>;
}

/// Executor backed by `std::process::Command`.
#[derive(Debug, Clone)]
pub struct SystemGit {
    binary: String,
    working_dir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: None,
        }
    }

    /// Run every invocation from `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn render(&self, args: &[&str]) -> String {
        format!("{} {}", self.binary, args.join(" "))
    }

    fn launch_failed(&self, args: &[&str], err: std::io::Error) -> WorktreeError {
        let command = self.render(args);
        debug!(%command, error = %err, "failed to launch");
        WorktreeError::Execution {
            command,
            detail: format!("unable to launch: {err}"),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitExecutor for SystemGit {
    fn capture(&self, args: &[&str]) -> Result<String> {
        debug!(binary = %self.binary, ?args, "capturing");
        let output: Output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| self.launch_failed(args, err))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            let command = self.render(args);
            debug!(%command, %detail, "command failed");
            return Err(WorktreeError::Execution { command, detail });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn stream(&self, args: &[&str]) -> Result<()> {
        debug!(binary = %self.binary, ?args, "streaming");
        let status = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| self.launch_failed(args, err))?;

        if !status.success() {
            let command = self.render(args);
            debug!(%command, %status, "command failed");
            return Err(WorktreeError::Execution {
                command,
                detail: status.to_string(),
            });
        }

        Ok(())
    }
}
