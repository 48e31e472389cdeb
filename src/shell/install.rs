//! Shell integration installer
//!
//! Detects the shell, resolves its rc file, and appends the `wt` function
//! unless the marker shows it is already there. The append is the only
//! persistent write the tool ever performs.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::info;

use crate::error::{Result, WorktreeError};

use super::profile::{ShellEnv, ShellProfile};
use super::scripts::{script, INTEGRATION_MARKER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(ShellProfile),
    AlreadyInstalled(ShellProfile),
}

impl InstallOutcome {
    pub fn profile(&self) -> &ShellProfile {
        match self {
            InstallOutcome::Installed(profile) | InstallOutcome::AlreadyInstalled(profile) => {
                profile
            }
        }
    }
}

/// Install the `wt` function into the detected shell's configuration file.
///
/// Re-running after a successful install is a no-op that reports
/// [`InstallOutcome::AlreadyInstalled`].
pub fn install(env: &ShellEnv, binary: &str) -> Result<InstallOutcome> {
    let shell_id = env.detect_shell()?;
    let profile = ShellProfile::resolve(&shell_id, env)?;

    let existing = read_existing_config(&profile.config_path)?;
    if existing.contains(INTEGRATION_MARKER) {
        info!(path = %profile.config_path.display(), "integration already present");
        return Ok(InstallOutcome::AlreadyInstalled(profile));
    }

    append_integration(&profile.config_path, &script(profile.shell, binary))?;
    info!(
        shell = %profile.shell,
        path = %profile.config_path.display(),
        "appended shell integration"
    );
    Ok(InstallOutcome::Installed(profile))
}

/// Current file content; a missing file reads as empty.
///
/// rc files are not guaranteed to be UTF-8, so invalid bytes are replaced
/// rather than rejected.
fn read_existing_config(path: &Path) -> Result<String> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(WorktreeError::Io {
            action: "Unable to read config file",
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn append_integration(path: &Path, integration: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| WorktreeError::Io {
            action: "Unable to open config file for writing",
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(integration.as_bytes())
        .map_err(|source| WorktreeError::Io {
            action: "Unable to write integration to config file",
            path: path.to_path_buf(),
            source,
        })
}
