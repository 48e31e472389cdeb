//! User configuration
//!
//! Optional TOML file, first found of `<config dir>/worktrees/config.toml` and
//! `~/.worktrees.toml`, then `WORKTREES_GIT` / `WORKTREES_BINARY` overrides.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, WorktreeError};

pub const GIT_ENV: &str = "WORKTREES_GIT";
pub const BINARY_ENV: &str = "WORKTREES_BINARY";

#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    git: Option<String>,
    binary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Version-control binary to invoke
    pub git: String,
    /// Program name the `wt` shell function calls
    pub binary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            binary: "worktree".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = config_paths().into_iter().find(|path| path.exists()) {
            config.merge_file(&path)?;
        }
        config.merge_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path).map_err(|source| WorktreeError::Io {
            action: "Unable to read config file",
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: PartialConfig = toml::from_str(&raw).map_err(|err| {
            WorktreeError::configuration(format!(
                "failed to parse config file {}: {err}",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), "loaded config file");
        self.apply(parsed);
        Ok(())
    }

    fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.apply(PartialConfig {
            git: lookup(GIT_ENV),
            binary: lookup(BINARY_ENV),
        });
    }

    fn apply(&mut self, partial: PartialConfig) {
        if let Some(git) = partial.git.filter(|value| !value.trim().is_empty()) {
            self.git = git;
        }
        if let Some(binary) = partial.binary.filter(|value| !value.trim().is_empty()) {
            self.binary = binary;
        }
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("worktrees").join("config.toml"));
    }
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".worktrees.toml"));
    }
    paths
}
