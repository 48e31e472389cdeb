//! Print the `wt` shell function without touching any rc file
//! Usage: worktree init <shell>

use anyhow::Result;
use std::io::{self, Write};

use crate::config::Config;
use crate::shell::{script, Shell};

pub fn execute(config: &Config, shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(script(shell, &config.binary).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
