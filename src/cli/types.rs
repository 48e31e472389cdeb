use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "worktree")]
#[command(about = "A friendly CLI for managing git worktrees", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Enable debug logging on stderr (WORKTREES_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new worktree
    ///
    /// If no branch is given, a new branch named after the final path
    /// component is created.
    #[command(visible_aliases = ["create", "new"])]
    Add {
        /// Where to create the worktree
        path: String,

        /// Name of the new branch
        branch: Option<String>,
    },

    /// List all worktrees
    #[command(visible_aliases = ["ls", "l"])]
    List {
        /// Print the worktrees as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a worktree (it must have no uncommitted changes)
    #[command(visible_aliases = ["rm", "delete", "del"])]
    Remove {
        /// Worktree name or path
        target: String,
    },

    /// Print the path of a worktree by name, for the wt shell function
    #[command(visible_aliases = ["cd", "goto", "go"])]
    Switch {
        /// Worktree name, or any part of its path
        name: Option<String>,
    },

    /// Print the path of the main worktree, for the wt shell function
    #[command(visible_aliases = ["og", "main"])]
    Original,

    /// Clean up stale worktree references
    #[command(visible_alias = "prune")]
    Clean,

    /// Install the wt shell function into your shell config
    Install,

    /// Print the wt shell function for a shell (bash, zsh, fish)
    Init {
        shell: String,
    },

    /// Generate shell completions (bash, zsh, fish)
    Completions {
        shell: String,
    },
}
