//! Shared test helpers for worktree integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use worktrees::git::{SystemGit, WorktreeManager};

fn git(args: &[&str], dir: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {}: {e}", args.join(" ")));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Test helper: Create a temporary git repository with initial commit
///
/// The repository lives in `<tempdir>/repo` so sibling worktrees can be
/// created next to it inside the same temp directory.
pub fn init_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir
        .path()
        .canonicalize()
        .expect("Failed to canonicalize temp directory");
    let repo_root = root.join("repo");
    fs::create_dir(&repo_root).expect("Failed to create repo directory");

    git(&["init"], &repo_root);
    git(&["config", "user.email", "test@test.com"], &repo_root);
    git(&["config", "user.name", "Test User"], &repo_root);

    fs::write(repo_root.join("README.md"), "# Test Repository\n")
        .expect("Failed to write README.md");

    git(&["add", "."], &repo_root);
    git(&["commit", "-m", "Initial commit"], &repo_root);
    git(&["branch", "-M", "main"], &repo_root);

    (temp_dir, repo_root)
}

pub fn manager_for(repo_root: &Path) -> WorktreeManager<SystemGit> {
    WorktreeManager::new(SystemGit::default().in_dir(repo_root))
}

/// Sibling directory of the repository, as a string for the registry API
pub fn sibling(repo_root: &Path, name: &str) -> String {
    repo_root
        .parent()
        .expect("repo has a parent directory")
        .join(name)
        .to_string_lossy()
        .into_owned()
}
