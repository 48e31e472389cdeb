//! End-to-end checks of the compiled `worktree` binary

use std::path::Path;
use std::process::{Command, Output};

use super::helpers::{init_test_repo, manager_for, sibling};

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_worktree"))
        .args(args)
        .current_dir(dir)
        .env_remove("WORKTREES_GIT")
        .env_remove("WORKTREES_LOG")
        .output()
        .expect("Failed to run worktree binary")
}

#[test]
fn test_original_prints_bare_path() {
    let (_tmp, repo) = init_test_repo();
    let output = run(&["og"], &repo);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), repo.to_string_lossy());
}

#[test]
fn test_switch_prints_bare_path() {
    let (_tmp, repo) = init_test_repo();
    let feature = sibling(&repo, "feature");
    manager_for(&repo).add(&feature, "feature").unwrap();

    let output = run(&["switch", "feature"], &repo);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), feature);
}

#[test]
fn test_switch_not_found_lists_available_on_stderr() {
    let (_tmp, repo) = init_test_repo();
    let output = run(&["cd", "does-not-exist"], &repo);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Available worktrees:"));
    assert!(stderr.contains("worktree 'does-not-exist' not found"));
}

#[test]
fn test_switch_without_name_fails() {
    let (_tmp, repo) = init_test_repo();
    let output = run(&["switch"], &repo);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_failure_outside_repo_is_single_plain_line() {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_worktree"))
        .arg("list")
        .current_dir(tmp.path())
        .env("GIT_CEILING_DIRECTORIES", tmp.path())
        .env_remove("WORKTREES_GIT")
        .env_remove("WORKTREES_LOG")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .expect("Failed to run worktree binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "unexpected stderr: {stderr}");
    assert!(lines[0].starts_with("error: Error listing worktrees"));
    assert!(!stderr.contains("WARN"));
    assert!(!stderr.contains("\x1b["));
}

#[test]
fn test_list_json() {
    let (_tmp, repo) = init_test_repo();
    let output = run(&["list", "--json"], &repo);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["branch"], "main");
}

#[test]
fn test_init_prints_script() {
    let (_tmp, repo) = init_test_repo();
    let output = run(&["init", "fish"], &repo);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("function wt"));

    let output = run(&["init", "tcsh"], &repo);
    assert!(!output.status.success());
}

#[test]
fn test_install_is_idempotent() {
    let (tmp, repo) = init_test_repo();
    let home = tmp.path().join("home");
    std::fs::create_dir(&home).unwrap();

    for _ in 0..2 {
        let output = Command::new(env!("CARGO_BIN_EXE_worktree"))
            .arg("install")
            .current_dir(&repo)
            .env("HOME", &home)
            .env("SHELL", "/bin/zsh")
            .env_remove("XDG_CONFIG_HOME")
            .output()
            .unwrap();
        assert!(output.status.success());
    }

    let content = std::fs::read_to_string(home.join(".zshrc")).unwrap();
    assert_eq!(
        content.matches(worktrees::shell::INTEGRATION_MARKER).count(),
        1
    );
}
