//! Registry operations against a real repository

use std::fs;

use worktrees::error::WorktreeError;

use super::helpers::{init_test_repo, manager_for, sibling};

#[test]
fn test_list_main_worktree_only() {
    let (_tmp, repo) = init_test_repo();
    let worktrees = manager_for(&repo).list().unwrap();

    assert_eq!(worktrees.len(), 1);
    assert_eq!(worktrees[0].path, repo.to_string_lossy());
    assert_eq!(worktrees[0].branch, "main");
    assert!(!worktrees[0].head.is_empty());
}

#[test]
fn test_add_then_list_preserves_order() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);

    let feature = sibling(&repo, "feature");
    manager.add(&feature, "feature-x").unwrap();

    let worktrees = manager.list().unwrap();
    assert_eq!(worktrees.len(), 2);
    assert_eq!(worktrees[0].path, repo.to_string_lossy());
    assert_eq!(worktrees[1].path, feature);
    assert_eq!(worktrees[1].branch, "feature-x");
}

#[test]
fn test_add_without_branch_uses_git_default() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);

    let hotfix = sibling(&repo, "hotfix");
    manager.add(&hotfix, "").unwrap();

    let found = manager.find_by_name("hotfix").unwrap();
    assert_eq!(found.path, hotfix);
}

#[test]
fn test_add_existing_branch_fails() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);

    let err = manager.add(&sibling(&repo, "dup"), "main").unwrap_err();
    assert!(matches!(err, WorktreeError::Execution { .. }));
}

#[test]
fn test_find_by_name_and_remove() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);

    let api = sibling(&repo, "payments-api");
    manager.add(&api, "payments-api").unwrap();

    let target = manager.resolve_remove_target("payments-api").unwrap();
    assert_eq!(target, api);

    manager.remove(&target).unwrap();
    assert_eq!(manager.list().unwrap().len(), 1);
}

#[test]
fn test_remove_dirty_worktree_refused() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);

    let dirty = sibling(&repo, "dirty");
    manager.add(&dirty, "dirty").unwrap();
    fs::write(format!("{dirty}/scratch.txt"), "wip\n").unwrap();

    let err = manager.remove(&dirty).unwrap_err();
    assert!(matches!(err, WorktreeError::Execution { .. }));
    assert_eq!(manager.list().unwrap().len(), 2);
}

#[test]
fn test_prune_drops_deleted_worktree() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);

    let gone = sibling(&repo, "gone");
    manager.add(&gone, "gone").unwrap();
    fs::remove_dir_all(&gone).unwrap();

    manager.prune().unwrap();
    assert_eq!(manager.list().unwrap().len(), 1);
}

#[test]
fn test_original_is_main_checkout() {
    let (_tmp, repo) = init_test_repo();
    let manager = manager_for(&repo);
    manager.add(&sibling(&repo, "side"), "side").unwrap();

    assert_eq!(manager.original().unwrap().path, repo.to_string_lossy());
}

#[test]
fn test_list_outside_repository_is_execution_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let err = manager_for(tmp.path()).list().unwrap_err();
    assert!(matches!(err, WorktreeError::Execution { .. }));
}
