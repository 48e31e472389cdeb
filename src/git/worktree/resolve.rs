//! Worktree lookup by user-supplied name

use crate::error::{Result, WorktreeError};

use super::parser::WorktreeRecord;

/// Resolve `token` to a single worktree.
///
/// Records are scanned once in listing order. Each record matches if its
/// final path component equals `token`, or failing that if its full path
/// contains `token`. The first matching record wins, so a substring hit on an
/// earlier record beats an exact basename hit on a later one.
pub fn resolve<'a>(records: &'a [WorktreeRecord], token: &str) -> Result<&'a WorktreeRecord> {
    records
        .iter()
        .find(|record| record.name() == token || record.path.contains(token))
        .ok_or_else(|| WorktreeError::not_found(token))
}
