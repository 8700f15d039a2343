//! Deploy Results
//!
//! Outcome types for commit and forget operations.

use std::path::PathBuf;

use crate::domain::entities::DeploymentLock;

/// Result of recording executor results
#[derive(Debug, Clone, Default)]
pub struct CommitOutcome {
    /// Contracts whose lock entry was written
    pub written: Vec<String>,
    /// Results dropped because the plan skipped the contract
    pub ignored: Vec<String>,
    /// Lock contents after the commit
    pub lock: DeploymentLock,
    /// Where the lock was saved; `None` when nothing was persisted
    pub persisted_to: Option<PathBuf>,
}

impl CommitOutcome {
    pub fn has_changes(&self) -> bool {
        !self.written.is_empty()
    }
}

/// Result of removing entries from a lock
#[derive(Debug, Clone, Default)]
pub struct ForgetOutcome {
    /// Entries that were removed
    pub removed: Vec<String>,
    /// Requested contracts with no entry in the lock
    pub missing: Vec<String>,
    pub lock_file: PathBuf,
}
