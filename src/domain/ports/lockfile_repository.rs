//! LockfileRepository port - abstraction for deployment lock persistence
//!
//! This trait allows the domain layer to load/save the lock
//! without knowing about JSON serialization details.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::DeploymentLock;
use crate::error::BundleError;

/// Result type for lockfile operations
pub type LockfileResult<T> = Result<T, LockfileError>;

/// Lockfile operation errors
#[derive(Debug, Error)]
pub enum LockfileError {
    /// Content does not follow the lock entry schema
    #[error("malformed lock file {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    /// Reading, writing or locking failed
    #[error("lock file I/O error at {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

impl From<LockfileError> for BundleError {
    fn from(err: LockfileError) -> Self {
        match err {
            LockfileError::Malformed { path, message } => {
                BundleError::MalformedLockFile { path, message }
            }
            LockfileError::Io { path, message } => BundleError::LockfileIo { path, message },
        }
    }
}

/// Abstract repository for deployment lock persistence
pub trait LockfileRepository {
    /// Load the lock at `path`; a missing or blank file is an empty lock
    fn load(&self, path: &Path) -> LockfileResult<DeploymentLock>;

    /// Save the lock to `path`
    fn save(&self, lock: &DeploymentLock, path: &Path) -> LockfileResult<()>;

    /// Read-modify-write under an exclusive lock, returning the saved lock
    fn update<F>(&self, path: &Path, apply: F) -> LockfileResult<DeploymentLock>
    where
        F: FnOnce(&mut DeploymentLock);
}
