//! JSON Lockfile Repository
//!
//! Implements the LockfileRepository port using the JSON lock format:
//!
//! ```json
//! { "Miller": { "address": "0x…", "argsFingerprint": "sha256:…", "chainId": 1 } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeploymentLock, LockEntry};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::lockfile_repository::{LockfileError, LockfileRepository};
use crate::domain::value_objects::{ArgsFingerprint, ContractAddress};
use crate::infrastructure::fs::LocalFs;

/// JSON-based lockfile repository
///
/// Reads and writes go through `F`; the advisory guard taken by `update`
/// always lives on the local disk next to the lock file.
pub struct JsonLockfileRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl JsonLockfileRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<F: FileSystem> JsonLockfileRepository<F> {
    /// Create with a custom file system
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

/// Sibling `<lock file>.lock` used for the advisory lock during updates
///
/// The suffix goes on the full file name: `deployments.lock` is guarded by
/// `deployments.lock.lock`, never by itself.
fn guard_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

impl Default for JsonLockfileRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of a lock entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonLockEntry {
    address: ContractAddress,
    args_fingerprint: ArgsFingerprint,
    chain_id: u64,
}

fn io_error(path: &Path, message: impl ToString) -> LockfileError {
    LockfileError::Io {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

impl<F: FileSystem> LockfileRepository for JsonLockfileRepository<F> {
    fn load(&self, path: &Path) -> Result<DeploymentLock, LockfileError> {
        if !self.fs.exists(path) {
            return Ok(DeploymentLock::new());
        }

        let content = self.fs.read(path).map_err(|e| io_error(path, e))?;
        if content.trim().is_empty() {
            return Ok(DeploymentLock::new());
        }

        let entries: BTreeMap<String, JsonLockEntry> =
            serde_json::from_str(&content).map_err(|e| LockfileError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut lock = DeploymentLock::new();
        for (contract, entry) in entries {
            lock.set(
                contract,
                LockEntry::new(entry.address, entry.args_fingerprint, entry.chain_id),
            );
        }
        Ok(lock)
    }

    fn save(&self, lock: &DeploymentLock, path: &Path) -> Result<(), LockfileError> {
        let entries: BTreeMap<&str, JsonLockEntry> = lock
            .entries()
            .map(|(contract, entry)| {
                (
                    contract,
                    JsonLockEntry {
                        address: entry.address().clone(),
                        args_fingerprint: entry.args_fingerprint().clone(),
                        chain_id: entry.chain_id(),
                    },
                )
            })
            .collect();

        let mut content = serde_json::to_string_pretty(&entries).map_err(|e| io_error(path, e))?;
        content.push('\n');
        self.fs.write(path, &content).map_err(|e| io_error(path, e))
    }

    fn update<A>(&self, path: &Path, apply: A) -> Result<DeploymentLock, LockfileError>
    where
        A: FnOnce(&mut DeploymentLock),
    {
        let guard_path = guard_path(path);
        if let Some(parent) = guard_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        // never truncate: the guard may be held by another process
        let guard = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&guard_path)
            .map_err(|e| io_error(&guard_path, e))?;
        guard
            .lock_exclusive()
            .map_err(|e| io_error(&guard_path, e))?;

        let result = self.load(path).and_then(|mut lock| {
            apply(&mut lock);
            self.save(&lock, path)?;
            Ok(lock)
        });

        let _ = guard.unlock();
        result
    }
}
