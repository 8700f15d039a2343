//! Deployment lock entity - records deployed contract addresses
//!
//! The lock is used to skip contracts that are already deployed with the same
//! arguments on the same chain. It's a pure data structure - I/O operations
//! are handled by LockfileRepository.

use std::collections::BTreeMap;

use crate::domain::value_objects::{ArgsFingerprint, ContractAddress};

/// Lock entry for a deployed contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    address: ContractAddress,
    args_fingerprint: ArgsFingerprint,
    chain_id: u64,
}

impl LockEntry {
    pub fn new(address: ContractAddress, args_fingerprint: ArgsFingerprint, chain_id: u64) -> Self {
        Self {
            address,
            args_fingerprint,
            chain_id,
        }
    }

    pub fn address(&self) -> &ContractAddress {
        &self.address
    }

    pub fn args_fingerprint(&self) -> &ArgsFingerprint {
        &self.args_fingerprint
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// True when this entry can be reused for the given arguments and chain
    pub fn matches(&self, fingerprint: &ArgsFingerprint, chain_id: u64) -> bool {
        self.args_fingerprint == *fingerprint && self.chain_id == chain_id
    }
}

/// The deployment lock, keyed by contract name
///
/// Entries are never pruned implicitly: contracts that disappear from the
/// declarations keep their entry until a caller removes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentLock {
    entries: BTreeMap<String, LockEntry>,
}

impl DeploymentLock {
    /// Create a new empty lock
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, contract: &str) -> Option<&LockEntry> {
        self.entries.get(contract)
    }

    /// Insert or overwrite the entry for a contract
    pub fn set(&mut self, contract: impl Into<String>, entry: LockEntry) -> Option<LockEntry> {
        self.entries.insert(contract.into(), entry)
    }

    pub fn contains(&self, contract: &str) -> bool {
        self.entries.contains_key(contract)
    }

    /// Remove an entry (explicit caller action only)
    pub fn remove(&mut self, contract: &str) -> Option<LockEntry> {
        self.entries.remove(contract)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &LockEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
