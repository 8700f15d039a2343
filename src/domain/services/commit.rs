//! Commit service
//!
//! Turns executor results into lock entries. Results are validated against
//! the plan before anything touches the lock file.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeploymentLock, LockEntry};
use crate::domain::services::planner::DeploymentPlan;
use crate::domain::value_objects::ContractAddress;
use crate::error::{BundleError, BundleResult};

/// A successful on-chain deployment reported by the executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentResult {
    pub contract: String,
    pub address: ContractAddress,
}

impl DeploymentResult {
    pub fn new(contract: impl Into<String>, address: ContractAddress) -> Self {
        Self {
            contract: contract.into(),
            address,
        }
    }
}

/// Lock updates derived from a plan and its results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockUpdates {
    /// Entries to write, in plan order
    pub entries: Vec<(String, LockEntry)>,
    /// Contracts whose result was ignored because the plan skipped them
    pub ignored: Vec<String>,
}

impl LockUpdates {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the updates, overwriting existing entries for the same contract
    pub fn apply_to(&self, lock: &mut DeploymentLock) {
        for (contract, entry) in &self.entries {
            lock.set(contract.clone(), entry.clone());
        }
    }
}

/// Match results to Deploy/Redeploy steps and build the entries to record
///
/// Every result must name a planned contract. Results for skipped contracts
/// are ignored; steps without a result are left untouched in the lock.
pub fn lock_updates(
    plan: &DeploymentPlan,
    results: &[DeploymentResult],
) -> BundleResult<LockUpdates> {
    let mut updates = LockUpdates::default();

    for result in results {
        if plan.step(&result.contract).is_none() {
            return Err(BundleError::UnplannedResult {
                contract: result.contract.clone(),
            });
        }
    }

    for step in &plan.steps {
        let Some(result) = results.iter().rev().find(|r| r.contract == step.contract) else {
            continue;
        };
        if step.should_skip() {
            tracing::warn!(
                contract = step.contract.as_str(),
                "ignoring result for a contract the plan skipped"
            );
            updates.ignored.push(step.contract.clone());
            continue;
        }
        updates.entries.push((
            step.contract.clone(),
            LockEntry::new(
                result.address.clone(),
                step.fingerprint.clone(),
                plan.chain_id,
            ),
        ));
    }

    Ok(updates)
}
