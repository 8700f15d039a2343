//! Deployment Use Case
//!
//! Orchestrates the deployment-lock flow:
//! 1. Look up the requested environment
//! 2. Validate its declarations
//! 3. Load the lock (if the environment persists deployments)
//! 4. Resolve the plan
//!
//! and, once the external executor has run:
//! 5. Match results to the plan and write the lock back
//!
//! All decisions live in domain services; this type only sequences I/O.

use crate::domain::entities::{DeploymentLock, Environment, Environments};
use crate::domain::ports::LockfileRepository;
use crate::domain::services::{
    ensure_unique_names, lock_updates, resolve, DeploymentPlan, DeploymentResult,
};
use crate::error::{BundleError, BundleResult};

use super::result::{CommitOutcome, ForgetOutcome};

/// Deployment use case, parameterized by its lock persistence port
pub struct DeploymentUseCase<LR>
where
    LR: LockfileRepository,
{
    lockfile_repo: LR,
}

impl<LR> DeploymentUseCase<LR>
where
    LR: LockfileRepository,
{
    pub fn new(lockfile_repo: LR) -> Self {
        Self { lockfile_repo }
    }

    pub fn repository(&self) -> &LR {
        &self.lockfile_repo
    }

    /// Plan the deployment for the environment named `network`
    pub fn plan(&self, environments: &Environments, network: &str) -> BundleResult<DeploymentPlan> {
        let environment = environments.get(network)?;
        self.plan_environment(environment)
    }

    /// Plan the deployment for an already resolved environment
    ///
    /// Declarations are checked before the lock file is touched.
    pub fn plan_environment(&self, environment: &Environment) -> BundleResult<DeploymentPlan> {
        ensure_unique_names(environment.name(), environment.contracts())?;

        let lock = match environment.lock_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading deployment lock");
                Some(self.lockfile_repo.load(path)?)
            }
            None => None,
        };

        let plan = resolve(environment, environment.contracts(), lock.as_ref())?;
        tracing::info!(
            network = plan.network.as_str(),
            contracts = plan.len(),
            pending = plan.pending().count(),
            "planned deployment"
        );
        Ok(plan)
    }

    /// Record successful executor results in the plan's lock file
    ///
    /// Results are validated against the plan first; an invalid result leaves
    /// the lock file untouched. Entries not covered by `results` are preserved.
    pub fn commit(
        &self,
        plan: &DeploymentPlan,
        results: &[DeploymentResult],
    ) -> BundleResult<CommitOutcome> {
        let updates = lock_updates(plan, results)?;
        let written: Vec<String> = updates.entries.iter().map(|(name, _)| name.clone()).collect();

        let (lock, persisted_to) = match &plan.lock_file {
            Some(path) if !updates.is_empty() => {
                let lock = self
                    .lockfile_repo
                    .update(path, |lock| updates.apply_to(lock))?;
                tracing::info!(
                    path = %path.display(),
                    written = written.len(),
                    "updated deployment lock"
                );
                (lock, Some(path.clone()))
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "no results to record");
                (self.lockfile_repo.load(path)?, None)
            }
            None => {
                tracing::debug!(
                    network = plan.network.as_str(),
                    "environment has no lock file, nothing persisted"
                );
                let mut lock = DeploymentLock::new();
                updates.apply_to(&mut lock);
                (lock, None)
            }
        };

        Ok(CommitOutcome {
            written,
            ignored: updates.ignored,
            lock,
            persisted_to,
        })
    }

    /// Remove lock entries so the named contracts deploy again on the next plan
    pub fn forget(&self, environment: &Environment, contracts: &[String]) -> BundleResult<ForgetOutcome> {
        let path = environment
            .lock_file()
            .ok_or_else(|| BundleError::NoLockFile {
                network: environment.name().to_string(),
            })?;

        let mut removed = Vec::new();
        let mut missing = Vec::new();
        self.lockfile_repo.update(path, |lock| {
            for contract in contracts {
                if lock.remove(contract).is_some() {
                    removed.push(contract.clone());
                } else {
                    missing.push(contract.clone());
                }
            }
        })?;

        tracing::info!(
            path = %path.display(),
            removed = removed.len(),
            "removed lock entries"
        );
        Ok(ForgetOutcome {
            removed,
            missing,
            lock_file: path.to_path_buf(),
        })
    }
}
