//! Deployment planning service
//!
//! Pure domain logic that decides, per declared contract, whether it must be
//! deployed, can reuse its lock entry, or must be redeployed.
//! No I/O happens here; the lock is loaded by the caller.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::{ConstructorArgs, ContractDeclaration, DeploymentLock, Environment};
use crate::domain::value_objects::{ArgsFingerprint, ContractAddress, NetworkName, PluginKind};
use crate::error::{BundleError, BundleResult};

/// The action to take for a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployAction {
    /// No lock entry: deploy for the first time
    Deploy,
    /// Lock entry matches arguments and chain
    Skip,
    /// Lock entry exists but arguments or chain changed
    Redeploy,
}

impl DeployAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployAction::Deploy => "deploy",
            DeployAction::Skip => "skip",
            DeployAction::Redeploy => "redeploy",
        }
    }

    /// Whether the executor has to broadcast a deployment
    pub fn is_pending(&self) -> bool {
        !matches!(self, DeployAction::Skip)
    }
}

/// A planned action for a single contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedDeployment {
    pub contract: String,
    pub action: DeployAction,
    pub fingerprint: ArgsFingerprint,
    #[serde(default)]
    pub args: ConstructorArgs,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
    /// Address recorded in the lock (Skip and Redeploy only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_address: Option<ContractAddress>,
}

impl PlannedDeployment {
    pub fn should_deploy(&self) -> bool {
        self.action.is_pending()
    }

    pub fn should_skip(&self) -> bool {
        self.action == DeployAction::Skip
    }
}

/// Result of planning a deployment, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlan {
    pub network: NetworkName,
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_file: Option<PathBuf>,
    #[serde(default)]
    pub verify: bool,
    #[serde(default)]
    pub plugins: Vec<PluginKind>,
    pub steps: Vec<PlannedDeployment>,
}

impl DeploymentPlan {
    pub fn actions(&self) -> Vec<(&str, DeployAction)> {
        self.steps
            .iter()
            .map(|s| (s.contract.as_str(), s.action))
            .collect()
    }

    pub fn step(&self, contract: &str) -> Option<&PlannedDeployment> {
        self.steps.iter().find(|s| s.contract == contract)
    }

    /// Steps the executor has to act on
    pub fn pending(&self) -> impl Iterator<Item = &PlannedDeployment> {
        self.steps.iter().filter(|s| s.should_deploy())
    }

    pub fn count(&self, action: DeployAction) -> usize {
        self.steps.iter().filter(|s| s.action == action).count()
    }

    /// True when every contract is already deployed
    pub fn is_up_to_date(&self) -> bool {
        self.steps.iter().all(|s| s.should_skip())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Fail on the first contract name declared twice
pub fn ensure_unique_names(
    environment: NetworkName,
    declarations: &[ContractDeclaration],
) -> BundleResult<()> {
    let mut seen = HashSet::new();
    for decl in declarations {
        if !seen.insert(decl.name()) {
            return Err(BundleError::DuplicateContractName {
                name: decl.name().to_string(),
                environment: environment.to_string(),
            });
        }
    }
    Ok(())
}

/// Resolve declarations against the lock into an ordered plan
///
/// `lock` is `None` when the environment does not persist deployments,
/// in which case every contract is planned for deployment.
pub fn resolve(
    environment: &Environment,
    declarations: &[ContractDeclaration],
    lock: Option<&DeploymentLock>,
) -> BundleResult<DeploymentPlan> {
    ensure_unique_names(environment.name(), declarations)?;

    let chain_id = environment.chain_id();
    let steps = declarations
        .iter()
        .map(|decl| {
            let fingerprint = decl.fingerprint();
            let existing = lock.and_then(|l| l.get(decl.name()));
            let action = match existing {
                None => DeployAction::Deploy,
                Some(entry) if entry.matches(&fingerprint, chain_id) => DeployAction::Skip,
                Some(_) => DeployAction::Redeploy,
            };
            tracing::debug!(
                contract = decl.name(),
                action = action.as_str(),
                fingerprint = fingerprint.short(),
                "resolved contract"
            );
            PlannedDeployment {
                contract: decl.name().to_string(),
                action,
                fingerprint,
                args: decl.args().clone(),
                options: decl.options().clone(),
                previous_address: existing.map(|e| e.address().clone()),
            }
        })
        .collect();

    Ok(DeploymentPlan {
        network: environment.name(),
        chain_id,
        lock_file: environment.lock_file().map(|p| p.to_path_buf()),
        verify: environment.verify(),
        plugins: environment.plugins().to_vec(),
        steps,
    })
}
