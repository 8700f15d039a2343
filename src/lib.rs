//! solbundle - per-network contract deployment manifests
//!
//! Declares which contracts a project deploys on each network, fingerprints
//! their constructor arguments, and reconciles the declarations with a JSON
//! lock file of earlier deployments. The output is an ordered plan for an
//! external executor; its results are committed back to the lock.
//!
//! ```ignore
//! use solbundle::application::DeploymentUseCase;
//! use solbundle::infrastructure::JsonLockfileRepository;
//!
//! let use_case = DeploymentUseCase::new(JsonLockfileRepository::new());
//! let plan = use_case.plan(&environments, "mainnet")?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CommitOutcome, DeploymentUseCase, ForgetOutcome};
pub use config::Config;
pub use domain::entities::{
    ConstructorArgs, ContractDeclaration, DeploymentLock, Environment, Environments, LockEntry,
};
pub use domain::services::{DeployAction, DeploymentPlan, DeploymentResult, PlannedDeployment};
pub use domain::value_objects::{ArgsFingerprint, ContractAddress, NetworkName};
pub use error::{BundleError, BundleResult};
pub use infrastructure::JsonLockfileRepository;
