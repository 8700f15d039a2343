//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeploymentUseCase` - Plan against the lock, commit executor results, forget entries

pub mod deploy;

pub use deploy::{CommitOutcome, DeploymentUseCase, ForgetOutcome};
