//! Domain Entities
//!
//! - `ContractDeclaration` - A contract and its constructor arguments
//! - `Environment` - A resolved deployment target
//! - `DeploymentLock` - Tracks deployed contract addresses

mod declaration;
mod environment;
mod lockfile;

pub use declaration::{ConstructorArgs, ContractDeclaration};
pub use environment::{Environment, Environments};
pub use lockfile::{DeploymentLock, LockEntry};
