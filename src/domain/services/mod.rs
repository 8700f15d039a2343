//! Domain Services
//!
//! Stateless domain logic:
//! - `planner` - resolve declarations against the lock
//! - `commit` - turn executor results into lock entries
//! - `suggest` - typo suggestions

pub mod commit;
pub mod planner;
mod suggest;

pub use commit::{lock_updates, DeploymentResult, LockUpdates};
pub use planner::{
    ensure_unique_names, resolve, DeployAction, DeploymentPlan, PlannedDeployment,
};
pub use suggest::{closest_match, levenshtein};
