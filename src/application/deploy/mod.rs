//! Deploy Module
//!
//! Orchestrates the plan/commit flow around the deployment lock.
//!
//! ## Structure
//!
//! - `result` - Outcome types (`CommitOutcome`, `ForgetOutcome`)
//! - `use_case` - Core use case logic (`DeploymentUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use solbundle::application::deploy::DeploymentUseCase;
//! use solbundle::infrastructure::JsonLockfileRepository;
//!
//! let use_case = DeploymentUseCase::new(JsonLockfileRepository::new());
//! let plan = use_case.plan(&environments, "localhost")?;
//! // hand `plan` to the executor, then record what it deployed
//! let outcome = use_case.commit(&plan, &results)?;
//! ```

mod result;
mod use_case;

pub use result::{CommitOutcome, ForgetOutcome};
pub use use_case::DeploymentUseCase;
