//! Domain Layer
//!
//! The core of solbundle - pure deployment-planning logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Declarations, environments, the deployment lock
//! - `value_objects/` - Network names, fingerprints, addresses, credentials
//! - `services/` - Planner (resolve) and commit logic
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
