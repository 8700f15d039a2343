//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod lockfile_repository;

pub use file_system::{FileSystem, FsError, FsResult};
pub use lockfile_repository::{LockfileError, LockfileRepository, LockfileResult};
