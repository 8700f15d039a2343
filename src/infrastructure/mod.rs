//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - JSON deployment lock repository

pub mod fs;
pub mod repositories;

pub use fs::LocalFs;
pub use repositories::JsonLockfileRepository;
