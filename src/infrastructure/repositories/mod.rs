//! Repository implementations

mod lockfile;

pub use lockfile::JsonLockfileRepository;
