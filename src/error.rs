//! Error types for solbundle
//!
//! Library code returns `BundleResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for solbundle operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Main error type for solbundle operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// Requested network is not part of the configured environments
    #[error("unknown environment '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownEnvironment {
        name: String,
        suggestion: Option<String>,
    },

    /// Two declarations share a contract name
    #[error("duplicate contract name '{name}' in declarations for '{environment}'")]
    DuplicateContractName { name: String, environment: String },

    /// Lock file exists but does not match the lock entry schema
    #[error("malformed lock file {path}: {message}")]
    MalformedLockFile { path: PathBuf, message: String },

    /// Executor reported a result for a contract the plan does not contain
    #[error("result for '{contract}' does not correspond to any planned contract")]
    UnplannedResult { contract: String },

    /// Address is not a 0x-prefixed 20-byte hex string
    #[error("invalid contract address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// RPC endpoint is not a valid URL
    #[error("invalid RPC url for '{network}': {message}")]
    InvalidRpcUrl { network: String, message: String },

    /// Contract declaration has an unusable argument bag
    #[error("contract '{name}' has invalid args: {reason}")]
    InvalidArgs { name: String, reason: String },

    /// Environment does not persist deployments
    #[error("environment '{network}' has no lock file configured")]
    NoLockFile { network: String },

    /// Lock file I/O failed
    #[error("lock file I/O error at {path}: {message}")]
    LockfileIo { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error outside the lock file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". Did you mean '{}'?", s),
        None => String::new(),
    }
}
