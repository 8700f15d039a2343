//! Configuration module for solbundle
//!
//! Resolution order:
//! 1. Environment variables (`<NETWORK>_RPC`, `PRIVATE_KEY`, `ETHERSCAN_API_KEY`)
//! 2. Project config (`solbundle.toml`)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    build_environments, declarations, process_env, ConfigWarning, EXPLORER_API_KEY_VAR,
    PLACEHOLDER_RPC_URL, PRIVATE_KEY_VAR,
};
pub use types::{
    CompilerConfig, Config, ContractConfig, NetworkConfig, OptimizerConfig, PathsConfig,
    CONFIG_FILE_NAME,
};
