//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::{NetworkName, PluginKind};
use crate::error::BundleResult;

use super::loader::{self, ConfigWarning};

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "solbundle.toml";

/// Solidity compiler settings, forwarded to the build tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default = "default_solc_version")]
    pub version: String,

    /// Append the CBOR metadata hash to the bytecode
    #[serde(default)]
    pub append_cbor: bool,

    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            version: default_solc_version(),
            append_cbor: false,
            optimizer: OptimizerConfig::default(),
        }
    }
}

fn default_solc_version() -> String {
    "0.8.20".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_optimizer_runs")]
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: default_optimizer_runs(),
        }
    }
}

fn default_optimizer_runs() -> u32 {
    200
}

/// Project layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_sources")]
    pub sources: PathBuf,

    #[serde(default = "default_tests")]
    pub tests: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            tests: default_tests(),
        }
    }
}

fn default_sources() -> PathBuf {
    PathBuf::from("src")
}

fn default_tests() -> PathBuf {
    PathBuf::from("test")
}

/// One `[[contracts]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub name: String,

    /// Array (positional) or table (named) constructor arguments
    #[serde(default = "default_args")]
    pub args: Value,

    /// Forwarded to the executor untouched
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl ContractConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: default_args(),
            options: Map::new(),
        }
    }
}

fn default_args() -> Value {
    Value::Array(Vec::new())
}

/// One `[networks.<name>]` table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// RPC endpoint; `<NETWORK>_RPC` overrides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Relative paths resolve against the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_file: Option<PathBuf>,

    #[serde(default)]
    pub verify: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginKind>,

    /// Sign with `PRIVATE_KEY`
    #[serde(default)]
    pub deployer: bool,

    /// Replaces the top-level `[[contracts]]` for this network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<ContractConfig>>,
}

/// Main configuration structure
///
/// Network keys are validated against the known networks when environments
/// are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default = "default_contracts")]
    pub contracts: Vec<ContractConfig>,

    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compiler: CompilerConfig::default(),
            paths: PathsConfig::default(),
            contracts: default_contracts(),
            networks: default_networks(),
        }
    }
}

fn default_contracts() -> Vec<ContractConfig> {
    vec![ContractConfig::new("Miller")]
}

fn default_networks() -> BTreeMap<String, NetworkConfig> {
    let mut networks = BTreeMap::new();
    networks.insert(NetworkName::Hardhat.to_string(), NetworkConfig::default());
    networks.insert(
        NetworkName::Localhost.to_string(),
        NetworkConfig {
            url: Some("http://127.0.0.1:8545".to_string()),
            lock_file: Some(PathBuf::from("./local.deployment-lock.json")),
            ..NetworkConfig::default()
        },
    );
    networks.insert(
        NetworkName::Mainnet.to_string(),
        NetworkConfig {
            lock_file: Some(PathBuf::from("./deployment-lock.json")),
            verify: true,
            plugins: vec![PluginKind::Verify],
            deployer: true,
            ..NetworkConfig::default()
        },
    );
    networks
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BundleResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BundleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `path`, or fall back to built-in defaults when it doesn't exist
    pub fn load_or_default(path: &Path) -> BundleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Contracts declared for a network (network override, else top-level)
    pub fn contracts_for(&self, network: NetworkName) -> &[ContractConfig] {
        self.networks
            .get(network.as_str())
            .and_then(|n| n.contracts.as_deref())
            .unwrap_or(&self.contracts)
    }
}
