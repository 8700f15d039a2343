//! Network value object - the closed set of deployment targets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named deployment target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    /// In-process development chain (state discarded after each run)
    Hardhat,
    /// Persistent local node
    Localhost,
    /// Public production chain
    Mainnet,
}

impl NetworkName {
    pub const ALL: [NetworkName; 3] = [
        NetworkName::Hardhat,
        NetworkName::Localhost,
        NetworkName::Mainnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Hardhat => "hardhat",
            NetworkName::Localhost => "localhost",
            NetworkName::Mainnet => "mainnet",
        }
    }

    /// Chain id used when the configuration does not set one
    pub fn default_chain_id(&self) -> u64 {
        match self {
            NetworkName::Hardhat | NetworkName::Localhost => 31337,
            NetworkName::Mainnet => 1,
        }
    }

    /// Environment variable that overrides this network's RPC url
    pub fn rpc_env_var(&self) -> String {
        format!("{}_RPC", self.as_str().to_ascii_uppercase())
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hardhat" => Ok(NetworkName::Hardhat),
            "localhost" => Ok(NetworkName::Localhost),
            "mainnet" => Ok(NetworkName::Mainnet),
            _ => Err(()),
        }
    }
}
