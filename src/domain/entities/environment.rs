//! Environment entity
//!
//! An environment is a fully resolved deployment target: network identity,
//! endpoint, credentials and the contracts declared for it. Values are
//! resolved once by the configuration layer and passed in as plain data.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::entities::ContractDeclaration;
use crate::domain::services::closest_match;
use crate::domain::value_objects::{Credential, NetworkName, PluginKind};
use crate::error::{BundleError, BundleResult};

/// A configured deployment target
#[derive(Debug)]
pub struct Environment {
    name: NetworkName,
    chain_id: u64,
    rpc_url: Option<Url>,
    deployer: Option<Credential>,
    lock_file: Option<PathBuf>,
    verify: bool,
    plugins: Vec<PluginKind>,
    explorer_api_key: Option<Credential>,
    contracts: Vec<ContractDeclaration>,
}

impl Environment {
    pub fn new(name: NetworkName) -> Self {
        Self {
            name,
            chain_id: name.default_chain_id(),
            rpc_url: None,
            deployer: None,
            lock_file: None,
            verify: false,
            plugins: Vec::new(),
            explorer_api_key: None,
            contracts: Vec::new(),
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_rpc_url(mut self, url: Url) -> Self {
        self.rpc_url = Some(url);
        self
    }

    pub fn with_deployer(mut self, key: Credential) -> Self {
        self.deployer = Some(key);
        self
    }

    pub fn with_lock_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lock_file = Some(path.into());
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<PluginKind>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_explorer_api_key(mut self, key: Credential) -> Self {
        self.explorer_api_key = Some(key);
        self
    }

    pub fn with_contracts(mut self, contracts: Vec<ContractDeclaration>) -> Self {
        self.contracts = contracts;
        self
    }

    pub fn name(&self) -> NetworkName {
        self.name
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn rpc_url(&self) -> Option<&Url> {
        self.rpc_url.as_ref()
    }

    pub fn deployer(&self) -> Option<&Credential> {
        self.deployer.as_ref()
    }

    pub fn lock_file(&self) -> Option<&Path> {
        self.lock_file.as_deref()
    }

    pub fn verify(&self) -> bool {
        self.verify
    }

    pub fn plugins(&self) -> &[PluginKind] {
        &self.plugins
    }

    pub fn explorer_api_key(&self) -> Option<&Credential> {
        self.explorer_api_key.as_ref()
    }

    pub fn contracts(&self) -> &[ContractDeclaration] {
        &self.contracts
    }
}

/// All configured environments, keyed by network
#[derive(Debug, Default)]
pub struct Environments {
    by_name: BTreeMap<NetworkName, Environment>,
}

impl Environments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, environment: Environment) {
        self.by_name.insert(environment.name(), environment);
    }

    /// Look up an environment by its configured name
    pub fn get(&self, name: &str) -> BundleResult<&Environment> {
        name.parse::<NetworkName>()
            .ok()
            .and_then(|network| self.by_name.get(&network))
            .ok_or_else(|| BundleError::UnknownEnvironment {
                name: name.to_string(),
                suggestion: closest_match(name, self.by_name.keys().map(|n| n.as_str())),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Environment> {
        self.by_name.values()
    }

    pub fn names(&self) -> impl Iterator<Item = NetworkName> + '_ {
        self.by_name.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_only() -> Environments {
        let mut envs = Environments::new();
        envs.insert(Environment::new(NetworkName::Hardhat));
        envs.insert(
            Environment::new(NetworkName::Localhost).with_lock_file("local.deployment-lock.json"),
        );
        envs
    }

    #[test]
    fn new_environment_uses_default_chain_id() {
        let env = Environment::new(NetworkName::Mainnet);
        assert_eq!(env.chain_id(), 1);
        assert!(env.lock_file().is_none());
        assert!(!env.verify());
    }

    #[test]
    fn get_finds_configured_environment() {
        let envs = local_only();
        let env = envs.get("localhost").unwrap();
        assert_eq!(
            env.lock_file(),
            Some(Path::new("local.deployment-lock.json"))
        );
    }

    #[test]
    fn get_rejects_known_but_unconfigured_network() {
        let envs = local_only();
        let err = envs.get("mainnet").unwrap_err();
        assert!(matches!(err, BundleError::UnknownEnvironment { .. }));
    }

    #[test]
    fn get_suggests_close_name() {
        let envs = local_only();
        match envs.get("locahost").unwrap_err() {
            BundleError::UnknownEnvironment { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("localhost"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn names_are_sorted_by_network() {
        let envs = local_only();
        let names: Vec<_> = envs.names().collect();
        assert_eq!(names, vec![NetworkName::Hardhat, NetworkName::Localhost]);
    }
}
