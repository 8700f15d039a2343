//! Configuration loading and environment resolution
//!
//! Secrets and endpoints come from environment variables. They are read once,
//! here, and folded into plain `Environment` values; nothing below this layer
//! reads process state.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::domain::entities::{ConstructorArgs, ContractDeclaration, Environment, Environments};
use crate::domain::services::closest_match;
use crate::domain::value_objects::{Credential, NetworkName};
use crate::error::{BundleError, BundleResult};

use super::types::{Config, ContractConfig, NetworkConfig};

/// Deployer signing key
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
/// Block explorer API key used by the verify plugin
pub const EXPLORER_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
/// Endpoint used when a deployer network has no url configured
pub const PLACEHOLDER_RPC_URL: &str = "https://random.com";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BundleResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BundleError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `path`, falling back to built-in defaults when the file is absent
pub fn load_or_default(path: &Path) -> BundleResult<(Config, Vec<ConfigWarning>)> {
    if path.exists() {
        load_with_warnings(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok((Config::default(), Vec::new()))
    }
}

/// Build the configured environments
///
/// Relative lock-file paths resolve against the directory of `config_path`;
/// `env` looks up environment variables (use [`process_env`] in production).
pub fn build_environments<E>(
    config: &Config,
    config_path: &Path,
    env: E,
) -> BundleResult<Environments>
where
    E: Fn(&str) -> Option<String>,
{
    let base_dir = absolute_base(config_path)?;
    let mut environments = Environments::new();

    for (key, network_config) in &config.networks {
        let name: NetworkName = key.parse().map_err(|_| BundleError::InvalidConfig {
            file: config_path.to_path_buf(),
            message: format!(
                "unknown network '{}'{}",
                key,
                closest_match(key, NetworkName::ALL.iter().map(|n| n.as_str()))
                    .map(|s| format!(", did you mean '{}'?", s))
                    .unwrap_or_default()
            ),
        })?;

        let environment = build_environment(
            name,
            network_config,
            config.contracts_for(name),
            &base_dir,
            &env,
        )?;
        environments.insert(environment);
    }

    Ok(environments)
}

fn build_environment<E>(
    name: NetworkName,
    config: &NetworkConfig,
    contracts: &[ContractConfig],
    base_dir: &Path,
    env: &E,
) -> BundleResult<Environment>
where
    E: Fn(&str) -> Option<String>,
{
    let mut environment = Environment::new(name)
        .with_chain_id(config.chain_id.unwrap_or_else(|| name.default_chain_id()))
        .with_verify(config.verify)
        .with_plugins(config.plugins.clone())
        .with_contracts(declarations(contracts)?);

    if let Some(lock_file) = &config.lock_file {
        environment = environment.with_lock_file(anchor(base_dir, lock_file));
    }

    let url = non_empty(env(&name.rpc_env_var())).or_else(|| config.url.clone());
    let url = match url {
        Some(url) => Some(url),
        None if config.deployer => {
            tracing::warn!(
                network = name.as_str(),
                "no RPC url configured (set {}), using placeholder {}",
                name.rpc_env_var(),
                PLACEHOLDER_RPC_URL
            );
            Some(PLACEHOLDER_RPC_URL.to_string())
        }
        None => None,
    };
    if let Some(url) = url {
        let parsed = Url::parse(&url).map_err(|e| BundleError::InvalidRpcUrl {
            network: name.to_string(),
            message: e.to_string(),
        })?;
        environment = environment.with_rpc_url(parsed);
    }

    if config.deployer {
        let key = match non_empty(env(PRIVATE_KEY_VAR)) {
            Some(key) => Credential::new(key),
            None => {
                tracing::warn!(
                    network = name.as_str(),
                    "{} is not set, deployer key defaults to the zero hash",
                    PRIVATE_KEY_VAR
                );
                Credential::zero_hash()
            }
        };
        environment = environment.with_deployer(key);
    }

    if config.verify {
        match non_empty(env(EXPLORER_API_KEY_VAR)) {
            Some(key) => environment = environment.with_explorer_api_key(Credential::new(key)),
            None => tracing::warn!(
                network = name.as_str(),
                "verification is enabled but {} is not set",
                EXPLORER_API_KEY_VAR
            ),
        }
    }

    Ok(environment)
}

/// Turn `[[contracts]]` entries into declarations, keeping their order
pub fn declarations(contracts: &[ContractConfig]) -> BundleResult<Vec<ContractDeclaration>> {
    contracts
        .iter()
        .map(|c| {
            let invalid = |reason: &str| BundleError::InvalidArgs {
                name: c.name.clone(),
                reason: reason.to_string(),
            };
            // TOML has no null; one here is a nan or inf that serde_json could not keep
            if contains_null(&c.args) {
                return Err(invalid("non-finite floats (nan, inf) cannot be fingerprinted"));
            }
            let args = ConstructorArgs::from_value(c.args.clone())
                .ok_or_else(|| invalid("expected an array or a table"))?;
            Ok(ContractDeclaration::new(c.name.clone())
                .with_args(args)
                .with_options(c.options.clone()))
        })
        .collect()
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

/// Environment lookup backed by the process environment
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Directory holding `config_path`, made absolute against the working directory
///
/// Lock paths end up in plan files, which `commit` may read from another directory.
fn absolute_base(config_path: &Path) -> BundleResult<PathBuf> {
    let parent = config_path.parent().unwrap_or_else(|| Path::new(""));
    if parent.is_absolute() {
        return Ok(parent.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    let relative = without_cur_dir(parent);
    if relative.as_os_str().is_empty() {
        Ok(cwd)
    } else {
        Ok(cwd.join(relative))
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Join a relative path onto `base`, dropping `./` components
fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    base.join(without_cur_dir(path))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compiler",
        "version",
        "append_cbor",
        "optimizer",
        "enabled",
        "runs",
        "paths",
        "sources",
        "tests",
        "contracts",
        "name",
        "args",
        "options",
        "networks",
        "url",
        "chain_id",
        "lock_file",
        "verify",
        "plugins",
        "deployer",
    ];

    closest_match(unknown, CANDIDATES.iter().copied())
}
