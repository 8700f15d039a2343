//! Command handlers for the solbundle binary

pub mod commit;
pub mod config;
pub mod forget;
pub mod init;
pub mod networks;
pub mod plan;
mod project_root;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use solbundle::config::{build_environments, process_env, Config};
use solbundle::domain::entities::Environments;

/// Configuration and environments for one invocation
pub(crate) struct Workspace {
    pub config_path: PathBuf,
    pub config: Config,
    pub environments: Environments,
}

impl Workspace {
    /// Load the config (explicit path or discovered) and resolve environments
    pub fn load(config_flag: Option<&Path>) -> Result<Self> {
        let config_path = config_path(config_flag)?;
        let (config, warnings) = Config::load_or_default(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        let environments = build_environments(&config, &config_path, process_env)?;
        tracing::debug!(
            config = %config_path.display(),
            networks = environments.len(),
            "loaded workspace"
        );

        Ok(Self {
            config_path,
            config,
            environments,
        })
    }
}

pub(crate) fn config_path(config_flag: Option<&Path>) -> Result<PathBuf> {
    match config_flag {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Ok(project_root::discover_config(&cwd))
        }
    }
}
