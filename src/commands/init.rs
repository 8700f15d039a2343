//! Init command - write a starter solbundle.toml

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;

use solbundle::domain::ports::FileSystem;
use solbundle::infrastructure::LocalFs;
use solbundle::presentation::output::{emit_json, json_event};
use solbundle::presentation::OutputFormat;

/// Starter configuration; matches the built-in defaults
pub(crate) const TEMPLATE: &str = r#"# solbundle configuration
#
# Environment variables:
#   PRIVATE_KEY        deployer key for networks with `deployer = true`
#   <NETWORK>_RPC      overrides a network's url (e.g. MAINNET_RPC)
#   ETHERSCAN_API_KEY  used by networks with `verify = true`

[compiler]
version = "0.8.20"
append_cbor = false

[paths]
sources = "src"
tests = "test"

# Declaration order is deployment order.
[[contracts]]
name = "Miller"
args = []

[networks.hardhat]

[networks.localhost]
url = "http://127.0.0.1:8545"
lock_file = "./local.deployment-lock.json"

[networks.mainnet]
lock_file = "./deployment-lock.json"
verify = true
plugins = ["verify"]
deployer = true
"#;

pub fn cmd_init(config: Option<&Path>, force: bool, format: OutputFormat) -> Result<()> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .context("failed to read current directory")?
            .join(solbundle::config::CONFIG_FILE_NAME),
    };
    let fs = LocalFs::new();

    if fs.exists(&path) && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs.write(&path, TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote config template");

    match format {
        OutputFormat::Json => emit_json(&json_event("init", json!({ "path": path })))?,
        OutputFormat::Text => println!("Created {}", path.display()),
    }
    Ok(())
}
