//! Config command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use solbundle::presentation::output::{emit_json, environment_json, json_event, render_networks};
use solbundle::presentation::OutputFormat;

use super::Workspace;

/// Print the effective configuration; credentials only ever appear redacted
pub fn cmd_config(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let source = if workspace.config_path.is_file() {
        workspace.config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    match format {
        OutputFormat::Json => {
            let networks: Vec<_> = workspace.environments.iter().map(environment_json).collect();
            emit_json(&json_event(
                "config",
                json!({
                    "source": source,
                    "compiler": workspace.config.compiler,
                    "paths": workspace.config.paths,
                    "networks": networks,
                }),
            ))?;
        }
        OutputFormat::Text => {
            let compiler = &workspace.config.compiler;
            println!("Config: {}", source);
            println!();
            println!("compiler.version     = {}", compiler.version);
            println!("compiler.append_cbor = {}", compiler.append_cbor);
            println!(
                "compiler.optimizer   = {} ({} runs)",
                if compiler.optimizer.enabled { "on" } else { "off" },
                compiler.optimizer.runs
            );
            println!("paths.sources        = {}", workspace.config.paths.sources.display());
            println!("paths.tests          = {}", workspace.config.paths.tests.display());
            println!();
            print!("{}", render_networks(&workspace.environments));
            println!();
            for env in workspace.environments.iter() {
                let names: Vec<&str> = env.contracts().iter().map(|c| c.name()).collect();
                let deployer = env.deployer().map(|c| c.redacted()).unwrap_or("-");
                println!(
                    "{:<9}  deployer: {:<11}  contracts: {}",
                    env.name().as_str(),
                    deployer,
                    names.join(", ")
                );
            }
        }
    }
    Ok(())
}
