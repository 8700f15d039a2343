//! Networks command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use solbundle::presentation::output::{emit_json, environment_json, json_event, render_networks};
use solbundle::presentation::OutputFormat;

use super::Workspace;

pub fn cmd_networks(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::load(config)?;

    match format {
        OutputFormat::Json => {
            let networks: Vec<_> = workspace.environments.iter().map(environment_json).collect();
            emit_json(&json_event("networks", json!({ "networks": networks })))?;
        }
        OutputFormat::Text => print!("{}", render_networks(&workspace.environments)),
    }
    Ok(())
}
