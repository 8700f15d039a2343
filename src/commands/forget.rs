//! Forget command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use solbundle::application::DeploymentUseCase;
use solbundle::infrastructure::JsonLockfileRepository;
use solbundle::presentation::output::{emit_json, json_event, render_forget};
use solbundle::presentation::OutputFormat;

use super::Workspace;

pub fn cmd_forget(
    config: Option<&Path>,
    network: &str,
    contracts: &[String],
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let environment = workspace.environments.get(network)?;

    let use_case = DeploymentUseCase::new(JsonLockfileRepository::new());
    let outcome = use_case.forget(environment, contracts)?;

    match format {
        OutputFormat::Json => emit_json(&json_event(
            "forget",
            json!({
                "network": environment.name(),
                "removed": outcome.removed,
                "missing": outcome.missing,
                "lockFile": outcome.lock_file,
            }),
        ))?,
        OutputFormat::Text => print!("{}", render_forget(&outcome)),
    }
    Ok(())
}
