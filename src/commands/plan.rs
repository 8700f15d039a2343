//! Plan command handler

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use solbundle::application::DeploymentUseCase;
use solbundle::domain::ports::FileSystem;
use solbundle::infrastructure::{JsonLockfileRepository, LocalFs};
use solbundle::presentation::output::{emit_json, json_event, render_plan};
use solbundle::presentation::OutputFormat;

use super::Workspace;

pub fn cmd_plan(
    config: Option<&Path>,
    network: &str,
    out: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let workspace = Workspace::load(config)?;
    let use_case = DeploymentUseCase::new(JsonLockfileRepository::new());
    let plan = use_case.plan(&workspace.environments, network)?;

    if let Some(out) = out {
        let mut content = serde_json::to_string_pretty(&plan)?;
        content.push('\n');
        LocalFs::new()
            .write(out, &content)
            .with_context(|| format!("failed to write plan to {}", out.display()))?;
        tracing::info!(path = %out.display(), "wrote plan");
    }

    match format {
        OutputFormat::Json => emit_json(&json_event(
            "plan",
            json!({
                "plan": plan,
                "pending": plan.pending().count(),
                "upToDate": plan.is_up_to_date(),
            }),
        ))?,
        OutputFormat::Text => {
            print!("{}", render_plan(&plan));
            if let Some(out) = out {
                println!("Plan written to {}", out.display());
            }
        }
    }
    Ok(())
}
