//! Commit command handler

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use solbundle::application::DeploymentUseCase;
use solbundle::domain::ports::FileSystem;
use solbundle::domain::services::{DeploymentPlan, DeploymentResult};
use solbundle::domain::value_objects::ContractAddress;
use solbundle::infrastructure::{JsonLockfileRepository, LocalFs};
use solbundle::presentation::output::{emit_json, json_event, render_commit};
use solbundle::presentation::OutputFormat;

/// Executor results, as a list of records or a `{ contract: address }` map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultsFile {
    List(Vec<DeploymentResult>),
    Map(BTreeMap<String, ContractAddress>),
}

impl ResultsFile {
    fn into_results(self) -> Vec<DeploymentResult> {
        match self {
            ResultsFile::List(results) => results,
            ResultsFile::Map(map) => map
                .into_iter()
                .map(|(contract, address)| DeploymentResult::new(contract, address))
                .collect(),
        }
    }
}

pub fn cmd_commit(plan_path: &Path, results_path: &Path, format: OutputFormat) -> Result<()> {
    let fs = LocalFs::new();

    let plan: DeploymentPlan = serde_json::from_str(
        &fs.read(plan_path)
            .with_context(|| format!("failed to read plan {}", plan_path.display()))?,
    )
    .with_context(|| format!("invalid plan file {}", plan_path.display()))?;

    let results = parse_results(
        &fs.read(results_path)
            .with_context(|| format!("failed to read results {}", results_path.display()))?,
    )
    .with_context(|| format!("invalid results file {}", results_path.display()))?;

    let use_case = DeploymentUseCase::new(JsonLockfileRepository::new());
    let outcome = use_case.commit(&plan, &results)?;

    match format {
        OutputFormat::Json => emit_json(&json_event(
            "commit",
            json!({
                "network": plan.network,
                "written": outcome.written,
                "ignored": outcome.ignored,
                "lockFile": outcome.persisted_to,
            }),
        ))?,
        OutputFormat::Text => print!("{}", render_commit(&outcome)),
    }
    Ok(())
}

fn parse_results(content: &str) -> serde_json::Result<Vec<DeploymentResult>> {
    serde_json::from_str::<ResultsFile>(content).map(ResultsFile::into_results)
}
