//! Output Rendering
//!
//! Text renderers return strings so commands decide where they go; JSON
//! output is wrapped in the same event envelope for every command.

use std::io::Write;

use serde_json::{json, Value};
use url::Url;

use crate::application::{CommitOutcome, ForgetOutcome};
use crate::domain::entities::{Environment, Environments};
use crate::domain::services::{DeployAction, DeploymentPlan};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn icon(action: DeployAction) -> char {
    match action {
        DeployAction::Deploy => '+',
        DeployAction::Redeploy => '~',
        DeployAction::Skip => '=',
    }
}

/// Human-readable plan
pub fn render_plan(plan: &DeploymentPlan) -> String {
    let mut out = format!("Plan for {} (chain {})\n", plan.network, plan.chain_id);
    match &plan.lock_file {
        Some(path) => out.push_str(&format!("Lock file: {}\n", path.display())),
        None => out.push_str("Lock file: none (deployments are not persisted)\n"),
    }

    if plan.is_empty() {
        out.push_str("\nNo contracts declared\n");
        return out;
    }

    out.push('\n');
    let width = plan.steps.iter().map(|s| s.contract.len()).max().unwrap_or(0);
    for step in &plan.steps {
        let mut line = format!(
            "  {} {:<width$}  {:<8}  {}",
            icon(step.action),
            step.contract,
            step.action.as_str(),
            step.fingerprint.short(),
            width = width
        );
        if let Some(address) = &step.previous_address {
            line.push_str("  ");
            line.push_str(address.as_str());
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    if plan.is_up_to_date() {
        out.push_str(&format!(
            "Everything up to date ({})\n",
            plural(plan.len(), "contract")
        ));
    } else {
        out.push_str(&format!(
            "{} to deploy, {} to redeploy, {} up to date\n",
            plan.count(DeployAction::Deploy),
            plan.count(DeployAction::Redeploy),
            plan.count(DeployAction::Skip)
        ));
    }
    out
}

/// Human-readable commit summary
pub fn render_commit(outcome: &CommitOutcome) -> String {
    let mut out = String::new();
    if !outcome.has_changes() {
        out.push_str("Nothing to record\n");
    } else {
        match &outcome.persisted_to {
            Some(path) => out.push_str(&format!(
                "Recorded {} in {}\n",
                plural(outcome.written.len(), "deployment"),
                path.display()
            )),
            None => out.push_str(&format!(
                "Recorded {} (not persisted: network has no lock file)\n",
                plural(outcome.written.len(), "deployment")
            )),
        }
        for contract in &outcome.written {
            if let Some(entry) = outcome.lock.get(contract) {
                out.push_str(&format!("  + {}  {}\n", contract, entry.address()));
            }
        }
    }
    if !outcome.ignored.is_empty() {
        out.push_str(&format!(
            "Ignored results for skipped contracts: {}\n",
            outcome.ignored.join(", ")
        ));
    }
    out
}

pub fn render_forget(outcome: &ForgetOutcome) -> String {
    let mut out = format!(
        "Removed {} from {}\n",
        plural(outcome.removed.len(), "entry"),
        outcome.lock_file.display()
    );
    for contract in &outcome.removed {
        out.push_str(&format!("  - {}\n", contract));
    }
    if !outcome.missing.is_empty() {
        out.push_str(&format!("Not in lock: {}\n", outcome.missing.join(", ")));
    }
    out
}

/// One line per configured network
pub fn render_networks(environments: &Environments) -> String {
    let mut out = String::new();
    for env in environments.iter() {
        let mut line = format!(
            "{:<9}  chain {:<6}  lock: {}",
            env.name().as_str(),
            env.chain_id(),
            env.lock_file()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        if let Some(url) = env.rpc_url() {
            line.push_str(&format!("  rpc: {}", redact_url(url)));
        }
        if env.verify() {
            line.push_str("  verify");
        }
        if !env.plugins().is_empty() {
            let plugins: Vec<&str> = env.plugins().iter().map(|p| p.as_str()).collect();
            line.push_str(&format!("  plugins: {}", plugins.join(",")));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Scheme, host and port only; paths and queries often embed API keys
pub fn redact_url(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// JSON view of an environment with credentials redacted
pub fn environment_json(env: &Environment) -> Value {
    json!({
        "name": env.name(),
        "chainId": env.chain_id(),
        "rpcUrl": env.rpc_url().map(redact_url),
        "lockFile": env.lock_file(),
        "verify": env.verify(),
        "plugins": env.plugins(),
        "deployer": env.deployer().map(|c| c.redacted()),
        "explorerApiKey": env.explorer_api_key().map(|c| c.redacted()),
        "contracts": env
            .contracts()
            .iter()
            .map(|c| json!({ "name": c.name(), "fingerprint": c.fingerprint() }))
            .collect::<Vec<_>>(),
    })
}

/// Event envelope shared by all `--json` output
pub fn json_event(command: &str, mut payload: Value) -> Value {
    let mut event = json!({ "event": "data", "command": command });
    if let (Some(event), Some(payload)) = (event.as_object_mut(), payload.as_object_mut()) {
        event.append(payload);
    }
    event
}

/// Write one JSON value per line to stdout
pub fn emit_json(value: &Value) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun.strip_suffix('y')) {
        (1, _) => format!("1 {}", noun),
        (n, Some(stem)) => format!("{} {}ies", n, stem),
        (n, None) => format!("{} {}s", n, noun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ContractDeclaration, DeploymentLock, LockEntry};
    use crate::domain::services::resolve;
    use crate::domain::value_objects::{ArgsFingerprint, ContractAddress, NetworkName};
    use std::path::PathBuf;

    const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn sample_plan() -> DeploymentPlan {
        let env = Environment::new(NetworkName::Localhost)
            .with_chain_id(31337)
            .with_lock_file("local.deployment-lock.json");
        let mut lock = DeploymentLock::new();
        lock.set(
            "Token",
            LockEntry::new(
                ContractAddress::parse(ADDR).unwrap(),
                ArgsFingerprint::of(&json!([])),
                31337,
            ),
        );
        let decls = vec![ContractDeclaration::new("Miller"), ContractDeclaration::new("Token")];
        resolve(&env, &decls, Some(&lock)).unwrap()
    }

    #[test]
    fn plan_text_snapshot() {
        let rendered = render_plan(&sample_plan());
        insta::assert_snapshot!(rendered.trim_end(), @r"
        Plan for localhost (chain 31337)
        Lock file: local.deployment-lock.json

          + Miller  deploy    4f53cda18c2b
          = Token   skip      4f53cda18c2b  0x5FbDB2315678afecb367f032d93F642f64180aa3

        1 to deploy, 0 to redeploy, 1 up to date
        ");
    }

    #[test]
    fn plan_without_lock_file_says_so() {
        let env = Environment::new(NetworkName::Hardhat);
        let plan = resolve(&env, &[ContractDeclaration::new("Miller")], None).unwrap();

        let rendered = render_plan(&plan);
        assert!(rendered.contains("Lock file: none"));
    }

    #[test]
    fn up_to_date_plan_summary() {
        let env = Environment::new(NetworkName::Localhost);
        let mut lock = DeploymentLock::new();
        lock.set(
            "Miller",
            LockEntry::new(
                ContractAddress::parse(ADDR).unwrap(),
                ArgsFingerprint::of(&json!([])),
                31337,
            ),
        );
        let plan = resolve(&env, &[ContractDeclaration::new("Miller")], Some(&lock)).unwrap();

        assert!(render_plan(&plan).ends_with("Everything up to date (1 contract)\n"));
    }

    #[test]
    fn commit_text_snapshot() {
        let mut lock = DeploymentLock::new();
        lock.set(
            "Miller",
            LockEntry::new(
                ContractAddress::parse(ADDR).unwrap(),
                ArgsFingerprint::of(&json!([])),
                1,
            ),
        );
        let outcome = CommitOutcome {
            written: vec!["Miller".to_string()],
            ignored: vec!["Token".to_string()],
            lock,
            persisted_to: Some(PathBuf::from("deployment-lock.json")),
        };

        insta::assert_snapshot!(render_commit(&outcome).trim_end(), @r"
        Recorded 1 deployment in deployment-lock.json
          + Miller  0x5FbDB2315678afecb367f032d93F642f64180aa3
        Ignored results for skipped contracts: Token
        ");
    }

    #[test]
    fn commit_without_changes() {
        assert_eq!(render_commit(&CommitOutcome::default()), "Nothing to record\n");
    }

    #[test]
    fn forget_lists_missing_contracts() {
        let outcome = ForgetOutcome {
            removed: vec![],
            missing: vec!["Ghost".to_string()],
            lock_file: PathBuf::from("deployment-lock.json"),
        };

        let rendered = render_forget(&outcome);
        assert!(rendered.starts_with("Removed 0 entries from deployment-lock.json"));
        assert!(rendered.contains("Not in lock: Ghost"));
    }

    #[test]
    fn redact_url_drops_path_and_query() {
        let url = Url::parse("https://eth-mainnet.example.org/v2/secret-key?x=1").unwrap();
        assert_eq!(redact_url(&url), "https://eth-mainnet.example.org");
    }

    #[test]
    fn environment_json_redacts_credentials() {
        use crate::domain::value_objects::Credential;

        let env = Environment::new(NetworkName::Mainnet)
            .with_deployer(Credential::new("0xsecret"))
            .with_explorer_api_key(Credential::new("KEY"));
        let value = environment_json(&env);

        assert_eq!(value["name"], "mainnet");
        assert_eq!(value["deployer"], "<redacted>");
        assert_eq!(value["explorerApiKey"], "<redacted>");
        assert!(!value.to_string().contains("0xsecret"));
    }

    #[test]
    fn json_event_merges_payload() {
        let event = json_event("plan", json!({ "pending": 2 }));
        assert_eq!(event, json!({ "event": "data", "command": "plan", "pending": 2 }));
    }
}
