//! Test environment for isolated solbundle runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "PRIVATE_KEY",
    "ETHERSCAN_API_KEY",
    "HARDHAT_RPC",
    "LOCALHOST_RPC",
    "MAINNET_RPC",
    "SOLBUNDLE_LOG",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with `solbundle.toml` set to `config`
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write("solbundle.toml", config);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Run solbundle from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_solbundle"));
        cmd.current_dir(cwd).args(args);
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
