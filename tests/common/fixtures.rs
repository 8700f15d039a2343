//! Test fixtures - reusable content constants for tests.

/// Two contracts on a persistent local network
pub const LOCAL_CONFIG: &str = r#"
[[contracts]]
name = "Miller"

[[contracts]]
name = "Token"
args = ["Gold", "GLD", 18]

[networks.hardhat]

[networks.localhost]
url = "http://127.0.0.1:8545"
lock_file = "local.deployment-lock.json"
"#;

pub const MILLER_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
pub const TOKEN_ADDRESS: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

/// sha256 of the canonical empty argument list `[]`
pub const EMPTY_ARGS_FINGERPRINT: &str =
    "sha256:4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945";
