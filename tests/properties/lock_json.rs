//! Property tests for the JSON lock file repository.

use proptest::prelude::*;
use serde_json::json;

use solbundle::domain::ports::LockfileRepository;
use solbundle::{ArgsFingerprint, ContractAddress, DeploymentLock, JsonLockfileRepository, LockEntry};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Loading arbitrary file content never panics.
    #[test]
    fn property_load_never_panics(content in "\\PC{0,200}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployment-lock.json");
        std::fs::write(&path, &content).unwrap();

        let _ = JsonLockfileRepository::new().load(&path);
    }

    /// PROPERTY: Saved locks load back with every entry intact.
    #[test]
    fn property_saved_lock_loads_back(
        entries in proptest::collection::btree_map(
            "[A-Za-z][A-Za-z0-9_]{0,10}",
            (any::<[u8; 20]>(), any::<u64>(), any::<i32>()),
            0..6,
        ),
    ) {
        let mut lock = DeploymentLock::new();
        for (name, (bytes, chain_id, arg)) in &entries {
            let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            lock.set(
                name.clone(),
                LockEntry::new(
                    ContractAddress::parse(&format!("0x{}", hex)).unwrap(),
                    ArgsFingerprint::of(&json!([arg])),
                    *chain_id,
                ),
            );
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployment-lock.json");
        let repo = JsonLockfileRepository::new();
        repo.save(&lock, &path).unwrap();

        prop_assert_eq!(repo.load(&path).unwrap(), lock);
    }
}
