#![no_main]

use libfuzzer_sys::fuzz_target;
use solbundle::{DeploymentPlan, DeploymentResult};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Executor-facing JSON: plans and results come back from outside
        if let Ok(plan) = serde_json::from_str::<DeploymentPlan>(content) {
            let _ = solbundle::domain::services::lock_updates(&plan, &[]);
        }
        let _ = serde_json::from_str::<Vec<DeploymentResult>>(content);
    }
});
