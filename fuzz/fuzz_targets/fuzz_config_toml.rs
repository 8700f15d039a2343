#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and environment resolution should never panic
        if let Ok(config) = toml::from_str::<solbundle::Config>(content) {
            let _ = solbundle::config::build_environments(
                &config,
                Path::new("solbundle.toml"),
                |_| None,
            );
        }
    }
});
