#![no_main]

use libfuzzer_sys::fuzz_target;
use solbundle::{ArgsFingerprint, ConstructorArgs};

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let fp = ArgsFingerprint::of(&value);
        assert_eq!(fp.hex().len(), 64);
        if let Some(args) = ConstructorArgs::from_value(value) {
            assert_eq!(args.fingerprint(), fp);
        }
    }
});
