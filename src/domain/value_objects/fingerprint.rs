//! Argument Fingerprint Value Object
//!
//! A stable hash of a contract's constructor arguments.
//! Used for change detection in the deployment lock.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Fingerprint of a constructor argument bag
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix. The hash is taken over
/// a canonical JSON encoding: object keys are sorted (named arguments are
/// order-independent) while array order is kept (positional arguments are not).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgsFingerprint(String);

impl ArgsFingerprint {
    /// Prefix for SHA-256 fingerprints
    pub const PREFIX: &'static str = "sha256:";

    /// Wrap a stored fingerprint string (adds the prefix if missing)
    pub fn new(raw: &str) -> Self {
        if raw.starts_with(Self::PREFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw))
        }
    }

    /// Compute the fingerprint of an argument bag
    pub fn of(args: &Value) -> Self {
        let mut canonical = String::new();
        write_canonical(args, &mut canonical);
        let digest = Sha256::digest(canonical.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Short form for human output
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..hex.len().min(12)]
    }
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    // serde_json escaping is deterministic; serializing a str cannot fail
    out.push_str(&Value::String(s.to_string()).to_string());
}

impl fmt::Display for ArgsFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArgsFingerprint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ArgsFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
