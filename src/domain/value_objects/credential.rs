//! Signing credential value object

use std::fmt;

use secrecy::{ExposeSecret, Secret};

/// 32-byte zero hash used when no deployer key is configured
pub const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Secret value (deployer key, explorer API key) that never prints itself
pub struct Credential(Secret<String>);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Secret::new(value.into()))
    }

    /// Placeholder deployer key
    pub fn zero_hash() -> Self {
        Self::new(ZERO_HASH)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_zero_hash(&self) -> bool {
        self.expose() == ZERO_HASH
    }

    /// Redacted form for output
    pub fn redacted(&self) -> &'static str {
        if self.is_zero_hash() {
            "<zero hash>"
        } else {
            "<redacted>"
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.redacted())
    }
}
