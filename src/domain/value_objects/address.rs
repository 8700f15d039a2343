//! Contract address value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BundleError;

/// A deployed contract address (`0x` + 40 hex digits)
///
/// The original casing is kept so checksummed addresses round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn parse(raw: &str) -> Result<Self, BundleError> {
        let invalid = |reason: &str| BundleError::InvalidAddress {
            address: raw.to_string(),
            reason: reason.to_string(),
        };

        let hex = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or_else(|| invalid("missing 0x prefix"))?;
        if hex.len() != 40 {
            return Err(invalid("expected 40 hex digits"));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hex characters"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison
    pub fn same_as(&self, other: &ContractAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl TryFrom<String> for ContractAddress {
    type Error = BundleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContractAddress> for String {
    fn from(value: ContractAddress) -> Self {
        value.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    #[test]
    fn parses_checksummed_address() {
        let addr = ContractAddress::parse(ADDR).unwrap();
        assert_eq!(addr.as_str(), ADDR);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = ContractAddress::parse(&ADDR[2..]).unwrap_err();
        assert!(err.to_string().contains("missing 0x prefix"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ContractAddress::parse("0x1234").is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("0x{}", "g".repeat(40));
        assert!(ContractAddress::parse(&bad).is_err());
    }

    #[test]
    fn same_as_ignores_case() {
        let a = ContractAddress::parse(ADDR).unwrap();
        let b = ContractAddress::parse(&ADDR.to_lowercase()).unwrap();
        assert!(a.same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<ContractAddress, _> = serde_json::from_str(&format!("\"{}\"", ADDR));
        assert!(ok.is_ok());
        let bad: Result<ContractAddress, _> = serde_json::from_str(r#""nope""#);
        assert!(bad.is_err());
    }
}
