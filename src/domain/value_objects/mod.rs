//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod address;
mod credential;
mod fingerprint;
mod network;
mod plugin;

pub use address::ContractAddress;
pub use credential::{Credential, ZERO_HASH};
pub use fingerprint::ArgsFingerprint;
pub use network::NetworkName;
pub use plugin::PluginKind;
