//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition shared by the binary and its tests
//! - `output` - Text renderers and the JSON event envelope

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::OutputFormat;
