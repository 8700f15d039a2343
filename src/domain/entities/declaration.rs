//! Contract declaration entity
//!
//! A declaration names a contract and carries the argument bag forwarded to
//! its constructor. The bag is opaque here: it is fingerprinted, never read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::ArgsFingerprint;

/// Constructor arguments, either positional or named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstructorArgs {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Default for ConstructorArgs {
    fn default() -> Self {
        ConstructorArgs::Positional(Vec::new())
    }
}

impl ConstructorArgs {
    /// Interpret a raw value as an argument bag; `None` for scalars
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(ConstructorArgs::Positional(items)),
            Value::Object(map) => Some(ConstructorArgs::Named(map)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ConstructorArgs::Positional(items) => Value::Array(items.clone()),
            ConstructorArgs::Named(map) => Value::Object(map.clone()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ConstructorArgs::Positional(items) => items.len(),
            ConstructorArgs::Named(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fingerprint(&self) -> ArgsFingerprint {
        ArgsFingerprint::of(&self.to_value())
    }
}

/// A contract to deploy on an environment
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDeclaration {
    name: String,
    args: ConstructorArgs,
    /// Executor options (library links, deploy overrides); not fingerprinted
    options: Map<String, Value>,
}

impl ContractDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: ConstructorArgs::default(),
            options: Map::new(),
        }
    }

    pub fn with_args(mut self, args: ConstructorArgs) -> Self {
        self.args = args;
        self
    }

    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &ConstructorArgs {
        &self.args
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn fingerprint(&self) -> ArgsFingerprint {
        self.args.fingerprint()
    }
}
