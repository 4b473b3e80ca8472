//! Explicit toolchain environment store.
//!
//! Stands in for the process environment so the resolver's
//! set-if-absent contract stays testable without touching real
//! ambient state. The resolver only ever sets missing values; it
//! never overrides or removes existing ones.

use std::collections::BTreeMap;

/// A mutable key/value store of toolchain environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainEnv {
    vars: BTreeMap<String, String>,
}

impl ToolchainEnv {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the named variables from the process environment.
    /// Variables that are unset in the process are left unset here.
    pub fn from_process(keys: &[&str]) -> Self {
        let mut env = Self::new();
        for key in keys {
            if let Ok(value) = std::env::var(key) {
                env.set(*key, value);
            }
        }
        env
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable unconditionally.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Set a variable only if it is currently unset or empty.
    /// Returns whether the default was applied.
    pub fn set_if_unset(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.vars.get(key) {
            Some(existing) if !existing.is_empty() => false,
            _ => {
                self.vars.insert(key.to_string(), value.into());
                true
            }
        }
    }

    /// Iterate over all variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
