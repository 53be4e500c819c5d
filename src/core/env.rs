//! Environment value source.
//!
//! Values come from the process environment, optionally layered under a
//! dotenv-style file. Absence of a name is not an error here; the engine
//! records it per item.

use std::collections::HashMap;
use std::path::Path;

use zeroize::Zeroizing;

use crate::error::Result;

/// Lookup of the current value associated with a name.
pub trait ValueSource {
    fn get(&self, name: &str) -> Option<Zeroizing<String>>;
}

/// Process-environment source with optional dotenv overrides.
#[derive(Debug, Default)]
pub struct Environment {
    overrides: HashMap<String, Zeroizing<String>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload entries from a dotenv-style file. File entries take
    /// precedence over the process environment.
    ///
    /// Skips empty lines and comments. Supports values with or without
    /// quotes, split on the first `=`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn with_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut overrides = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = parse_env_value(value.trim());
                overrides.insert(key, Zeroizing::new(value));
            }
        }

        Ok(Self { overrides })
    }

    #[cfg(test)]
    fn with_overrides(pairs: &[(&str, &str)]) -> Self {
        Self {
            overrides: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Zeroizing::new(v.to_string())))
                .collect(),
        }
    }
}

impl ValueSource for Environment {
    fn get(&self, name: &str) -> Option<Zeroizing<String>> {
        if let Some(value) = self.overrides.get(name) {
            return Some(value.clone());
        }
        std::env::var(name).ok().map(Zeroizing::new)
    }
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return raw[1..raw.len() - 1].to_string();
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }
    raw.to_string()
}
