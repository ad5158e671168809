//! Variable environment
//!
//! One `Environment` belongs to one calculator session. It starts out with
//! the built-in constants and is mutated only by assignment or `reset`.

use std::collections::BTreeMap;
use std::f64::consts;

/// Constants every fresh environment is seeded with
pub const CONSTANTS: [(&str, f64); 2] = [("pi", consts::PI), ("e", consts::E)];

/// Named numeric bindings, iterated in name order
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    bindings: BTreeMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        let mut env = Environment {
            bindings: BTreeMap::new(),
        };
        env.seed_constants();
        env
    }

    fn seed_constants(&mut self) {
        for (name, value) in CONSTANTS {
            self.bindings.insert(name.to_string(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Bind a value, replacing any previous binding (constants included)
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop all user bindings and restore the built-in constants
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.seed_constants();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
