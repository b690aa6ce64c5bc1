use std::collections::HashMap;

use log::debug;

use crate::interpreter::value::core::Value;

/// Variable bindings of a session.
///
/// Assignments made while a line is being evaluated are staged. They are
/// visible to the rest of that line, and become permanent only when the line
/// finishes without error ([`Environment::commit`]); a failing line throws
/// them away ([`Environment::discard`]). Names are case sensitive and are
/// never deleted.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    staged:   HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a name, preferring a value staged by the current line.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Scalar(1.0));
    /// assert_eq!(env.get("x"), Some(&Value::Scalar(1.0)));
    ///
    /// env.discard();
    /// assert_eq!(env.get("x"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.staged.get(name).or_else(|| self.bindings.get(name))
    }

    /// Stages a binding; it is kept only if [`Environment::commit`] follows.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.staged.insert(name.to_string(), value);
    }

    /// Makes every staged binding permanent.
    pub fn commit(&mut self) {
        if !self.staged.is_empty() {
            debug!("committing {} binding(s)", self.staged.len());
        }
        self.bindings.extend(self.staged.drain());
    }

    /// Drops every staged binding.
    pub fn discard(&mut self) {
        if !self.staged.is_empty() {
            debug!("discarding {} staged binding(s)", self.staged.len());
        }
        self.staged.clear();
    }

    /// Number of committed bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
