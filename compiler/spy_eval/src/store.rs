//! Variable store: the single flat namespace of a SimplePy program.
//!
//! Entries are kept in insertion order and looked up by a front-to-back
//! scan. Names are unique; the store only grows, and reassignment
//! overwrites an entry's type and value in place.

use tracing::debug;

use crate::errors::{capacity_exceeded, EvalResult};
use crate::Value;

/// A named, typed program variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

/// Outcome of [`VariableStore::assign_or_insert`], with the entry's index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Assigned {
    /// A new entry was appended.
    Inserted(usize),
    /// An existing entry was overwritten.
    Updated(usize),
}

/// Growable, capacity-bounded table of variables.
#[derive(Clone, Debug)]
pub struct VariableStore {
    vars: Vec<Variable>,
    capacity: usize,
}

impl VariableStore {
    /// Create an empty store that holds at most `capacity` variables.
    pub fn new(capacity: usize) -> Self {
        VariableStore {
            vars: Vec::new(),
            capacity,
        }
    }

    /// Index of the variable named `name`, if any.
    #[inline]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.vars.iter().position(|v| v.name == name)
    }

    /// Current value of `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.find(name).map(|i| &self.vars[i].value)
    }

    /// Overwrite `name` if it exists, else append it.
    ///
    /// Appending to a full store fails with `CapacityExceeded`; updates
    /// always succeed.
    pub fn assign_or_insert(&mut self, name: &str, value: Value) -> EvalResult<Assigned> {
        if let Some(index) = self.find(name) {
            debug!(name, index, ty = %value.value_type(), "update variable");
            self.vars[index].value = value;
            return Ok(Assigned::Updated(index));
        }

        if self.vars.len() >= self.capacity {
            return Err(capacity_exceeded(self.capacity, name));
        }

        let index = self.vars.len();
        debug!(name, index, ty = %value.value_type(), "insert variable");
        self.vars.push(Variable {
            name: name.to_string(),
            value,
        });
        Ok(Assigned::Inserted(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }
}
