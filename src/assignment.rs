//! Variable assignments.
//!
//! Values for variables are always passed explicitly to the evaluator through
//! the [`Valuation`] trait. There is no shared variable table: every caller
//! owns its own assignment, so evaluations are independent of each other.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Source of truth values for variables.
///
/// Returns `None` for variables it does not bind; the evaluator then applies
/// its default policy.
pub trait Valuation {
    fn value(&self, var: char) -> Option<bool>;
}

/// A mapping from variable letters to truth values, in insertion order.
///
/// ```
/// use bool_solver::assignment::{Assignment, Valuation};
///
/// let mut a = Assignment::new();
/// a.set('A', true);
/// a.set('B', false);
/// a.set('A', false);
///
/// assert_eq!(a.value('A'), Some(false));
/// assert_eq!(a.value('C'), None);
/// assert_eq!(a.to_string(), "A=0, B=0");
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment {
    bindings: Vec<(char, bool)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bindings: Vec::with_capacity(capacity),
        }
    }

    /// Binds `var` to `value`, overwriting an existing binding in place.
    pub fn set(&mut self, var: char, value: bool) {
        match self.bindings.iter_mut().find(|(v, _)| *v == var) {
            Some(binding) => binding.1 = value,
            None => self.bindings.push((var, value)),
        }
    }

    pub fn get(&self, var: char) -> Option<bool> {
        self.bindings
            .iter()
            .find(|(v, _)| *v == var)
            .map(|&(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound variables in insertion order.
    pub fn vars(&self) -> impl Iterator<Item = char> + '_ {
        self.bindings.iter().map(|&(v, _)| v)
    }

    /// Bound values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.bindings.iter().map(|&(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.bindings.iter().copied()
    }
}

impl Valuation for Assignment {
    fn value(&self, var: char) -> Option<bool> {
        self.get(var)
    }
}

impl Valuation for HashMap<char, bool> {
    fn value(&self, var: char) -> Option<bool> {
        self.get(&var).copied()
    }
}

impl Valuation for BTreeMap<char, bool> {
    fn value(&self, var: char) -> Option<bool> {
        self.get(&var).copied()
    }
}

impl<V: Valuation + ?Sized> Valuation for &V {
    fn value(&self, var: char) -> Option<bool> {
        (**self).value(var)
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}

impl<const N: usize> From<[(char, bool); N]> for Assignment {
    fn from(bindings: [(char, bool); N]) -> Self {
        bindings.into_iter().collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, value as u8)?;
        }
        Ok(())
    }
}
