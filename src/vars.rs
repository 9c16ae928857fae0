//! Ordered sets of variable letters.
//!
//! A [`VariableSet`] remembers letters in order of first insertion. That order
//! is the column order of a truth table, and the first letter is the most
//! significant bit of the row index.
//!
//! Membership of ASCII letters is tracked in a single `u64` mask (52 slots,
//! `A-Z` then `a-z`); any other character falls back to a linear scan.

use std::fmt;

/// Number of distinct single-letter variables the grammar can produce.
pub const MAX_LETTERS: usize = 52;

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct VariableSet {
    order: Vec<char>,
    mask: u64,
}

#[inline]
fn slot(c: char) -> Option<u32> {
    match c {
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        'a'..='z' => Some(26 + c as u32 - 'a' as u32),
        _ => None,
    }
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        match slot(c) {
            Some(s) => self.mask & (1 << s) != 0,
            None => self.order.contains(&c),
        }
    }

    /// Adds `c` unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, c: char) -> bool {
        if self.contains(c) {
            return false;
        }
        if let Some(s) = slot(c) {
            self.mask |= 1 << s;
        }
        self.order.push(c);
        true
    }

    /// Position of `c` (its column in a truth table).
    pub fn index_of(&self, c: char) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        self.order.iter().position(|&v| v == c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }
}

impl FromIterator<char> for VariableSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut vars = VariableSet::new();
        for c in iter {
            vars.insert(c);
        }
        vars
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_insert_dedup_keeps_first_order() {
        let mut vars = VariableSet::new();
        assert!(vars.insert('C'));
        assert!(vars.insert('a'));
        assert!(!vars.insert('C'));
        assert!(vars.insert('A'));
        assert_eq!(vars.as_slice(), &['C', 'a', 'A']);
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_contains_and_index() {
        let vars: VariableSet = "zZyz".chars().collect();
        assert!(vars.contains('z'));
        assert!(vars.contains('Z'));
        assert!(!vars.contains('x'));
        assert_eq!(vars.index_of('y'), Some(2));
        assert_eq!(vars.index_of('q'), None);
    }

    #[test]
    fn test_non_letter_fallback() {
        let vars: VariableSet = ['α', 'β', 'α'].into_iter().collect();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains('β'));
    }

    #[test]
    fn test_all_letters_fit() {
        let vars: VariableSet = ('A'..='Z').chain('a'..='z').collect();
        assert_eq!(vars.len(), MAX_LETTERS);
    }

    #[test]
    fn test_display() {
        let vars: VariableSet = "AB".chars().collect();
        assert_eq!(vars.to_string(), "{A, B}");
        assert_eq!(VariableSet::new().to_string(), "{}");
    }
}
