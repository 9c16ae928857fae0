use crate::eval::DEFAULT_VALUE;
use crate::vars::MAX_LETTERS;

/// Policy knobs for a [`Solver`][crate::solver::Solver].
///
/// Use `Config::default()` for the standard settings: unbound variables are
/// true, truth tables are limited to 20 variables, and complement suffixes
/// (`A'`) are rewritten before parsing.
///
/// ```
/// use bool_solver::config::Config;
///
/// let config = Config::default().with_max_variables(8).with_default_value(false);
/// assert_eq!(config.max_variables, 8);
/// assert!(!config.default_value);
/// assert!(config.normalize_complements);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// Value of a variable that the assignment does not bind.
    pub default_value: bool,
    /// Maximum number of distinct variables for truth-table enumeration.
    pub max_variables: usize,
    /// Rewrite `X'` and `X̅` into `!X` before parsing.
    pub normalize_complements: bool,
}

impl Config {
    /// Default limit on distinct variables in a truth table (2^20 rows).
    pub const DEFAULT_MAX_VARIABLES: usize = 20;

    pub fn with_default_value(mut self, value: bool) -> Self {
        self.default_value = value;
        self
    }

    /// Sets the variable limit, clamped to the number of distinct letters.
    pub fn with_max_variables(mut self, limit: usize) -> Self {
        self.max_variables = limit.min(MAX_LETTERS);
        self
    }

    pub fn with_normalize_complements(mut self, enabled: bool) -> Self {
        self.normalize_complements = enabled;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_value: DEFAULT_VALUE,
            max_variables: Self::DEFAULT_MAX_VARIABLES,
            normalize_complements: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert!(config.default_value);
        assert_eq!(config.max_variables, 20);
        assert!(config.normalize_complements);
    }

    #[test]
    fn test_max_variables_clamped() {
        let config = Config::default().with_max_variables(1000);
        assert_eq!(config.max_variables, MAX_LETTERS);
    }
}
