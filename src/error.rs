use std::fmt;

use crate::parser::ParseError;

/// Errors returned by the solver.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Malformed expression text.
    Syntax(ParseError),
    /// Too many distinct variables for truth-table enumeration.
    LimitExceeded { variables: usize, limit: usize },
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Syntax(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "{}", e),
            Error::LimitExceeded { variables, limit } => write!(
                f,
                "expression has {} distinct variables, truth table is limited to {}",
                variables, limit
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::LimitExceeded { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
