//! # bool-solver: Boolean expressions and truth tables
//!
//! **`bool-solver`** parses propositional formulas written in the classic
//! textbook notation, evaluates them under variable assignments, and
//! enumerates their truth tables.
//!
//! ## Surface syntax
//!
//! | Syntax      | Meaning                             |
//! |-------------|-------------------------------------|
//! | `A`..`Z`, `a`..`z` | variable (case-sensitive)    |
//! | `0`, `1`    | constants                           |
//! | `!x`        | NOT (binds tightest)                |
//! | `x · y`     | AND, U+00B7 middle dot              |
//! | `x + y`     | OR (binds loosest)                  |
//! | `( ... )`   | grouping                            |
//!
//! Whitespace is ignored. Any other character is a syntax error. The suffix
//! notations `A'` and `A̅` are accepted by the [`Solver`] through a pre-parse
//! rewrite (see [`normalize`]).
//!
//! ## Basic Usage
//!
//! ```rust
//! use bool_solver::{evaluate, parse, truth_table};
//! use bool_solver::assignment::Assignment;
//!
//! let e = parse("A + B · C").unwrap();
//!
//! // Without an assignment, every variable is assumed true.
//! assert!(evaluate(&e, None));
//!
//! let a = Assignment::from([('A', false), ('B', false), ('C', true)]);
//! assert!(!evaluate(&e, Some(&a)));
//!
//! // Rows count up in binary, first variable as the most significant bit.
//! let table = truth_table(&e).unwrap();
//! assert_eq!(table.len(), 8);
//! assert_eq!(table.minterms(), vec![3, 4, 5, 6, 7]);
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: lexer and recursive-descent parser producing an [`Expr`].
//! - **[`eval`]**: evaluation under a [`Valuation`][assignment::Valuation].
//! - **[`table`]**: truth-table enumeration with a variable limit.
//! - **[`solver`]**: text-in entry points shared by front ends.

pub mod assignment;
pub mod config;
pub mod error;
pub mod eval;
pub mod expr;
pub mod normalize;
pub mod parser;
pub mod solver;
pub mod table;
pub mod vars;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::eval::evaluate;
pub use crate::expr::Expr;
pub use crate::parser::{parse, ParseError};
pub use crate::solver::Solver;
pub use crate::table::{truth_table, TruthTable};
