//! Truth-table enumeration.
//!
//! For an expression over `n` distinct variables, row `i` (for `i` in
//! `0..2^n`) assigns the `j`-th variable (in order of first occurrence) the
//! bit `n-1-j` of `i`. The first variable is the most significant bit: row 0
//! has every variable false, the last row has every variable true, and rows
//! are produced in increasing `i`.
//!
//! ```
//! use bool_solver::parser::parse;
//! use bool_solver::table::truth_table;
//!
//! let table = truth_table(&parse("A · B").unwrap()).unwrap();
//! let results: Vec<bool> = table.results().collect();
//! assert_eq!(results, vec![false, false, false, true]);
//! ```
//!
//! Enumeration is exponential in the number of variables, so [`truth_table`]
//! refuses expressions with more than [`Config::max_variables`] of them.
//! [`Expr::truth_rows`] streams rows lazily without any limit.

use std::fmt;

use log::{debug, trace};

use crate::assignment::Assignment;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::vars::VariableSet;

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Position of the row; its bits are the variable values, MSB first.
    pub index: u64,
    pub assignment: Assignment,
    pub result: bool,
}

/// Lazy iterator over the rows of a truth table, in increasing index order.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    expr: &'a Expr,
    vars: VariableSet,
    next: u64,
    total: u64,
}

impl<'a> Rows<'a> {
    fn new(expr: &'a Expr) -> Self {
        let vars = expr.variables();
        assert!(
            vars.len() < u64::BITS as usize,
            "cannot index the rows of {} variables with u64",
            vars.len()
        );
        let total = 1u64 << vars.len();
        Rows {
            expr,
            vars,
            next: 0,
            total,
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.vars
    }

    /// Builds the assignment for row `index`.
    pub fn assignment(&self, index: u64) -> Assignment {
        let n = self.vars.len();
        let mut assignment = Assignment::with_capacity(n);
        for (j, var) in self.vars.iter().enumerate() {
            let bit = (n - 1 - j) as u32;
            assignment.set(var, index.checked_shr(bit).unwrap_or(0) & 1 == 1);
        }
        assignment
    }
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let assignment = self.assignment(index);
        let result = self.expr.eval(&assignment);
        trace!("row {}: {} -> {}", index, assignment, result as u8);
        Some(Row {
            index,
            assignment,
            result,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl Expr {
    /// Streams every row of the truth table, without a variable limit.
    ///
    /// # Panics
    ///
    /// Panics if the expression has 64 or more distinct variables. Parsed
    /// expressions have at most [`MAX_LETTERS`](crate::vars::MAX_LETTERS).
    pub fn truth_rows(&self) -> Rows<'_> {
        Rows::new(self)
    }
}

/// A fully enumerated truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: VariableSet,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Column order of the table.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows; always `2^n` for `n` variables, so never zero.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Assignment, bool)> + '_ {
        self.rows.iter().map(|row| (&row.assignment, row.result))
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Indices of the rows where the expression is true.
    pub fn minterms(&self) -> Vec<u64> {
        self.rows.iter().filter(|row| row.result).map(|row| row.index).collect()
    }
}

impl fmt::Display for TruthTable {
    /// Tab-separated layout: a header of variable names, then one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in self.variables.iter() {
            write!(f, "{}\t", var)?;
        }
        writeln!(f, "Result")?;
        for row in self.rows.iter() {
            for value in row.assignment.values() {
                write!(f, "{}\t", value as u8)?;
            }
            writeln!(f, "{}", row.result as u8)?;
        }
        Ok(())
    }
}

/// Enumerates the truth table of `expr` under the default [`Config`].
pub fn truth_table(expr: &Expr) -> Result<TruthTable> {
    truth_table_with(expr, &Config::default())
}

/// Enumerates the truth table of `expr`, enforcing `config.max_variables`.
pub fn truth_table_with(expr: &Expr, config: &Config) -> Result<TruthTable> {
    let n = expr.variables().len();
    if n > config.max_variables {
        return Err(Error::LimitExceeded {
            variables: n,
            limit: config.max_variables,
        });
    }
    let rows = expr.truth_rows();
    debug!(
        "truth_table({}): {} variables {}, {} rows",
        expr,
        n,
        rows.variables(),
        rows.size_hint().0
    );
    let variables = rows.variables().clone();
    let rows = rows.collect();
    Ok(TruthTable { variables, rows })
}
