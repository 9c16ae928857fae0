//! Text-in, result-out entry points for front ends.
//!
//! A [`Solver`] bundles a [`Config`] with the parse/evaluate/enumerate
//! pipeline, so a command-line prompt and a web handler share one
//! implementation and differ only in how they obtain text and render results.

use log::debug;

use crate::assignment::{Assignment, Valuation};
use crate::config::Config;
use crate::error::Result;
use crate::expr::Expr;
use crate::normalize::normalize_complements;
use crate::parser::parse;
use crate::table::{truth_table_with, TruthTable};

/// ```
/// use bool_solver::solver::Solver;
///
/// let solver = Solver::default();
/// assert_eq!(solver.evaluate("A + B").unwrap(), true);
/// assert_eq!(solver.evaluate("A' · B").unwrap(), false);
///
/// let table = solver.truth_table("A · B").unwrap();
/// assert_eq!(table.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: Config,
}

impl Solver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses `text`, rewriting complement suffixes first if configured.
    pub fn parse(&self, text: &str) -> Result<Expr> {
        let expr = if self.config.normalize_complements {
            let normalized = normalize_complements(text);
            debug!("normalized {:?} -> {:?}", text, normalized);
            parse(&normalized)?
        } else {
            parse(text)?
        };
        Ok(expr)
    }

    /// Evaluates `text` with every variable set to the configured default.
    pub fn evaluate(&self, text: &str) -> Result<bool> {
        self.evaluate_with(text, &Assignment::new())
    }

    /// Evaluates `text` under `valuation`; unbound variables take the
    /// configured default.
    pub fn evaluate_with(&self, text: &str, valuation: &impl Valuation) -> Result<bool> {
        let expr = self.parse(text)?;
        Ok(expr.eval_or(valuation, self.config.default_value))
    }

    pub fn truth_table(&self, text: &str) -> Result<TruthTable> {
        let expr = self.parse(text)?;
        truth_table_with(&expr, &self.config)
    }
}
