use log::trace;

use crate::assignment::{Assignment, Valuation};
use crate::expr::{Expr, Node};

/// Value of a variable that the valuation does not bind.
///
/// Evaluating without an assignment therefore means "assume every variable is
/// true".
pub const DEFAULT_VALUE: bool = true;

impl Expr {
    /// Evaluates the expression, resolving unbound variables to [`DEFAULT_VALUE`].
    pub fn eval(&self, valuation: &impl Valuation) -> bool {
        self.eval_or(valuation, DEFAULT_VALUE)
    }

    /// Evaluates the expression, resolving unbound variables to `default`.
    ///
    /// Both operands of `·` and `+` are always evaluated.
    pub fn eval_or(&self, valuation: &impl Valuation, default: bool) -> bool {
        self.fold(&mut |node: Node<bool>| match node {
            Node::Const(b) => b,
            Node::Var(c) => valuation.value(c).unwrap_or(default),
            Node::Not(a) => !a,
            Node::And(a, b) => a && b,
            Node::Or(a, b) => a || b,
        })
    }
}

/// Evaluates `expr` under `assignment`, or with every variable true if `None`.
///
/// ```
/// use bool_solver::assignment::Assignment;
/// use bool_solver::eval::evaluate;
/// use bool_solver::parser::parse;
///
/// let e = parse("A · !B").unwrap();
/// assert_eq!(evaluate(&e, None), false);
/// assert_eq!(evaluate(&e, Some(&Assignment::from([('B', false)]))), true);
/// ```
pub fn evaluate(expr: &Expr, assignment: Option<&Assignment>) -> bool {
    let result = match assignment {
        Some(assignment) => expr.eval(assignment),
        None => expr.eval(&Assignment::new()),
    };
    trace!("evaluate({}) under {:?} -> {}", expr, assignment, result);
    result
}
