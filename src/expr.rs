//! Boolean expression trees.
//!
//! An [`Expr`] is an immutable, exclusively owned tree built once by the
//! [parser][crate::parser] (or by hand, via the smart constructors and the
//! `!`, `&`, `|` operators) and read-only afterwards. Variables carry no value:
//! values are supplied at evaluation time, so a single tree can be evaluated
//! under any number of assignments.
//!
//! All structural traversals go through [`Expr::fold`], which collapses the
//! tree bottom-up one [`Node`] layer at a time.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

use crate::parser::{parse, ParseError};
use crate::vars::VariableSet;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Const(bool),
    Var(char),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    /// A variable. Names are single ASCII letters, the only ones the parser
    /// accepts, so anything else would not survive a `Display`/parse round trip.
    pub fn var(name: char) -> Self {
        debug_assert!(
            name.is_ascii_alphabetic(),
            "variable names are single ASCII letters, got {:?}",
            name
        );
        Expr::Var(name)
    }

    /// Negation. Unlike a simplifier, this never cancels double negations.
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }
}

/// One layer of an [`Expr`], with children replaced by `R`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Node<R> {
    Const(bool),
    Var(char),
    Not(R),
    And(R, R),
    Or(R, R),
}

impl<A> Node<A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Node<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Node::Const(b) => Node::Const(b),
            Node::Var(c) => Node::Var(c),
            Node::Not(a) => Node::Not(f(a)),
            Node::And(a, b) => Node::And(f(a), f(b)),
            Node::Or(a, b) => Node::Or(f(a), f(b)),
        }
    }
}

impl Expr {
    /// Views the top layer of this expression, children by reference.
    pub fn node(&self) -> Node<&Expr> {
        match self {
            Expr::Const(b) => Node::Const(*b),
            Expr::Var(c) => Node::Var(*c),
            Expr::Not(a) => Node::Not(&**a),
            Expr::And(a, b) => Node::And(&**a, &**b),
            Expr::Or(a, b) => Node::Or(&**a, &**b),
        }
    }

    /// Collapses the tree bottom-up.
    ///
    /// Children are always folded left before right, so the order in which
    /// `collapse` sees leaves matches their order in the source text.
    pub fn fold<R, F>(&self, collapse: &mut F) -> R
    where
        F: FnMut(Node<R>) -> R,
    {
        let node = self.node().fmap(|child| child.fold(&mut *collapse));
        collapse(node)
    }

    /// Distinct variables, in order of first occurrence.
    pub fn variables(&self) -> VariableSet {
        let mut vars = VariableSet::new();
        self.fold(&mut |node: Node<()>| {
            if let Node::Var(c) = node {
                vars.insert(c);
            }
        });
        vars
    }

    /// Total number of nodes.
    pub fn size(&self) -> usize {
        self.fold(&mut |node: Node<usize>| match node {
            Node::Const(_) | Node::Var(_) => 1,
            Node::Not(a) => 1 + a,
            Node::And(a, b) | Node::Or(a, b) => 1 + a + b,
        })
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        self.fold(&mut |node: Node<usize>| match node {
            Node::Const(_) | Node::Var(_) => 1,
            Node::Not(a) => 1 + a,
            Node::And(a, b) | Node::Or(a, b) => 1 + a.max(b),
        })
    }

    pub fn is_constant(&self) -> bool {
        self.variables().is_empty()
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Const(value)
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// Binding strength, used to decide where parentheses are required.
const PREC_OR: u8 = 1;
const PREC_AND: u8 = 2;
const PREC_ATOM: u8 = 3;

fn wrap((text, prec): (String, u8), min: u8) -> String {
    if prec < min {
        format!("({})", text)
    } else {
        text
    }
}

impl fmt::Display for Expr {
    /// Renders the expression in surface syntax.
    ///
    /// Operands of a binary operator are left-nested by the parser, so a right
    /// operand of the same operator keeps its parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (text, _) = self.fold(&mut |node: Node<(String, u8)>| match node {
            Node::Const(b) => ((if b { "1" } else { "0" }).to_string(), PREC_ATOM),
            Node::Var(c) => (c.to_string(), PREC_ATOM),
            Node::Not(a) => (format!("!{}", wrap(a, PREC_ATOM)), PREC_ATOM),
            Node::And(a, b) => (
                format!("{} · {}", wrap(a, PREC_AND), wrap(b, PREC_AND + 1)),
                PREC_AND,
            ),
            Node::Or(a, b) => (
                format!("{} + {}", wrap(a, PREC_OR), wrap(b, PREC_OR + 1)),
                PREC_OR,
            ),
        });
        write!(f, "{}", text)
    }
}
