//! Parser for the `+` / `·` / `!` surface syntax.
//!
//! Parsing happens in two stages. The lexer turns the input into positioned
//! [`Token`]s, rejecting any character that is not part of the syntax. The
//! parser then descends the grammar in the order of operator precedence:
//!
//! ```text
//! expression = term { '+' term }        // OR, left-associative
//! term       = factor { '·' factor }     // AND, left-associative
//! factor     = '!' factor                // NOT, prefix
//!            | '(' expression ')'
//!            | '0' | '1'
//!            | [A-Za-z]                  // variable
//! ```
//!
//! The grammar is LL(1) on the leading token of a factor, so a single
//! left-to-right pass with one token of lookahead suffices.
//!
//! Positions in [`ParseError`] are 0-based character offsets.

use std::fmt;

use log::debug;

use crate::expr::Expr;

/// The AND operator: U+00B7 MIDDLE DOT.
pub const AND_CHAR: char = '·';
pub const OR_CHAR: char = '+';
pub const NOT_CHAR: char = '!';

/// Maximum nesting of `!` and parentheses in the text.
///
/// The parser recurses once per level, so this bounds its stack usage for
/// inputs like `!!!!...` or `((((...`. Flat `+`/`·` chains are parsed
/// iteratively and are not limited.
pub const MAX_NESTING: usize = 256;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Or,
    And,
    Not,
    Open,
    Close,
    Const(bool),
    Var(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Or => write!(f, "'{}'", OR_CHAR),
            Token::And => write!(f, "'{}'", AND_CHAR),
            Token::Not => write!(f, "'{}'", NOT_CHAR),
            Token::Open => write!(f, "'('"),
            Token::Close => write!(f, "')'"),
            Token::Const(b) => write!(f, "'{}'", if *b { 1 } else { 0 }),
            Token::Var(c) => write!(f, "variable '{}'", c),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A character that is not part of the syntax.
    UnexpectedChar(char),
    /// A digit other than `0` or `1`.
    InvalidLiteral(char),
    /// A token where it cannot appear.
    UnexpectedToken(Token),
    /// Input ended where a factor was expected.
    UnexpectedEnd,
    /// An `(` without a matching `)`; the position is that of the `(`.
    UnclosedParen,
    /// Nesting deeper than [`MAX_NESTING`].
    TooDeep,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at position {}: ", self.position)?;
        match self.kind {
            ParseErrorKind::UnexpectedChar(c) => write!(f, "unrecognized character '{}'", c),
            ParseErrorKind::InvalidLiteral(c) => {
                write!(f, "invalid literal '{}', expected '0' or '1'", c)
            }
            ParseErrorKind::UnexpectedToken(t) => write!(f, "unexpected {}", t),
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of expression"),
            ParseErrorKind::UnclosedParen => write!(f, "missing closing parenthesis"),
            ParseErrorKind::TooDeep => {
                write!(f, "expression nested deeper than {} levels", MAX_NESTING)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Splits `text` into positioned tokens, skipping whitespace.
pub fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let mut tokens = Vec::new();
    for (pos, c) in text.chars().enumerate() {
        let token = match c {
            c if c.is_whitespace() => continue,
            OR_CHAR => Token::Or,
            AND_CHAR => Token::And,
            NOT_CHAR => Token::Not,
            '(' => Token::Open,
            ')' => Token::Close,
            '0' => Token::Const(false),
            '1' => Token::Const(true),
            c if c.is_ascii_digit() => {
                return Err(ParseError::new(ParseErrorKind::InvalidLiteral(c), pos));
            }
            c if c.is_ascii_alphabetic() => Token::Var(c),
            c => return Err(ParseError::new(ParseErrorKind::UnexpectedChar(c), pos)),
        };
        tokens.push((pos, token));
    }
    Ok(tokens)
}

/// Parses `text` into an expression tree.
///
/// ```
/// use bool_solver::expr::Expr;
/// use bool_solver::parser::parse;
///
/// let e = parse("A + B · !C").unwrap();
/// assert_eq!(e, Expr::var('A') | Expr::var('B') & !Expr::var('C'));
///
/// assert!(parse("(A · B").is_err());
/// assert!(parse("A $ B").is_err());
/// ```
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end: text.chars().count(),
        depth: 0,
    };
    let expr = parser.expression()?;
    if let Some((pos, token)) = parser.peek() {
        return Err(ParseError::new(ParseErrorKind::UnexpectedToken(token), pos));
    }
    debug!("parse({:?}) -> {}", text, expr);
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    pos: usize,
    /// Character length of the input, reported for errors at end of input.
    end: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<(usize, Token)> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<(usize, Token)> {
        let item = self.peek();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn eat(&mut self, expected: Token) -> bool {
        match self.peek() {
            Some((_, token)) if token == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn enter(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ParseError::new(ParseErrorKind::TooDeep, position));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        while self.eat(Token::Or) {
            let rhs = self.term()?;
            lhs = Expr::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.factor()?;
        while self.eat(Token::And) {
            let rhs = self.factor()?;
            lhs = Expr::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let Some((pos, token)) = self.next() else {
            return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, self.end));
        };
        match token {
            Token::Not => {
                self.enter(pos)?;
                let inner = self.factor()?;
                self.leave();
                Ok(Expr::not(inner))
            }
            Token::Open => {
                self.enter(pos)?;
                let inner = self.expression()?;
                match self.next() {
                    Some((_, Token::Close)) => {}
                    Some((other_pos, other)) => {
                        return Err(ParseError::new(ParseErrorKind::UnexpectedToken(other), other_pos));
                    }
                    None => return Err(ParseError::new(ParseErrorKind::UnclosedParen, pos)),
                }
                self.leave();
                Ok(inner)
            }
            Token::Const(b) => Ok(Expr::Const(b)),
            Token::Var(c) => Ok(Expr::Var(c)),
            Token::Or | Token::And | Token::Close => {
                Err(ParseError::new(ParseErrorKind::UnexpectedToken(token), pos))
            }
        }
    }
}
