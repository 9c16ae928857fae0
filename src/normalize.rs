//! Complement notation rewriting.
//!
//! Textbooks often write the complement of `A` as `A'` or as `A` with an
//! overline (`A̅`, i.e. `A` followed by U+0305 COMBINING OVERLINE). The grammar
//! only knows prefix `!`, so this pre-parse step rewrites suffix complements
//! into prefix form:
//!
//! ```
//! use bool_solver::normalize::normalize_complements;
//!
//! assert_eq!(normalize_complements("A' + B\u{0305}"), "!A + !B");
//! assert_eq!(normalize_complements("A''"), "!!A");
//! ```
//!
//! Only letters are affected. A suffix attached to anything else, such as
//! `(A + B)'`, is left untouched and will be rejected by the parser.

use std::iter::Peekable;
use std::str::Chars;

pub const PRIME: char = '\'';
pub const COMBINING_OVERLINE: char = '\u{0305}';

fn is_complement_suffix(c: char) -> bool {
    c == PRIME || c == COMBINING_OVERLINE
}

fn count_suffixes(chars: &mut Peekable<Chars>) -> usize {
    let mut count = 0;
    while chars.next_if(|&c| is_complement_suffix(c)).is_some() {
        count += 1;
    }
    count
}

/// Rewrites `X'` and `X̅` into `!X` for every letter `X`.
pub fn normalize_complements(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_alphabetic() {
            let negations = count_suffixes(&mut chars);
            output.extend(std::iter::repeat(crate::parser::NOT_CHAR).take(negations));
        }
        output.push(c);
    }
    output
}
