//! Structural check and left-to-right evaluation of decoded expressions.
//!
//! A well-formed expression strictly alternates digit, operator, digit, …
//! and starts with a digit. Evaluation folds from left to right with no
//! operator precedence: `2+3*4` is `20`.

use super::codec::{Operator, Symbol};
use crate::error::{ExprGaError, Result};

/// Length of the longest alternating digit/operator prefix.
///
/// Returns 0 when the sequence is empty or does not start with a digit,
/// the index where alternation first breaks otherwise, or `symbols.len()`
/// when the whole sequence alternates.
///
/// ```
/// use exprga::expr::{check_form, parse_symbols};
///
/// assert_eq!(check_form(&parse_symbols("2+3-1+4").unwrap()), 7);
/// assert_eq!(check_form(&parse_symbols("++34").unwrap()), 0);
/// assert_eq!(check_form(&parse_symbols("2+3+*").unwrap()), 4);
/// ```
pub fn check_form(symbols: &[Symbol]) -> usize {
    match symbols.first() {
        Some(first) if first.is_digit() => {}
        _ => return 0,
    }

    symbols
        .iter()
        .enumerate()
        .skip(1)
        .find(|(i, s)| s.is_digit() != (i % 2 == 0))
        .map_or(symbols.len(), |(i, _)| i)
}

/// Folds a well-formed expression from left to right.
///
/// # Errors
/// - [`ExprGaError::MalformedExpression`] if [`check_form`] does not cover
///   the whole sequence (this includes a trailing operator)
/// - [`ExprGaError::DivideByZero`] for `/` followed by `0`
/// - [`ExprGaError::ArithmeticOverflow`] if a partial result leaves `i64`
pub fn evaluate(symbols: &[Symbol]) -> Result<i64> {
    let matched = check_form(symbols);
    if matched != symbols.len() || symbols.len() % 2 == 0 {
        return Err(ExprGaError::MalformedExpression {
            matched,
            len: symbols.len(),
        });
    }

    let malformed = |matched| ExprGaError::MalformedExpression {
        matched,
        len: symbols.len(),
    };

    let mut value = match symbols[0] {
        Symbol::Digit(d) => i64::from(d),
        Symbol::Op(_) => return Err(malformed(0)),
    };
    for (i, pair) in symbols[1..].chunks_exact(2).enumerate() {
        match (pair[0], pair[1]) {
            (Symbol::Op(op), Symbol::Digit(d)) => value = apply(op, value, i64::from(d))?,
            _ => return Err(malformed(1 + 2 * i)),
        }
    }
    Ok(value)
}

/// Parses text such as `7*2-4` into symbols. Returns `None` on any
/// character that is not a digit or one of `+ - * /`.
pub fn parse_symbols(text: &str) -> Option<Vec<Symbol>> {
    text.chars().map(Symbol::from_char).collect()
}

fn apply(op: Operator, lhs: i64, rhs: i64) -> Result<i64> {
    let out = match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Sub => lhs.checked_sub(rhs),
        Operator::Mul => lhs.checked_mul(rhs),
        Operator::Div => {
            if rhs == 0 {
                return Err(ExprGaError::DivideByZero);
            }
            lhs.checked_div(rhs)
        }
    };
    out.ok_or(ExprGaError::ArithmeticOverflow)
}
