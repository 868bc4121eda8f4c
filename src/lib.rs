//! # stackcalc
//!
//! stackcalc is an interactive calculator for infix arithmetic written in
//! Rust. It evaluates expressions over `f64` with the operators
//! `+ - * / % ^`, parentheses and named variables, using a two-stack
//! (shunting-yard style) algorithm instead of a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, lexer::tokenize},
};

/// Provides unified error types for tokenizing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexical, structural and
///   stack reduction).
/// - Wraps them in a single [`error::Error`] so `?` composes across phases.
pub mod error;
/// Orchestrates evaluation of input lines.
///
/// This module ties together the lexer, the evaluator, the variable store
/// and the interactive session.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, evaluator and store.
/// - Provides the session used by the command-line front end.
pub mod interpreter;
/// General-purpose helpers that are not specific to one phase.
pub mod util;

/// Evaluates a single expression against a fresh set of variables.
///
/// Only `pi` and `e` are defined. Assignments are accepted, but the binding
/// is discarded with the rest of the state once this function returns.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or is not a valid
/// expression.
///
/// # Examples
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(evaluate("r = 2").unwrap(), 2.0);
///
/// // Unbalanced parentheses.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let mut evaluator = Evaluator::new();
    Ok(evaluator.evaluate(&tokens)?.value)
}
