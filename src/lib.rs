//! # aritree
//!
//! aritree is an integer arithmetic calculator written in Rust.
//! It scans an expression into depth-tagged tokens, builds a binary
//! expression tree by recursively splitting at the weakest-binding operator,
//! and evaluates that tree with checked `i64` arithmetic.

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
    interpreter::{evaluator, lexer::tokenize, parser::build_tree},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an arithmetic expression as a strict binary tree. The tree is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the operator variants and their priority classes.
/// - Defines literal and operator tree nodes with source columns attached
///   for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// building or evaluating an expression. It standardizes error reporting and
/// carries the source column of each failure for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches column numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the tree builder and the evaluator
/// to provide a complete pipeline from source text to integer result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an arithmetic expression and returns the resulting integer.
///
/// This is the single externally visible operation of the crate: the
/// expression is scanned into depth-tagged tokens, assembled into a binary
/// tree, and walked bottom-up. Each call is independent and touches no
/// shared mutable state, so concurrent calls over different expressions are
/// safe.
///
/// # Parameters
/// - `expression`: The expression text, e.g. `"(2+3)*4"`.
///
/// # Returns
/// The computed `i64` value.
///
/// # Errors
/// Returns an [`Error`] if scanning, tree construction or evaluation fails.
/// The failure is never recovered internally and never replaced with a
/// fallback value.
///
/// # Examples
/// ```
/// use aritree::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20);
/// assert_eq!(evaluate("10-2-3").unwrap(), 5);
///
/// // Division by zero is reported, never guessed around.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    let tokens = tokenize(expression)?;
    let tree = build_tree(&tokens)?;

    Ok(evaluator::evaluate(&tree)?)
}
