//! # letcalc
//!
//! letcalc is an interactive floating-point calculator written in Rust.
//! It reads a line at a time, evaluates the arithmetic statements on it and
//! remembers variables declared with `let` for the rest of the session.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcError, interpreter::session::Session};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while a line is lexed,
/// parsed and evaluated. Every error carries the column of the offending
/// token so the user can find it in the line they typed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies errors with [`error::ErrorKind`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of lines.
///
/// This module ties together the lexer, the parser and the variable table
/// to turn a line of text into a value.
///
/// # Responsibilities
/// - Coordinates the lexer, the grammar functions and the variable table.
/// - Provides sessions that keep variables across lines.
pub mod interpreter;

/// Evaluates one line in a fresh session and returns its value.
///
/// The value of a line is the value of its last statement. Variables declared
/// on the line are discarded afterwards; use a [`Session`] to keep them.
///
/// # Errors
/// Returns an error if the line cannot be parsed or a value cannot be
/// computed.
///
/// # Examples
/// ```
/// use letcalc::get_result;
///
/// // Two statements on one line: the declaration runs first.
/// let value = get_result("let x = 2 (x + 2) * 3").unwrap();
/// assert_eq!(value, 12.0);
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("y + 1");
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<f64, CalcError> {
    Session::new().evaluate(source)
}
