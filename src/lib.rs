//! # apl360
//!
//! apl360 evaluates APL/360-style expressions: numbers and vectors of numbers
//! combined by single-glyph primitive functions, read strictly from right to
//! left.
//!
//! ```text
//!       2×3+4
//! 14
//!       v ← ⍳5
//! 1 2 3 4 5
//!       +/v×v
//! 55
//! ```
//!
//! Every glyph has a monadic meaning (one argument, to its right) and a
//! dyadic meaning (arguments on both sides). Scalars extend to vectors,
//! vectors combine elementwise, and any failure aborts the whole line
//! without binding any of its assignments.

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

use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::Evaluator, parser::core::parse,
        settings::Settings, value::core::Value,
    },
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while evaluating a
/// line. Every error carries enough context (a column, a name, the lengths
/// involved) to be shown to the user as is.
///
/// # Responsibilities
/// - Defines error enums for the two phases (lexer, evaluator).
/// - Wraps both in a single `Error` so callers can use `?` throughout.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Evaluates expressions.
///
/// This module ties together lexing, bracket pairing, evaluation, values and
/// settings. Nothing here performs I/O.
///
/// # Responsibilities
/// - Coordinates the lexer, the token stream and the evaluator.
/// - Provides the value model and its display formatting.
/// - Holds the variables of a session.
pub mod interpreter;
/// The interactive surface.
///
/// Recognizes session commands (`help`, `exit`) and wraps an environment
/// and settings in a `Session` that handles one line at a time. Printing
/// and reading are left to the caller.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// Conversions between `f64` and the integer types used for counts, lengths
/// and indices, reporting inexact conversions as domain errors.
pub mod util;

pub use repl::{Reply, Session};

/// Evaluates one line of input.
///
/// The line is tokenized and reduced against `environment`. Assignments made
/// by the line are kept only if the whole line succeeds; on any error the
/// environment is left exactly as it was.
///
/// # Returns
/// `None` for a blank or comment-only line, otherwise the line's value.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or evaluated.
///
/// # Examples
/// ```
/// use apl360::{
///     evaluate_line,
///     interpreter::{environment::Environment, settings::Settings, value::core::Value},
/// };
///
/// let mut env = Environment::new();
/// let settings = Settings::default();
///
/// let x = evaluate_line("x ← 5 + 3", &mut env, &settings).unwrap();
/// assert_eq!(x, Some(Value::Scalar(8.0)));
///
/// // A failing line binds nothing, not even its leading assignment.
/// assert!(evaluate_line("y ← 1 + nothing", &mut env, &settings).is_err());
/// assert!(evaluate_line("y", &mut env, &settings).is_err());
///
/// assert_eq!(evaluate_line("⍝ just a comment", &mut env, &settings).unwrap(), None);
/// ```
pub fn evaluate_line(source: &str,
                     environment: &mut Environment,
                     settings: &Settings)
                     -> Result<Option<Value>, Error> {
    let stream = parse(source)?;
    let result = Evaluator::new(&stream, environment, settings).run();

    match result {
        Ok(value) => {
            environment.commit();
            Ok(value)
        },
        Err(e) => {
            environment.discard();
            Err(e.into())
        },
    }
}
