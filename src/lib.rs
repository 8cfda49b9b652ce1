//! # gravity
//!
//! gravity is a small scripting language written in Rust. Source text runs
//! through three stages: a lexer producing tokens, a recursive-descent
//! parser producing an abstract syntax tree, and a tree-walking evaluator
//! that executes that tree directly.
//!
//! ```
//! let trace = gravity::run("function add(a, b) -> a + b; print add(2, 3);").unwrap();
//! assert_eq!(trace.output, ["5"]);
//! ```

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
    ast::Program,
    error::{ParseError, PipelineError, RuntimeError},
    interpreter::{evaluator::core::Evaluator, lexer::Token, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of a program as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides error types for every stage.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluation, each carrying the source line it refers to, plus the
/// composed error returned by [`run`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use interpreter::{evaluator::core::ExecutionTrace, lexer::tokenize};

/// Parses a token sequence into a [`Program`].
///
/// The sequence normally ends with the `EndOfInput` token that [`tokenize`]
/// appends; if it does not, one is assumed after the last token, on that
/// token's line.
///
/// # Example
/// ```
/// let tokens = gravity::tokenize("x = 1; print x;").unwrap();
/// let program = gravity::parse(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_program(tokens)
}

/// Evaluates a program with a fresh global environment.
///
/// # Example
/// ```
/// use gravity::interpreter::value::core::Value;
///
/// let program = gravity::parse(&gravity::tokenize("print 7 / 2; 1 + 1;").unwrap()).unwrap();
/// let trace = gravity::evaluate(&program).unwrap();
///
/// assert_eq!(trace.output, ["3.5"]);
/// assert_eq!(trace.value, Some(Value::Integer(2)));
/// ```
pub fn evaluate(program: &Program) -> Result<ExecutionTrace, RuntimeError> {
    Evaluator::new().evaluate(program)
}

/// Lexes, parses and evaluates `source` in one call.
///
/// Each stage runs only if the previous one succeeded, and the first error
/// is returned unchanged, wrapped in [`PipelineError`].
///
/// # Example
/// ```
/// use gravity::error::{PipelineError, RuntimeError};
///
/// let trace = gravity::run("var x = 5; print x + 1;").unwrap();
/// assert_eq!(trace.output, ["6"]);
///
/// let error = gravity::run("print y;").unwrap_err();
/// assert!(matches!(error,
///                  PipelineError::Runtime(RuntimeError::UndefinedVariable { .. })));
/// ```
pub fn run(source: &str) -> Result<ExecutionTrace, PipelineError> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(evaluate(&program)?)
}

