/// Parser entry points.
///
/// Contains the program and expression entry points and the shared result
/// type.
pub mod core;

/// Prefix operators and primary expressions.
///
/// Handles unary `+`/`-`, literals, variables, function calls and
/// parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence layers from logical `or` down to
/// multiplication.
pub mod binary;

/// Block and body parsing.
///
/// Parses brace-delimited statement sequences and the `:` single-statement
/// form used by control-flow bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectation, identifiers and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Assignments, `print`, `return`, control flow and function declarations.
pub mod statement;
