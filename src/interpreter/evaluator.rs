/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` and `-`.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, statement dispatch, statement sequences and the
/// execution trace.
pub mod core;

/// Variable and function bindings for one scope.
pub mod environment;

/// Evaluation of `if` statements.
pub mod conditional;

/// Evaluation of counting `for` loops.
///
/// Binds the loop variable to each value of an inclusive range and runs the
/// body in the same environment.
pub mod for_loop;

/// Evaluation of `while` loops.
pub mod while_loop;

/// Function evaluation.
///
/// Handles declarations, argument checking, call frames and return values.
pub mod function;
