/// Operator routing.
///
/// Dispatches a binary operator to the arithmetic, comparison or logic
/// handler.
pub mod core;
/// Arithmetic on integers and reals.
pub mod scalar;
/// Equality and ordering comparisons.
pub mod comparison;
/// Logical `and` and `or`.
pub mod logic;
