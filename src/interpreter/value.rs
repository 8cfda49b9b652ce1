/// Runtime values.
///
/// Defines the `Value` enum produced by evaluating expressions, together with
/// numeric conversions, truthiness and the textual form used by `print`.
pub mod core;
