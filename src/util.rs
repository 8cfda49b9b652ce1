/// Numeric conversion helpers.
///
/// Checked conversion from `f64` to `i64`, used where a real must stand in
/// for an integer.
pub mod num;
