/// Converts an `f64` to `i64` if the value is finite, integral and within
/// range.
///
/// ## Example
/// ```
/// use gravity::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(3.0), Some(3));
/// assert_eq!(f64_to_i64_checked(3.5), None);
/// assert_eq!(f64_to_i64_checked(f64::NAN), None);
/// assert_eq!(f64_to_i64_checked(1e19), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
