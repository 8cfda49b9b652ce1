use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_i64_checked,
};

/// Represents a runtime value in the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision real. Produced by `/`, which always divides as
    /// reals, and by mixed integer and real arithmetic.
    Real(f64),
    /// A boolean value (`true` or `false`), produced by comparisons and
    /// `and`/`or`.
    Boolean(bool),
    /// The result of statements, and of calls that finish without `return`.
    None,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Converts the value to an `f64` for use with `op`.
    ///
    /// # Errors
    /// `NonNumericOperand` for booleans and `None`. Integers beyond `2^53`
    /// round to the nearest representable real.
    ///
    /// # Example
    /// ```
    /// use gravity::{ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let real = Value::Integer(10).as_real(BinaryOperator::Div, 1).unwrap();
    /// assert_eq!(real, 10.0);
    ///
    /// assert!(Value::Boolean(true).as_real(BinaryOperator::Div, 1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, op: BinaryOperator, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::NonNumericOperand { op: op.to_string(),
                                                       value: self.clone(),
                                                       line }),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Integers pass through; reals are accepted only when they hold an
    /// integral value within range.
    ///
    /// # Errors
    /// `ExpectedInteger` for anything else.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        let expected = || RuntimeError::ExpectedInteger { value: self.clone(),
                                                          line };
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_checked(*r).ok_or_else(expected),
            _ => Err(expected()),
        }
    }

    /// Returns whether the value counts as true in a condition.
    ///
    /// Booleans are themselves, numbers are truthy when non-zero and `None`
    /// is falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::None => false,
        }
    }

    /// Returns `true` if the value is an [`Value::Integer`] or a
    /// [`Value::Real`].
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }

    /// Compares two values for `==`.
    ///
    /// Numbers compare by numeric value across integer and real, booleans by
    /// value, and `None` equals only itself. Values of different kinds are
    /// never equal.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                *a as f64 == *b
            },
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part visible: `2.0`, not `2`.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::None => write!(f, "None"),
        }
    }
}
