use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values (see [`Value::equals`]).
    /// Ordering operators require two numbers; integers are compared exactly
    /// and mixed pairs as reals.
    ///
    /// # Errors
    /// `InvalidOperator` when an ordering operator meets a boolean or `None`.
    ///
    /// # Example
    /// ```
    /// use gravity::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_comparison(BinaryOperator::Less,
    ///                                         &Value::Integer(3),
    ///                                         &Value::Real(3.5),
    ///                                         1);
    ///
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let invalid = || RuntimeError::InvalidOperator { op: op.to_string(),
                                                         left: left.clone(),
                                                         right: right.clone(),
                                                         line };

        let ordering = match op {
            BinaryOperator::Equal => return Ok(left.equals(right).into()),
            BinaryOperator::NotEqual => return Ok((!left.equals(right)).into()),
            _ if !left.is_numeric() || !right.is_numeric() => return Err(invalid()),
            _ => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
                _ => left.as_real(op, line)?
                         .partial_cmp(&right.as_real(op, line)?),
            },
        };

        // NaN compares as unordered, and every ordering test on it is false.
        let Some(ordering) = ordering else {
            return Ok(false.into());
        };

        let result = match op {
            BinaryOperator::Less => ordering == Ordering::Less,
            BinaryOperator::Greater => ordering == Ordering::Greater,
            BinaryOperator::LessEqual => ordering != Ordering::Greater,
            BinaryOperator::GreaterEqual => ordering != Ordering::Less,
            _ => return Err(invalid()),
        };

        Ok(result.into())
    }
}
