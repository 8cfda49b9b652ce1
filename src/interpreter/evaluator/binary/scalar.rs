use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates `+`, `-` or `*` on two numbers.
    ///
    /// Two integers produce a checked integer result. If either side is a
    /// real, both are promoted to reals.
    ///
    /// # Errors
    /// - `NonNumericOperand` if either side is a boolean or `None`.
    /// - `Overflow` if integer arithmetic leaves the `i64` range.
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            let result = match op {
                BinaryOperator::Add => a.checked_add(*b),
                BinaryOperator::Sub => a.checked_sub(*b),
                BinaryOperator::Mul => a.checked_mul(*b),
                _ => {
                    return Err(RuntimeError::InvalidOperator { op: op.to_string(),
                                                               left: left.clone(),
                                                               right: right.clone(),
                                                               line });
                },
            };
            return result.map(Value::from)
                         .ok_or(RuntimeError::Overflow { line });
        }

        let a = left.as_real(op, line)?;
        let b = right.as_real(op, line)?;

        match op {
            BinaryOperator::Add => Ok(Value::from(a + b)),
            BinaryOperator::Sub => Ok(Value::from(a - b)),
            BinaryOperator::Mul => Ok(Value::from(a * b)),
            _ => Err(RuntimeError::InvalidOperator { op: op.to_string(),
                                                     left: left.clone(),
                                                     right: right.clone(),
                                                     line }),
        }
    }

    /// Evaluates `/`.
    ///
    /// Division always works on reals, so `7 / 2` is `3.5` and `6 / 3` is
    /// `2.0`.
    ///
    /// # Errors
    /// - `NonNumericOperand` if either side is a boolean or `None`.
    /// - `DivisionByZero` if the divisor is zero.
    #[allow(clippy::float_cmp)]
    pub fn eval_division(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let a = left.as_real(BinaryOperator::Div, line)?;
        let b = right.as_real(BinaryOperator::Div, line)?;

        if b == 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        Ok(Value::from(a / b))
    }
}
