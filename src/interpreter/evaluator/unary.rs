use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a prefix operator on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the number unchanged.
    /// - `Negate`: numeric negation for integers and reals.
    ///
    /// # Errors
    /// - `NonNumericOperand` for booleans and `None`.
    /// - `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use gravity::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, &Value::Real(1.5), 1).unwrap();
    /// assert_eq!(v, Value::Real(1.5));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, &Value::Boolean(true), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Integer(_) | Value::Real(_)) => Ok(value.clone()),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
            _ => Err(RuntimeError::NonNumericOperand { op: op.to_string(),
                                                       value: value.clone(),
                                                       line }),
        }
    }
}
