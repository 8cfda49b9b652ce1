use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

impl Evaluator {
    /// Evaluates `and` or `or` on two already evaluated operands.
    ///
    /// The operands are converted with [`Value::is_truthy`] and the result
    /// is always a boolean. Any other operator yields `false`.
    ///
    /// # Example
    /// ```
    /// use gravity::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_logic(BinaryOperator::Or, &Value::Integer(0), &Value::Boolean(true));
    /// assert_eq!(result, Value::Boolean(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let result = match op {
            BinaryOperator::And => left.is_truthy() && right.is_truthy(),
            BinaryOperator::Or => left.is_truthy() || right.is_truthy(),
            _ => false,
        };
        Value::from(result)
    }
}
