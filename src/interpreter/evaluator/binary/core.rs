use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Both operands are always evaluated before this is called, including
    /// for `and` and `or`: there is no short-circuiting.
    ///
    /// # Example
    /// ```
    /// use gravity::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                  &Value::Integer(3),
    ///                                  &Value::Integer(4),
    ///                                  1).unwrap();
    /// assert_eq!(sum, Value::Integer(7));
    ///
    /// let quotient = Evaluator::eval_binary(BinaryOperator::Div,
    ///                                       &Value::Integer(7),
    ///                                       &Value::Integer(2),
    ///                                       1).unwrap();
    /// assert_eq!(quotient, Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add | Sub | Mul => Self::eval_scalar_op(op, left, right, line),
            Div => Self::eval_division(left, right, line),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
