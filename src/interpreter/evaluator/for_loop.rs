use crate::{
    ast::Node,
    interpreter::{
        evaluator::{
            core::{Completion, EvalResult, Evaluator},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Executes a counting `for` loop.
    ///
    /// `start` and `end` are evaluated once, before the first iteration, and
    /// must be integers. The loop variable is bound in the current
    /// environment to each value from `start` up to and including `end`,
    /// and the body runs once per value. Afterwards the variable stays bound
    /// to the last value. When `start > end` the body never runs and the
    /// variable is left untouched.
    ///
    /// # Errors
    /// `ExpectedInteger` if a bound is not an integer, plus anything raised
    /// by the body.
    ///
    /// # Example
    /// ```
    /// use gravity::{interpreter::value::core::Value, run};
    ///
    /// let trace = run("total = 0; for i = 1 .. 4 { total = total + i; } total;").unwrap();
    ///
    /// assert_eq!(trace.value, Some(Value::Integer(10)));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn exec_for(&mut self,
                    var: &str,
                    start: &Node,
                    end: &Node,
                    body: &[Node],
                    line: usize,
                    env: &mut Environment,
                    globals: Option<&Environment>)
                    -> EvalResult<Completion> {
        let start = self.eval(start, env, globals)?.as_integer(line)?;
        let end = self.eval(end, env, globals)?.as_integer(line)?;

        for i in start..=end {
            env.define(var, Value::from(i));

            if let ret @ Completion::Return(_) = self.interpret(body, env, globals)? {
                return Ok(ret);
            }
        }

        Ok(Completion::Normal(Value::None))
    }
}
