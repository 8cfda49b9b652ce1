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
    /// Executes a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration and the body
    /// runs in the current environment, so changes made by one iteration are
    /// seen by the next. A loop whose condition is false from the start runs
    /// zero times. A loop whose condition never turns false runs until the
    /// host gives out; there is no iteration limit.
    pub fn exec_while(&mut self,
                      condition: &Node,
                      body: &[Node],
                      env: &mut Environment,
                      globals: Option<&Environment>)
                      -> EvalResult<Completion> {
        while self.eval(condition, env, globals)?.is_truthy() {
            if let ret @ Completion::Return(_) = self.interpret(body, env, globals)? {
                return Ok(ret);
            }
        }

        Ok(Completion::Normal(Value::None))
    }
}
