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
    /// Executes an `if` statement.
    ///
    /// The condition is evaluated once. A truthy condition runs the `then`
    /// branch; otherwise the `else` branch runs if there is one. Branches run
    /// in the current environment, so assignments inside them are visible
    /// afterwards. A `return` inside either branch is passed on.
    pub fn exec_if(&mut self,
                   condition: &Node,
                   then_branch: &[Node],
                   else_branch: Option<&[Node]>,
                   env: &mut Environment,
                   globals: Option<&Environment>)
                   -> EvalResult<Completion> {
        let branch = if self.eval(condition, env, globals)?.is_truthy() {
            then_branch
        } else if let Some(else_branch) = else_branch {
            else_branch
        } else {
            return Ok(Completion::Normal(Value::None));
        };

        match self.interpret(branch, env, globals)? {
            Completion::Normal(_) => Ok(Completion::Normal(Value::None)),
            ret @ Completion::Return(_) => Ok(ret),
        }
    }
}
