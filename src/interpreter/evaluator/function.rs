use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Completion, EvalResult, Evaluator},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The arguments are evaluated left to right in the caller's
    /// environment. The function is then looked up in the caller's frame
    /// and, failing that, in the globals. A fresh frame binds each parameter
    /// to its argument and the body runs in that frame with the globals
    /// still visible; the caller's own locals are not. The frame is dropped
    /// when the call returns.
    ///
    /// # Returns
    /// The value of the first `return` reached in the body, or `None` if the
    /// body finishes without one.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no declaration is visible.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Node],
                                line: usize,
                                env: &mut Environment,
                                globals: Option<&Environment>)
                                -> EvalResult<Value> {
        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval(argument, env, globals)?);
        }

        let function = env.function(name)
                          .or_else(|| globals.and_then(|g| g.function(name)))
                          .cloned()
                          .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                           line })?;

        if values.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: function.params.len(),
                                                     actual: values.len(),
                                                     line });
        }

        let mut frame = Environment::new();
        for (param, value) in function.params.iter().zip(values) {
            frame.define(param, value);
        }

        let outer = globals.unwrap_or(&*env);
        match self.interpret(&function.body, &mut frame, Some(outer))? {
            Completion::Return(value) => Ok(value),
            Completion::Normal(_) => Ok(Value::None),
        }
    }
}
