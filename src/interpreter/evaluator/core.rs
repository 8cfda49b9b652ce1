use std::rc::Rc;

use crate::{
    ast::{Node, Program},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement, or a sequence of statements, finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Ran to the end; carries the value of the last statement.
    Normal(Value),
    /// Stopped at a `return`; carries the returned value up to the enclosing
    /// function body.
    Return(Value),
}

impl Completion {
    /// The carried value, regardless of how the statement finished.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Normal(value) | Self::Return(value) => value,
        }
    }
}

/// The observable outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionTrace {
    /// One line per executed `print`, in execution order.
    pub output: Vec<String>,
    /// The value of the last top-level statement if it was a bare
    /// expression, or the value of a top-level `return`.
    pub value:  Option<Value>,
}

/// The tree-walking evaluator.
///
/// The evaluator owns the global [`Environment`]. Function calls get a
/// fresh frame environment which is passed down explicitly alongside the
/// globals, so a function body sees only its own frame plus the globals.
///
/// ## Usage
///
/// An `Evaluator` can be reused across [`Evaluator::evaluate`] calls; the
/// globals persist between them, which is what an interactive shell wants.
/// For one-shot runs use [`crate::evaluate`].
#[derive(Debug, Default)]
pub struct Evaluator {
    globals: Environment,
    output:  Vec<String>,
}

impl Evaluator {
    /// Creates an evaluator with empty globals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The global environment.
    #[must_use]
    pub const fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Runs every top-level statement of `program` in order.
    ///
    /// A top-level `return` stops the program early and its value becomes
    /// the trace value. On failure nothing is reported except the error:
    /// output collected so far is discarded, but bindings made before the
    /// failure remain in the globals.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised.
    ///
    /// # Example
    /// ```
    /// use gravity::interpreter::{
    ///     evaluator::core::Evaluator, lexer::tokenize, parser::core::parse_program,
    ///     value::core::Value,
    /// };
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// let program = parse_program(&tokenize("x = 20;").unwrap()).unwrap();
    /// evaluator.evaluate(&program).unwrap();
    ///
    /// let program = parse_program(&tokenize("print x + 1; x * 2;").unwrap()).unwrap();
    /// let trace = evaluator.evaluate(&program).unwrap();
    ///
    /// assert_eq!(trace.output, ["21"]);
    /// assert_eq!(trace.value, Some(Value::Integer(40)));
    /// ```
    pub fn evaluate(&mut self, program: &Program) -> EvalResult<ExecutionTrace> {
        let mut globals = std::mem::take(&mut self.globals);
        let result = self.run_top_level(&program.statements, &mut globals);
        self.globals = globals;

        let output = std::mem::take(&mut self.output);
        let value = result?;

        Ok(ExecutionTrace { output, value })
    }

    fn run_top_level(&mut self,
                     statements: &[Node],
                     globals: &mut Environment)
                     -> EvalResult<Option<Value>> {
        let mut value = None;

        for statement in statements {
            match self.exec(statement, globals, None)? {
                Completion::Normal(v) => value = statement.is_expression().then_some(v),
                Completion::Return(v) => return Ok(Some(v)),
            }
        }

        Ok(value)
    }

    /// Runs a statement sequence in order.
    ///
    /// Stops at the first statement that completes with
    /// [`Completion::Return`] and hands that completion to the caller, which
    /// is how `return` leaves nested `if`/`while`/`for` bodies. Otherwise the
    /// value of the last statement is carried in [`Completion::Normal`].
    ///
    /// # Parameters
    /// - `statements`: The statements to run.
    /// - `env`: The current frame; assignments bind here.
    /// - `globals`: The global environment, or `None` when `env` is the
    ///   globals.
    pub fn interpret(&mut self,
                     statements: &[Node],
                     env: &mut Environment,
                     globals: Option<&Environment>)
                     -> EvalResult<Completion> {
        let mut last = Value::None;

        for statement in statements {
            match self.exec(statement, env, globals)? {
                Completion::Normal(value) => last = value,
                ret @ Completion::Return(_) => return Ok(ret),
            }
        }

        Ok(Completion::Normal(last))
    }

    /// Executes a single node.
    ///
    /// Expressions complete normally with their value; statements complete
    /// normally with `None`, except `return`, which completes with
    /// [`Completion::Return`], and control flow that passes on a `return`
    /// from its body.
    pub fn exec(&mut self,
                node: &Node,
                env: &mut Environment,
                globals: Option<&Environment>)
                -> EvalResult<Completion> {
        let value = match node {
            Node::IntegerLiteral { value, .. } => Value::from(*value),
            Node::BooleanLiteral { value, .. } => Value::from(*value),
            Node::VariableRef { name, line } => Self::lookup_variable(name, *line, env, globals)?,
            Node::BinaryOp { op,
                             left,
                             right,
                             line, } => {
                let left = self.eval(left, env, globals)?;
                let right = self.eval(right, env, globals)?;
                Self::eval_binary(*op, &left, &right, *line)?
            },
            Node::UnaryOp { op, operand, line } => {
                let operand = self.eval(operand, env, globals)?;
                Self::eval_unary(*op, &operand, *line)?
            },
            Node::FunctionCall { name,
                                 arguments,
                                 line, } => {
                self.call_function(name, arguments, *line, env, globals)?
            },
            Node::Assignment { name, value, .. } => {
                let value = self.eval(value, env, globals)?;
                env.define(name, value);
                Value::None
            },
            Node::PrintStatement { expr, .. } => {
                let value = self.eval(expr, env, globals)?;
                self.output.push(value.to_string());
                Value::None
            },
            Node::IfStatement { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                return self.exec_if(condition, then_branch, else_branch.as_deref(), env, globals);
            },
            Node::WhileStatement { condition, body, .. } => {
                return self.exec_while(condition, body, env, globals);
            },
            Node::ForStatement { var,
                                 start,
                                 end,
                                 body,
                                 line, } => {
                return self.exec_for(var, start, end, body, *line, env, globals);
            },
            Node::FunctionDeclaration(def) => {
                env.declare_function(Rc::clone(def));
                Value::None
            },
            Node::ReturnStatement { value, .. } => {
                return Ok(Completion::Return(self.eval(value, env, globals)?));
            },
        };

        Ok(Completion::Normal(value))
    }

    /// Evaluates a node for its value.
    pub fn eval(&mut self,
                node: &Node,
                env: &mut Environment,
                globals: Option<&Environment>)
                -> EvalResult<Value> {
        Ok(self.exec(node, env, globals)?.into_value())
    }

    /// Looks up a variable by name.
    ///
    /// Variable lookup checks, in order:
    /// 1. The current frame.
    /// 2. The globals, when the current frame is a function call.
    ///
    /// # Errors
    /// `UndefinedVariable` if the name is bound in neither.
    pub fn lookup_variable(name: &str,
                           line: usize,
                           env: &Environment,
                           globals: Option<&Environment>)
                           -> EvalResult<Value> {
        env.get(name)
           .or_else(|| globals.and_then(|g| g.get(name)))
           .cloned()
           .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                            line })
    }
}
