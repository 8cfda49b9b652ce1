use std::{collections::HashMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// The bindings of one scope.
///
/// The evaluator keeps one `Environment` for the globals and creates a fresh
/// one for every function call; a call's environment is dropped when the
/// call returns. Variables and functions live in separate tables, so a name
/// may refer to both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Rc<FunctionDef>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable bound directly in this environment.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, creating the binding or overwriting it.
    ///
    /// # Example
    /// ```
    /// use gravity::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Integer(1));
    /// env.define("x", Value::Integer(2));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Looks up a function declared directly in this environment.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Rc<FunctionDef>> {
        self.functions.get(name)
    }

    /// Registers a function under its own name, replacing any earlier
    /// declaration of the same name.
    pub fn declare_function(&mut self, def: Rc<FunctionDef>) {
        self.functions.insert(def.name.clone(), def);
    }

    /// The number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
