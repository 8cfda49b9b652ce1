use crate::interpreter::value::core::Value;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is bound in neither the current frame
    /// nor the globals.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function with no visible declaration.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The number of arguments did not match the number of parameters.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        actual:   usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to operands it is not defined for, such as
    /// ordering two booleans.
    InvalidOperator {
        /// The operator.
        op:    String,
        /// Left operand.
        left:  Value,
        /// Right operand.
        right: Value,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An arithmetic operator received a boolean or `None` operand.
    NonNumericOperand {
        /// The operator.
        op:    String,
        /// The offending operand.
        value: Value,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed `i64`.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `for` bound did not evaluate to an integer.
    ExpectedInteger {
        /// The value found instead.
        value: Value,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  actual,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' expects {expected} argument(s), but {actual} were given."),
            Self::InvalidOperator { op,
                                    left,
                                    right,
                                    line, } => write!(f,
                                                      "Error on line {line}: Operator '{op}' is not defined for {left} and {right}."),
            Self::NonNumericOperand { op, value, line } => write!(f,
                                                                  "Error on line {line}: Operator '{op}' expects a number, found {value}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::ExpectedInteger { value, line } => {
                write!(f, "Error on line {line}: Expected an integer, found {value}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
