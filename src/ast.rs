use std::rc::Rc;

/// An abstract syntax tree (AST) node.
///
/// Every construct of the language, expression or statement, is one variant
/// of this enum, and the evaluator matches on it exhaustively. Each variant
/// records the line of the token it starts at.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer literal such as `42`.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VariableRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Binds the value of an expression to a name, `x = expr;`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr;`
    PrintStatement {
        /// The expression whose value is printed.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A conditional with an optional `else` branch.
    IfStatement {
        /// The condition expression.
        condition:   Box<Self>,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise, if present.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A pre-tested loop.
    WhileStatement {
        /// Re-evaluated before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A counting loop over the inclusive range `start..end`.
    ForStatement {
        /// The loop variable name.
        var:   String,
        /// The first value bound to the loop variable.
        start: Box<Self>,
        /// The last value bound to the loop variable.
        end:   Box<Self>,
        /// The loop body.
        body:  Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A named function declaration.
    FunctionDeclaration(Rc<FunctionDef>),
    /// A call such as `add(1, 2)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `return expr;`
    ReturnStatement {
        /// The returned expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use gravity::ast::Node;
    ///
    /// let node = Node::VariableRef { name: "x".to_string(),
    ///                                line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::VariableRef { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::PrintStatement { line, .. }
            | Self::IfStatement { line, .. }
            | Self::WhileStatement { line, .. }
            | Self::ForStatement { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::ReturnStatement { line, .. } => *line,
            Self::FunctionDeclaration(def) => def.line,
        }
    }

    /// Returns `true` if the node is an expression rather than a statement.
    ///
    /// A bare expression used as a top-level statement supplies the final
    /// value of a run.
    #[must_use]
    pub const fn is_expression(&self) -> bool {
        matches!(self,
                 Self::IntegerLiteral { .. }
                 | Self::BooleanLiteral { .. }
                 | Self::VariableRef { .. }
                 | Self::BinaryOp { .. }
                 | Self::UnaryOp { .. }
                 | Self::FunctionCall { .. })
    }
}

/// The root of a parsed program: its top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Node>,
}

/// Represents a user-defined function definition.
///
/// Expression-bodied functions (`function f(x) -> x * x;`) are stored with a
/// single `return` statement as their body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The statements run when the function is called.
    pub body:   Vec<Node>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
