/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST directly, with no intermediate bytecode,
/// maintaining the global environment and one environment per function
/// call, and collects the lines produced by `print`.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements.
/// - Handles variables, functions, `return` and control flow.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to an integer, identifier, keyword, operator or punctuation
/// mark. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text, value
///   and source line.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser that consumes tokens strictly
/// left to right, with precedence climbing for expressions.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting the first error with its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
