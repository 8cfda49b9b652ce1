use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token was required but another one was found.
    ExpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source text of the token found.
        text:     String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found a token that cannot start the construct being parsed.
    UnexpectedToken {
        /// The token kind found.
        found: TokenKind,
        /// The source text of the token found.
        text:  String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  found: TokenKind::EndOfInput,
                                  line,
                                  .. } => {
                write!(f, "Error on line {line}: Expected {expected}, found end of input.")
            },
            Self::ExpectedToken { expected,
                                  text,
                                  line,
                                  .. } => {
                write!(f, "Error on line {line}: Expected {expected}, found '{text}'.")
            },
            Self::UnexpectedToken { text, line, .. } => {
                write!(f, "Error on line {line}: Unexpected token '{text}'.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
