#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal too large to be represented as an `i64`.
    IntegerTooLarge {
        /// The literal as written.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, line } => {
                write!(f, "Error on line {line}: Invalid character '{character}'.")
            },
            Self::IntegerTooLarge { text, line } => {
                write!(f, "Error on line {line}: Integer literal {text} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
