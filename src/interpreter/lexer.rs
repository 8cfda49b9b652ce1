use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// This enum is the closed set of token kinds recognized by the language.
/// Keywords are matched as fixed tokens, which take priority over the
/// identifier pattern for a run of the same length, so `if` is a keyword while
/// `iffy` stays an identifier.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `->`
    #[token("->")]
    Arrow,
    /// `.`
    #[token(".")]
    Dot,
    /// `..`
    #[token("..")]
    DotDot,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `to`
    #[token("to")]
    To,
    /// `function`
    #[token("function")]
    Function,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `var`
    #[token("var")]
    Var,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; skipped, but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Marks the end of the token stream. Never produced by the scanner
    /// itself; [`tokenize`] appends it once the source is exhausted.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Integer => "integer",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Equal => "'='",
            Self::EqualEqual => "'=='",
            Self::NotEqual => "'!='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Arrow => "'->'",
            Self::Dot => "'.'",
            Self::DotDot => "'..'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::For => "'for'",
            Self::To => "'to'",
            Self::Function => "'function'",
            Self::Print => "'print'",
            Self::Return => "'return'",
            Self::Var => "'var'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{description}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The literal payload of a token, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// The decimal value of an integer literal.
    Integer(i64),
    /// The name carried by an identifier.
    Name(String),
}

/// A token produced by [`tokenize`].
///
/// Tokens are immutable once created. `text` is the exact source slice the
/// token was scanned from (empty for [`TokenKind::EndOfInput`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:  TokenKind,
    /// The matched source text.
    pub text:  String,
    /// The literal value for integers and identifiers.
    pub value: Option<TokenValue>,
    /// The 1-based source line the token starts on.
    pub line:  usize,
}

impl Token {
    /// Builds a token from a scanned slice, decoding its literal value.
    ///
    /// # Errors
    /// Returns [`LexError::IntegerTooLarge`] if an integer literal does not
    /// fit into an `i64`.
    fn scanned(kind: TokenKind, text: &str, line: usize) -> Result<Self, LexError> {
        let value = match kind {
            TokenKind::Integer => {
                let n = text.parse()
                            .map_err(|_| LexError::IntegerTooLarge { text: text.to_string(),
                                                                     line })?;
                Some(TokenValue::Integer(n))
            },
            TokenKind::Identifier => Some(TokenValue::Name(text.to_string())),
            _ => None,
        };

        Ok(Self { kind,
                  text: text.to_string(),
                  value,
                  line })
    }

    /// The [`TokenKind::EndOfInput`] marker for a source whose last line is
    /// `line`.
    #[must_use]
    pub const fn end_of_input(line: usize) -> Self {
        Self { kind:  TokenKind::EndOfInput,
               text:  String::new(),
               value: None,
               line }
    }

    /// Returns the integer value if this is an integer literal.
    #[must_use]
    pub const fn integer(&self) -> Option<i64> {
        match self.value {
            Some(TokenValue::Integer(n)) => Some(n),
            _ => None,
        }
    }

    /// Returns the name if this is an identifier.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Name(name)) => Some(name),
            _ => None,
        }
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// The scan is a single forward pass. Whitespace and `//` comments separate
/// tokens and are otherwise discarded. Two-character operators (`==`, `!=`,
/// `<=`, `>=`, `->`, `..`) win over their one-character prefixes. The
/// returned sequence always ends with exactly one [`TokenKind::EndOfInput`]
/// token.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for any character outside the
///   recognized operator and punctuation set.
/// - [`LexError::IntegerTooLarge`] for an integer literal that overflows
///   `i64`.
///
/// # Example
/// ```
/// use gravity::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = 12;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Integer,
///             TokenKind::Semicolon,
///             TokenKind::EndOfInput]);
/// assert_eq!(tokens[2].integer(), Some(12));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let line = lexer.extras.line;
        let text = lexer.slice();

        let Ok(kind) = kind else {
            let character = text.chars().next().unwrap_or_default();
            return Err(LexError::InvalidCharacter { character, line });
        };

        tokens.push(Token::scanned(kind, text, line)?);
    }

    tokens.push(Token::end_of_input(lexer.extras.line));

    Ok(tokens)
}
