use std::iter::Peekable;

use crate::{
    ast::{Node, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token sequence into a [`Program`].
///
/// Statements are parsed left to right until the `EndOfInput` token. The
/// first error aborts parsing; no partial program is returned.
///
/// A slice that does not end with `EndOfInput` is parsed as if one followed
/// its last token, on that token's line, so running out of tokens reports
/// the line where the input stopped.
///
/// Grammar: `program := statement* EOF`
///
/// # Errors
/// Propagates the first [`ParseError`] raised by any statement.
///
/// # Example
/// ```
/// use gravity::{
///     ast::{BinaryOperator, Node},
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("1 + 2 * 3;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// let Node::BinaryOp { op, right, .. } = &program.statements[0] else {
///     panic!("expected a binary operation");
/// };
/// assert_eq!(*op, BinaryOperator::Add);
/// assert!(matches!(**right, Node::BinaryOp { op: BinaryOperator::Mul, .. }));
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    match tokens.last() {
        Some(Token { kind: TokenKind::EndOfInput,
                     .. }) => parse_terminated(tokens),
        last => {
            let mut terminated = tokens.to_vec();
            terminated.push(Token::end_of_input(last.map_or(1, |token| token.line)));
            parse_terminated(&terminated)
        },
    }
}

fn parse_terminated(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some(token) = iter.peek()
          && token.kind != TokenKind::EndOfInput
    {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := logic_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens)
}
