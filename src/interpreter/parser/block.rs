use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, unexpected_kind},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// closing `}` token; reaching the end of input first is an error.
///
/// Grammar: `block := "{" statement* "}"`
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some(token) if token.kind == TokenKind::RBrace => {
                tokens.next();
                break;
            },
            Some(token) if token.kind == TokenKind::EndOfInput => {
                return Err(unexpected_kind(token, TokenKind::RBrace));
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}

/// Parses the body of `if`, `else`, `while` and `for`.
///
/// A body is either a block, or a `:` followed by a block or a single
/// statement.
///
/// Grammar: `body := block | ":" (block | statement)`
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::LBrace, .. }) => parse_block(tokens),
        Some(Token { kind: TokenKind::Colon, .. }) => {
            tokens.next();
            if let Some(Token { kind: TokenKind::LBrace, .. }) = tokens.peek() {
                parse_block(tokens)
            } else {
                Ok(vec![parse_statement(tokens)?])
            }
        },
        Some(token) => Err(unexpected_kind(token, TokenKind::Colon)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
