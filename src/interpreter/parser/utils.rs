use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, which must be of kind `expected`.
///
/// # Errors
/// - `ExpectedToken` if the next token has a different kind.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(unexpected_kind(token, expected)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Builds the `ExpectedToken` error for `token`.
pub(in crate::interpreter::parser) fn unexpected_kind(token: &Token,
                                                      expected: TokenKind)
                                                      -> ParseError {
    ParseError::ExpectedToken { expected,
                                found: token.kind,
                                text: token.text.clone(),
                                line: token.line }
}

/// Builds the error for a token that cannot start the construct being parsed.
pub(in crate::interpreter::parser) fn unexpected_token(token: &Token) -> ParseError {
    if token.kind == TokenKind::EndOfInput {
        return ParseError::UnexpectedEndOfInput { line: token.line };
    }
    ParseError::UnexpectedToken { found: token.kind,
                                  text:  token.text.clone(),
                                  line:  token.line, }
}

/// Returns the kind of the token after the next one, without consuming
/// anything.
pub(in crate::interpreter::parser) fn peek_second<'a, I>(tokens: &Peekable<I>) -> Option<TokenKind>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    lookahead.peek().map(|token| token.kind)
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call arguments. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. An
/// immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, or if anything other
/// than `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if let Some(token) = tokens.peek()
       && token.kind == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma, .. }) => {},
            Some(token) if token.kind == closing => break,
            Some(token) => return Err(unexpected_kind(token, closing)),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `ExpectedToken` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Identifier)?;
    token.name()
         .map(str::to_string)
         .ok_or_else(|| unexpected_kind(token, TokenKind::Identifier))
}
