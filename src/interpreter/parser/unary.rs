use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, peek_second, unexpected_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix `+` and `-`. Unary operators are right-associative, so
/// `--x` is parsed as `-(-x)`. If no unary operator is present, the function
/// delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match tokens.peek() {
        Some(Token { kind: TokenKind::Plus, .. }) => UnaryOperator::Plus,
        Some(Token { kind: TokenKind::Minus, .. }) => UnaryOperator::Negate,
        _ => return parse_primary(tokens),
    };
    let line = tokens.next().map_or(0, |token| token.line);
    let operand = parse_unary(tokens)?;

    Ok(Node::UnaryOp { op,
                       operand: Box::new(operand),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include
/// integer and boolean literals, variable references, function calls and
/// parenthesized expressions.
///
/// An identifier is a function call exactly when the token after it is `(`;
/// this is the only place the parser looks two tokens ahead.
///
/// Grammar (simplified):
/// ```text
///     primary := INTEGER | "true" | "false"
///              | IDENTIFIER
///              | IDENTIFIER "(" arguments ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// `UnexpectedToken` for anything that cannot start an expression, and
/// `UnexpectedEndOfInput` when the input stops where an operand is required.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let is_call = peek_second(tokens) == Some(TokenKind::LParen);
    let token = expect_some(tokens)?;
    let line = token.line;

    match token.kind {
        TokenKind::Integer => {
            let value = token.integer().ok_or_else(|| unexpected_token(token))?;
            Ok(Node::IntegerLiteral { value, line })
        },
        TokenKind::True => Ok(Node::BooleanLiteral { value: true,
                                                     line }),
        TokenKind::False => Ok(Node::BooleanLiteral { value: false,
                                                      line }),
        TokenKind::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(expr)
        },
        TokenKind::Identifier => {
            let name = token.name()
                            .ok_or_else(|| unexpected_token(token))?
                            .to_string();
            if is_call {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;
                Ok(Node::FunctionCall { name,
                                        arguments,
                                        line })
            } else {
                Ok(Node::VariableRef { name, line })
            }
        },
        _ => Err(unexpected_token(token)),
    }
}

fn expect_some<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next()
          .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })
}
