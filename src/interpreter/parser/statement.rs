use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            block::{parse_block, parse_body},
            core::{ParseResult, parse_expression},
            utils::{
                expect, parse_comma_separated, parse_identifier, peek_second, unexpected_kind,
                unexpected_token,
            },
        },
    },
};

/// Parses a single statement.
///
/// The leading token selects the construct:
/// - `if`, `while`, `for`, `function`, `print`, `return` start their
///   respective statements.
/// - `var` introduces an assignment.
/// - an identifier directly followed by `=` is an assignment.
/// - anything else is an expression statement terminated by `;`.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` when no statement can start, and
/// propagates errors from the selected construct.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    match token.kind {
        TokenKind::If => parse_if(tokens),
        TokenKind::While => parse_while(tokens),
        TokenKind::For => parse_for(tokens),
        TokenKind::Function => parse_function_declaration(tokens),
        TokenKind::Print => parse_print(tokens),
        TokenKind::Return => parse_return(tokens),
        TokenKind::Var => {
            tokens.next();
            parse_assignment(tokens)
        },
        TokenKind::Identifier if peek_second(tokens) == Some(TokenKind::Equal) => {
            parse_assignment(tokens)
        },
        TokenKind::EndOfInput => Err(unexpected_token(token)),
        _ => {
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::Semicolon)?;
            Ok(expr)
        },
    }
}

/// Parses `<identifier> = <expression> ;`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.peek().map_or(0, |token| token.line);
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equal)?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Node::Assignment { name,
                          value: Box::new(value),
                          line })
}

/// Parses `print <expression> ;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Print)?.line;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Node::PrintStatement { expr: Box::new(expr),
                              line })
}

/// Parses `return <expression> ;`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Return)?.line;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Node::ReturnStatement { value: Box::new(value),
                               line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition>: <statement>
///     if <condition> { <statements> } else { <statements> }
///     if <condition>: <statement> else: if <condition>: <statement>
/// ```
/// An `else if` chain is just an `else` whose body is another `if`.
///
/// # Errors
/// - `ExpectedToken` if neither `:` nor `{` follows the condition or `else`.
/// - Propagates any errors from the condition and the branches.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::If)?.line;
    let condition = parse_expression(tokens)?;
    let then_branch = parse_body(tokens)?;

    let else_branch = match tokens.peek() {
        Some(Token { kind: TokenKind::Else, .. }) => {
            tokens.next();
            Some(parse_body(tokens)?)
        },
        _ => None,
    };

    Ok(Node::IfStatement { condition: Box::new(condition),
                           then_branch,
                           else_branch,
                           line })
}

/// Parses `while <condition> <body>`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::While)?.line;
    let condition = parse_expression(tokens)?;
    let body = parse_body(tokens)?;

    Ok(Node::WhileStatement { condition: Box::new(condition),
                              body,
                              line })
}

/// Parses a counting `for` loop.
///
/// Both bounds are arithmetic expressions; the range separator is either
/// `..` or the keyword `to`, and both mean an inclusive range.
///
/// Syntax:
/// ```text
///     for <identifier> = <expr> .. <expr> <body>
///     for <identifier> = <expr> to <expr> <body>
/// ```
///
/// # Errors
/// `ExpectedToken` if `=` or the range separator is missing.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::For)?.line;
    let var = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equal)?;
    let start = parse_additive(tokens)?;

    match tokens.next() {
        Some(Token { kind: TokenKind::DotDot | TokenKind::To,
                     .. }) => {},
        Some(token) => return Err(unexpected_kind(token, TokenKind::DotDot)),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let end = parse_additive(tokens)?;
    let body = parse_body(tokens)?;

    Ok(Node::ForStatement { var,
                            start: Box::new(start),
                            end: Box::new(end),
                            body,
                            line })
}

/// Parses a function declaration.
///
/// The body is either a block, or a single expression terminated by `;`
/// which becomes the function's return value.
///
/// Syntax:
/// ```text
///     function <name>(<param>, ...) -> <expression>;
///     function <name>(<param>, ...) -> { <statements> }
/// ```
///
/// # Errors
/// `ExpectedToken` if the name, the parameter list or `->` is malformed.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Function)?.line;
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;
    expect(tokens, TokenKind::Arrow)?;

    let body = if let Some(Token { kind: TokenKind::LBrace, .. }) = tokens.peek() {
        parse_block(tokens)?
    } else {
        let value_line = tokens.peek().map_or(line, |token| token.line);
        let value = parse_expression(tokens)?;
        expect(tokens, TokenKind::Semicolon)?;
        vec![Node::ReturnStatement { value: Box::new(value),
                                     line:  value_line, }]
    };

    Ok(Node::FunctionDeclaration(Rc::new(FunctionDef { name,
                                                       params,
                                                       body,
                                                       line })))
}
