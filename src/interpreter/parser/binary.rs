use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence layer.
///
/// `operand` parses the next-tighter layer, and `accepts` selects which
/// operators belong to this layer. Each matched operator folds the
/// expression so far into the left side of a new `Node::BinaryOp`.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           operand: fn(&mut Peekable<I>) -> ParseResult<Node>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && accepts(op)
        {
            let line = token.line;
            tokens.next();
            let right = operand(tokens)?;
            left = Node::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR, the loosest binary operator.
///
/// Grammar: `logic_or := logic_and ("or" logic_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses logical AND.
///
/// Grammar: `logic_and := comparison ("and" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_comparison, |op| op == BinaryOperator::And)
}

/// Parses a comparison.
///
/// At most one comparison operator is accepted, so `a < b < c` is rejected
/// at the second `<` by whichever rule follows.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | ">" | "<=" | ">=")
/// additive)?`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_additive(tokens)?;

    if let Some(token) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token.kind)
       && is_comparison_op(op)
    {
        let line = token.line;
        tokens.next(); // consume operator

        let right = parse_additive(tokens)?;
        return Ok(Node::BinaryOp { op,
                                   left: Box::new(left),
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division, which bind tighter than `+` and `-`.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use gravity::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}
