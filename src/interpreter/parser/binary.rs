use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            primary::parse_call_member,
            utils::current_kind,
        },
    },
};

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = c` parses as `a = (b = c)`.
/// The left side is whatever expression was parsed before the `=`; whether
/// it is a valid assignment target is checked at evaluation time.
///
/// Grammar: `assignment := logical ("=" assignment)?`
///
/// # Errors
/// Propagates errors from either side of the `=`.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_logical(tokens)?;

    if current_kind(tokens) == TokenKind::Equals {
        tokens.next();
        let value = parse_assignment(tokens)?;

        return Ok(Expr::Assignment { target: Box::new(target),
                                     value:  Box::new(value), });
    }

    Ok(target)
}

/// Parses logical conjunction and disjunction.
///
/// Handles left-associative chains of `and`/`&&` and `or`/`||`. Both
/// operands are always evaluated at runtime; the language has no
/// short-circuiting.
///
/// Grammar: `logical := equality (("and" | "or") equality)*`
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_equality(tokens)?;

    loop {
        let operator = match current_kind(tokens) {
            TokenKind::And => LogicalOperator::And,
            TokenKind::Or => LogicalOperator::Or,
            _ => break,
        };
        tokens.next();

        let right = parse_equality(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               right: Box::new(right),
                               operator };
    }

    Ok(left)
}

/// Parses equality comparisons.
///
/// Handles left-associative chains of `==` and `!=`. Equality nodes share
/// the [`Expr::Logical`] shape with the logical operators.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_relational(tokens)?;

    loop {
        let operator = match current_kind(tokens) {
            TokenKind::De => LogicalOperator::Equal,
            TokenKind::Ne => LogicalOperator::NotEqual,
            _ => break,
        };
        tokens.next();

        let right = parse_relational(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               right: Box::new(right),
                               operator };
    }

    Ok(left)
}

/// Parses relational comparisons.
///
/// Handles left-associative chains of `<`, `<=`, `>`, and `>=`, emitting
/// the shared [`Expr::Logical`] node.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_additive(tokens)?;

    loop {
        let operator = match current_kind(tokens) {
            TokenKind::Lt => LogicalOperator::Less,
            TokenKind::Lte => LogicalOperator::LessEqual,
            TokenKind::Gt => LogicalOperator::Greater,
            TokenKind::Gte => LogicalOperator::GreaterEqual,
            _ => break,
        };
        tokens.next();

        let right = parse_additive(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               right: Box::new(right),
                               operator };
    }

    Ok(left)
}

/// Parses addition and subtraction.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;

    loop {
        let operator = match current_kind(tokens) {
            TokenKind::Add => BinaryOperator::Add,
            TokenKind::Sub => BinaryOperator::Sub,
            _ => break,
        };
        tokens.next();

        let right = parse_multiplicative(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              right: Box::new(right),
                              operator };
    }

    Ok(left)
}

/// Parses multiplication, division, and remainder.
///
/// Grammar: `multiplicative := call_member (("*" | "/" | "%") call_member)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_call_member(tokens)?;

    loop {
        let operator = match current_kind(tokens) {
            TokenKind::Mul => BinaryOperator::Mul,
            TokenKind::Div => BinaryOperator::Div,
            TokenKind::Mod => BinaryOperator::Mod,
            _ => break,
        };
        tokens.next();

        let right = parse_call_member(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              right: Box::new(right),
                              operator };
    }

    Ok(left)
}
