use std::iter::Peekable;

use crate::{
    ast::{Expr, Property, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{advance, current_kind, current_pos, expect},
        },
    },
};

/// Parses a primary expression followed by its postfix chain.
///
/// After the primary, the parser repeatedly consumes `.name` member
/// accesses, `[key]` computed accesses, and `(args…)` calls, in any order,
/// so `table["row"].handler(1)(2)` parses as expected.
///
/// # Errors
/// Propagates primary and argument errors;
/// [`ParseError::InvalidMemberProperty`] if `.` is not followed by an
/// identifier.
pub fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut expr = parse_primary(tokens)?;

    loop {
        match current_kind(tokens) {
            TokenKind::Dot => {
                tokens.next();

                if current_kind(tokens) != TokenKind::Ident {
                    return Err(ParseError::InvalidMemberProperty { pos: current_pos(tokens) });
                }
                let property = Expr::Identifier(advance(tokens)?.value.clone());

                expr = Expr::Member { object:   Box::new(expr),
                                      property: Box::new(property),
                                      computed: false, };
            },
            TokenKind::OpenBracket => {
                tokens.next();
                let property = parse_expression(tokens)?;
                expect(tokens, TokenKind::CloseBracket, "Expected \"]\"")?;

                expr = Expr::Member { object:   Box::new(expr),
                                      property: Box::new(property),
                                      computed: true, };
            },
            TokenKind::OpenParen => {
                let args = parse_arguments(tokens)?;
                expr = Expr::Call { callee: Box::new(expr),
                                    args };
            },
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses a parenthesized, comma-separated argument list.
///
/// An immediately encountered `)` produces an empty list. Also reused by
/// function declarations, whose parameter lists share this surface syntax.
///
/// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
///
/// # Errors
/// Returns a [`ParseError`] if either parenthesis is missing or an
/// argument fails to parse.
pub fn parse_arguments<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token>
{
    let mut args = Vec::new();

    expect(tokens, TokenKind::OpenParen, "Expected \"(\"")?;

    if current_kind(tokens) == TokenKind::CloseParen {
        tokens.next();
        return Ok(args);
    }

    loop {
        args.push(parse_expression(tokens)?);

        if current_kind(tokens) != TokenKind::Comma {
            break;
        }
        tokens.next();
    }

    expect(tokens, TokenKind::CloseParen, "Expected \")\"")?;

    Ok(args)
}

/// Parses a primary expression.
///
/// Primaries are identifiers, numeric and string literals, parenthesized
/// expressions, and object literals. Unary `not` binds here, recursing
/// back into this level, so `not x.y` negates `x` before the member
/// access.
///
/// # Errors
/// - [`ParseError::MissingExpression`] when the next token cannot begin an
///   expression.
/// - [`ParseError::IllegalToken`] when the lexer marked the token illegal.
/// - [`ParseError::UnexpectedToken`] for every other stray token.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match current_kind(tokens) {
        TokenKind::Not => {
            tokens.next();
            let operand = parse_primary(tokens)?;

            Ok(Expr::Unary { operand:  Box::new(operand),
                             operator: UnaryOperator::Not, })
        },
        TokenKind::Ident => Ok(Expr::Identifier(advance(tokens)?.value.clone())),
        TokenKind::Int | TokenKind::Float => {
            // The lexeme is digits with at most one dot, so this parse
            // cannot fail.
            let token = advance(tokens)?;
            Ok(Expr::NumericLiteral(token.value.parse().unwrap_or_default()))
        },
        TokenKind::Str => Ok(Expr::StringLiteral(advance(tokens)?.value.clone())),
        TokenKind::OpenParen => {
            tokens.next();
            let value = parse_expression(tokens)?;
            expect(tokens, TokenKind::CloseParen, "Expected closing parenthesis")?;

            Ok(value)
        },
        TokenKind::OpenCurly => parse_object_literal(tokens),
        TokenKind::Eof | TokenKind::CloseParen | TokenKind::CloseCurly | TokenKind::Comma => {
            Err(ParseError::MissingExpression { pos: current_pos(tokens) })
        },
        TokenKind::Illegal => {
            let token = advance(tokens)?;
            Err(ParseError::IllegalToken { value: token.value.clone(),
                                           pos:   token.pos, })
        },
        kind => {
            Err(ParseError::UnexpectedToken { message: format!("Unrecognized token in expression position: {kind:?}"),
                                              pos:     current_pos(tokens), })
        },
    }
}

/// Parses an object literal.
///
/// Properties are `key: value` pairs or bare shorthand keys; entries are
/// comma-separated and a missing comma between properties is an error.
/// Nested literals parse through the value expression recursion.
///
/// Grammar: `object := "{" (property ("," property)*)? "}"` where
/// `property := IDENT (":" expression)?`
///
/// # Errors
/// Returns a [`ParseError`] on a non-identifier key, a missing colon or
/// comma, or an unclosed brace.
fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the open brace
    let mut properties = Vec::new();

    while !matches!(current_kind(tokens), TokenKind::CloseCurly | TokenKind::Eof) {
        let key = expect(tokens, TokenKind::Ident, "Object missing identifier")?.value
                                                                               .clone();

        // Shorthand properties: { foo }
        if matches!(current_kind(tokens), TokenKind::Comma | TokenKind::CloseCurly) {
            properties.push(Property { key, value: None });
            if current_kind(tokens) == TokenKind::Comma {
                tokens.next();
            }
            continue;
        }

        expect(tokens, TokenKind::Colon, "Missing colon after identifier")?;

        let value = parse_expression(tokens)?;
        properties.push(Property { key,
                                   value: Some(value) });

        if current_kind(tokens) != TokenKind::CloseCurly {
            expect(tokens,
                   TokenKind::Comma,
                   "Expected comma or closing brace after property")?;
        }
    }

    expect(tokens,
           TokenKind::CloseCurly,
           "Object literal missing closing brace")?;

    Ok(Expr::ObjectLiteral(properties))
}
