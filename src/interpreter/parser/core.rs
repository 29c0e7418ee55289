use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_assignment, statement::parse_statement, utils::current_kind},
    },
};

/// Result type used by all parsing functions.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token list into a [`Program`].
///
/// Convenience wrapper over [`parse_program`] for callers holding a plain
/// token slice, as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Errors
/// Returns the first [`ParseError`] encountered; parsing does not recover.
///
/// # Example
/// ```
/// use a0::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let program = parse(&tokenize("val x = 1 + 2")).unwrap();
///
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    parse_program(&mut tokens.iter().peekable())
}

/// Parses statements until the `Eof` token and returns the program root.
///
/// An empty source (only `Eof`) yields a program with an empty body.
///
/// # Errors
/// Propagates any statement-level [`ParseError`] unchanged.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut body = Vec::new();

    while current_kind(tokens) != TokenKind::Eof {
        body.push(parse_statement(tokens)?);
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Errors
/// Propagates any [`ParseError`] from the precedence levels.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens)
}
