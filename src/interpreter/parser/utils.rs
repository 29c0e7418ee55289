use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes and returns the next token.
///
/// The token stream always terminates in `Eof`, so a well-behaved caller
/// never exhausts it; running past the end is still reported as an error
/// rather than a panic.
pub(in crate::interpreter::parser) fn advance<'a, I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next()
          .ok_or_else(|| ParseError::UnexpectedToken { message: "Unexpected end of input".to_string(),
                                                       pos:     Position { line: 0, column: 0 }, })
}

/// Consumes the next token, requiring it to be of `kind`.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] carrying `message` and the
/// offending token's position when the kind does not match.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    message: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = advance(tokens)?;
    if token.kind != kind {
        return Err(ParseError::UnexpectedToken { message: message.to_string(),
                                                 pos:     token.pos, });
    }
    Ok(token)
}

/// The kind of the current token without consuming it. An exhausted stream
/// reads as `Eof`.
pub(in crate::interpreter::parser) fn current_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// The position of the current token without consuming it.
pub(in crate::interpreter::parser) fn current_pos<'a, I>(tokens: &mut Peekable<I>) -> Position
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .map_or(Position { line: 0, column: 0 }, |token| token.pos)
}
