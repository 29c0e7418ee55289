use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            primary::parse_arguments,
            utils::{advance, current_kind, current_pos, expect},
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is keyed on the leading token: declarations, control flow, and
/// `return` each have a keyword; everything else is an expression
/// statement.
///
/// # Errors
/// Propagates the first [`ParseError`] from the chosen production.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    match current_kind(tokens) {
        TokenKind::Var | TokenKind::Const => parse_var_declaration(tokens),
        TokenKind::Fun => parse_function_declaration(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::While => parse_while(tokens),
        TokenKind::For => parse_for(tokens),
        TokenKind::Return => parse_return(tokens),
        _ => Ok(Stmt::Expr(parse_expression(tokens)?)),
    }
}

/// Parses a variable declaration.
///
/// Grammar: `(var | const) IDENT ("=" expression)?`
///
/// A `var` without initializer declares the name as `nada`; a `const`
/// without initializer is the "Uninitialized constant" parse error.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let constant = advance(tokens)?.kind == TokenKind::Const;

    let name = expect(tokens,
                      TokenKind::Ident,
                      "Expected identifier name after var | const keyword")?.value
                                                                            .clone();

    if current_kind(tokens) != TokenKind::Equals {
        if constant {
            return Err(ParseError::UninitializedConstant { pos: current_pos(tokens) });
        }
        return Ok(Stmt::VarDeclaration { constant,
                                         name,
                                         value: None, });
    }

    tokens.next(); // the '='
    let value = parse_expression(tokens)?;

    Ok(Stmt::VarDeclaration { constant,
                              name,
                              value: Some(value), })
}

/// Parses a function declaration.
///
/// Grammar: `FUN IDENT "(" params ")" "{" statement* "}"`
///
/// The parameter list is parsed with the ordinary argument-list rule and
/// then each entry is required to be a plain identifier.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the fun keyword

    let name = expect(tokens,
                      TokenKind::Ident,
                      "Expected function name after keyword \"fun\"")?;
    let name_pos = name.pos;
    let name = name.value.clone();

    let args = parse_arguments(tokens)?;
    let mut parameters = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Expr::Identifier(symbol) => parameters.push(symbol),
            _ => return Err(ParseError::InvalidParameter { pos: name_pos }),
        }
    }

    let body = parse_block(tokens, "Expected \"{\"", "Expected \"}\"")?;

    Ok(Stmt::FunctionDeclaration { name,
                                   parameters,
                                   body })
}

/// Parses an `if` statement: `if "(" expression ")" "{" statement* "}"`.
/// The language has no `else` branch.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the if keyword

    expect(tokens, TokenKind::OpenParen, "Expected '(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::CloseParen, "Expected ')' after if condition")?;

    let body = parse_block(tokens,
                           "Expected '{' to begin if statement body",
                           "Expected '}' to close if statement body")?;

    Ok(Stmt::If { condition, body })
}

/// Parses a `while` statement: `while "(" expression ")" "{" statement* "}"`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the while keyword

    expect(tokens, TokenKind::OpenParen, "Expected '(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens,
           TokenKind::CloseParen,
           "Expected ')' after while condition")?;

    let body = parse_block(tokens,
                           "Expected '{' to begin while loop body",
                           "Expected '}' to close while loop body")?;

    Ok(Stmt::While { condition, body })
}

/// Parses a counted `for` statement: `for "(" expression ")" "{" … "}"`.
///
/// The parenthesized expression is an iteration count, not an
/// init/condition/update header.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the for keyword

    expect(tokens, TokenKind::OpenParen, "Expected '(' after 'for'")?;
    let count = parse_expression(tokens)?;
    expect(tokens, TokenKind::CloseParen, "Expected ')' after for count")?;

    let body = parse_block(tokens,
                           "Expected '{' to begin for loop body",
                           "Expected '}' to close for loop body")?;

    Ok(Stmt::For { count, body })
}

/// Parses a `return` statement.
///
/// The value is omitted when the next token closes the enclosing block
/// (`}`) or ends the input.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the return keyword

    if matches!(current_kind(tokens),
                TokenKind::CloseCurly | TokenKind::Eof)
    {
        return Ok(Stmt::Return { value: None });
    }

    let value = parse_expression(tokens)?;
    Ok(Stmt::Return { value: Some(value) })
}

/// Parses a braced statement block, with per-construct error wording for
/// the two delimiters.
fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                      open_message: &str,
                      close_message: &str)
                      -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::OpenCurly, open_message)?;

    let mut body = Vec::new();
    while !matches!(current_kind(tokens),
                    TokenKind::CloseCurly | TokenKind::Eof)
    {
        body.push(parse_statement(tokens)?);
    }

    expect(tokens, TokenKind::CloseCurly, close_message)?;

    Ok(body)
}
