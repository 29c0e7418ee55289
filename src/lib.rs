//! # a0
//!
//! a0 is a small, dynamically-typed scripting language implemented as a
//! tree-walking interpreter. Source text flows through three stages:
//! lexical analysis, recursive-descent parsing into an abstract syntax
//! tree, and recursive evaluation over a chain of lexical scopes. The last
//! statement's value is the program's result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment,
    evaluator::core::evaluate_program,
    lexer::tokenize,
    parser::core::parse,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Stmt`, and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression nodes for all language constructs.
/// - Defines the operator enums shared by the parser and evaluator.
pub mod ast;
/// Renders the AST as an indented debug tree.
///
/// Backs the binary's `--ast` flag. The rendering is human-facing and not
/// a stable machine interface.
pub mod ast_printer;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors carry the source position of the
/// offending token; runtime errors carry a message only.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failure modes.
/// - Renders the single-line diagnostics shown to the user.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scoping, and the
/// runtime value model to provide a complete interpreter for a0 programs.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Runs a complete source string and returns its final value.
///
/// The source is tokenized and parsed, then evaluated under a fresh global
/// environment. The result is the last statement's value, or `Nada` for an
/// empty program.
///
/// # Errors
/// Returns the first parse or runtime error encountered; parse errors
/// carry the source position of the offending token.
///
/// # Examples
/// ```
/// use a0::{interpret, interpreter::value::Value};
///
/// let value = interpret("val x = 2 + 2  x * 10").unwrap();
/// assert!(value.deep_equals(&Value::Number(40.0)));
///
/// // An unknown variable is a runtime error.
/// let result = interpret("val y = x + 1");
/// assert!(result.is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source);
    let program = parse(&tokens)?;

    let env = Environment::global();
    let value = evaluate_program(&program, &env)?;

    Ok(value)
}
