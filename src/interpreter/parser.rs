/// Precedence-climbing levels for binary operators.
///
/// Covers assignment, the logical/equality/relational family, and the
/// additive and multiplicative arithmetic levels.
pub mod binary;

/// Parser entry points and the shared result type.
///
/// Contains the program-level loop and the expression entry point that the
/// other modules recurse through.
pub mod core;

/// Primary expressions and postfix operators.
///
/// Parses literals, identifiers, parenthesized expressions, object
/// literals, unary `not`, and the member/call postfix chain.
pub mod primary;

/// Statement parsing.
///
/// Dispatches on the leading keyword and parses declarations, control
/// flow, `return`, and braced statement blocks.
pub mod statement;

/// Small shared helpers for token-stream handling.
pub mod utils;
