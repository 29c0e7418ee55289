/// Core evaluation dispatch.
///
/// Contains the program entry point and the statement/expression dispatch
/// that routes every AST node to its evaluation rule.
pub mod core;

/// Expression evaluation.
///
/// Handles identifiers, object literals, member access, assignment, and
/// calls of both native and user functions.
pub mod expression;

/// Arithmetic, unary, and logical operator evaluation.
///
/// Implements the numeric binary operators, unary negation and NOT, and
/// the logical/equality/relational family.
pub mod logic;

/// Statement evaluation.
///
/// Evaluates declarations, control flow, loop constructs, and `return`.
pub mod statement;
