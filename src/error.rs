/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an
/// abstract syntax tree. Each parse error carries the source position of
/// the offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved names, arity mismatches, or non-boolean loop conditions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
