/// The environment module manages lexical scopes.
///
/// Scopes form a chain of frames, each mapping names to values with a
/// per-frame set of constants. Function calls push child frames whose
/// parent is the function's declaration scope, which is what gives
/// closures their lexical capture.
///
/// # Responsibilities
/// - Declares, assigns, and resolves names through the scope chain.
/// - Enforces the constant and redeclaration rules.
/// - Seeds the global frame with `nada`, `true`, `false`, and `print`.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator is a plain recursive traversal: it walks the AST,
/// evaluates expressions and statements under the current scope, and
/// produces runtime values. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages control flow, function calls, and the `return` unwind marker.
/// - Reports runtime errors such as unresolved names or arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens, each
/// carrying its kind, its lexeme, and its source position. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles numeric and string literals, identifiers, and keywords.
/// - Marks malformed input as `Illegal` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of statements
/// and expressions, using recursive descent with one token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with source positions.
/// - Implements the operator precedence hierarchy.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a program can produce, along with the
/// canonical display forms, the truthiness coercion, and structural deep
/// equality.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements display, truthiness, and deep equality.
/// - Defines the native-function callback signature.
pub mod value;
