/// Shared result type and the expression entry point.
///
/// Holds the additive level of the grammar, where parsing of any expression
/// starts.
pub mod core;

/// Multiplicative operators.
///
/// Handles `*`, `/` and `%`, including the division-by-zero check.
pub mod binary;

/// Literals, names, grouping and prefix signs.
pub mod unary;

/// Statement parsing.
///
/// Implements `let` declarations, statement dispatch and the per-line
/// calculation loop.
pub mod statement;
