/// The lexer module tokenizes a line for the parser.
///
/// The lexer reads the raw text of one line and produces tokens for numbers,
/// names, the `let` keyword and the arithmetic symbols. It offers a single
/// token of lookahead through push-back.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Reports unrecognized characters as syntax errors.
/// - Enforces that at most one token is pushed back at a time.
pub mod lexer;
/// The parser module evaluates tokens as it recognizes them.
///
/// Each grammar level is a function that consumes its own tokens and returns
/// the value they denote. There is no intermediate tree.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Looks up and declares variables.
/// - Reports malformed input with its column.
pub mod parser;
/// Sessions tie lines of input to one set of variables.
pub mod session;
/// The variable table shared by all lines of a session.
pub mod variables;
