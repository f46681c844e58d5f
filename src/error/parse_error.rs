#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that does not start any token.
    UnexpectedToken {
        /// The offending source text.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// A primary expression could not start with the token found.
    ExpectedPrimary {
        /// The token encountered instead.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// An opening parenthesis `(` was never closed.
    MissingRParen {
        /// The column where the error occurred.
        column: usize,
    },
    /// The `let` keyword was not followed by a variable name.
    ExpectedName {
        /// The column where the error occurred.
        column: usize,
    },
    /// A declaration was missing its `=`.
    MissingEquals {
        /// The name being declared.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum number of open groups.
        limit:  usize,
        /// The column of the `(` that exceeded the limit.
        column: usize,
    },
    /// The token stream was driven in a way the grammar never requires.
    /// This is a bug in the parser, not in the input.
    InternalInconsistency {
        /// What went wrong.
        details: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token '{token}'.")
            },

            Self::ExpectedPrimary { token, column } => write!(f,
                                                              "Error at column {column}: Expected a primary but found {token}."),

            Self::MissingRParen { column } => {
                write!(f, "Error at column {column}: Missing a right parenthesis.")
            },

            Self::ExpectedName { column } => write!(f,
                                                    "Error at column {column}: Expected a variable name after 'let' keyword."),

            Self::MissingEquals { name, column } => write!(f,
                                                           "Error at column {column}: Missing '=' in a declaration of '{name}'."),

            Self::NestingTooDeep { limit, column } => write!(f,
                                                             "Error at column {column}: Parentheses nested deeper than {limit} levels."),

            Self::InternalInconsistency { details } => write!(f, "Internal error: {details}."),
        }
    }
}

impl std::error::Error for ParseError {}
