/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a line.
/// Parse errors include unrecognized characters, missing parentheses and
/// malformed declarations, as well as misuse of the token stream itself.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while computing values: references to
/// undeclared variables and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Classifies a [`CalcError`] without looking at its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character.
    Syntax,
    /// No valid start of a primary.
    ExpectedPrimary,
    /// An unclosed `(`.
    MissingRParen,
    /// A name that was never declared.
    UndefinedVariable,
    /// `/` or `%` by exactly zero.
    DivisionByZero,
    /// `let` without a name.
    ExpectedName,
    /// `let name` without `=`.
    MissingEquals,
    /// Too many nested parentheses.
    NestingTooDeep,
    /// A parser bug.
    InternalInconsistency,
}

/// Any failure of a single calculation.
///
/// Both phases are interleaved while a line is evaluated, so every grammar
/// function returns this type and lets `?` lift the phase-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The line could not be lexed or parsed.
    Parse(ParseError),
    /// A value could not be computed.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnexpectedToken { .. }) => ErrorKind::Syntax,
            Self::Parse(ParseError::ExpectedPrimary { .. }) => ErrorKind::ExpectedPrimary,
            Self::Parse(ParseError::MissingRParen { .. }) => ErrorKind::MissingRParen,
            Self::Parse(ParseError::ExpectedName { .. }) => ErrorKind::ExpectedName,
            Self::Parse(ParseError::MissingEquals { .. }) => ErrorKind::MissingEquals,
            Self::Parse(ParseError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Self::Parse(ParseError::InternalInconsistency { .. }) => {
                ErrorKind::InternalInconsistency
            },
            Self::Runtime(RuntimeError::UndefinedVariable { .. }) => ErrorKind::UndefinedVariable,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
