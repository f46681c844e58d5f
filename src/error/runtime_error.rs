#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Tried to use a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// The right operand of `/` or `%` was exactly zero.
    DivisionByZero {
        /// The column of the operator.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, column } => {
                write!(f, "Error at column {column}: Undefined variable '{name}'.")
            },
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
