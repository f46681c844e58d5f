use std::{fs, io, path::Path};

use crate::{
    error::CalcError,
    interpreter::{
        lexer::TokenStream,
        parser::statement::parse_calculation,
        variables::VariableTable,
    },
};

/// The outcome of evaluating one line of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// The 1-based line number within the script.
    pub line_number: usize,
    /// The line as it appeared in the script.
    pub input:       String,
    /// The value of the line, or why it failed.
    pub result:      Result<f64, CalcError>,
}

/// Holds the interpreter state shared by consecutive lines.
///
/// Every line is read by a fresh token stream, but all lines of a session see
/// the same variables. A failing line keeps any declarations that completed
/// before the failure and never discards earlier ones.
#[derive(Debug, Default)]
pub struct Session {
    variables: VariableTable,
}

impl Session {
    /// Creates a session with no variables.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: VariableTable::new() }
    }

    /// Evaluates every statement on `line` and returns the value of the last
    /// one.
    ///
    /// # Errors
    /// Returns the first error encountered. The rest of the line is abandoned.
    pub fn evaluate(&mut self, line: &str) -> Result<f64, CalcError> {
        let mut tokens = TokenStream::new(line);
        parse_calculation(&mut tokens, &mut self.variables)
    }

    /// Evaluates `source` one line at a time.
    ///
    /// Blank lines are skipped. A failing line does not stop the lines after
    /// it.
    pub fn run_script(&mut self, source: &str) -> Vec<LineOutcome> {
        source.lines()
              .enumerate()
              .filter(|(_, line)| !line.trim().is_empty())
              .map(|(i, line)| LineOutcome { line_number: i + 1,
                                             input:       line.to_string(),
                                             result:      self.evaluate(line), })
              .collect()
    }

    /// Reads the file at `path` and evaluates it like
    /// [`run_script`](Self::run_script).
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be read, including when it is
    /// not valid UTF-8.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> io::Result<Vec<LineOutcome>> {
        let source = fs::read_to_string(path)?;
        Ok(self.run_script(&source))
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }
}
