use crate::error::RuntimeError;

/// A named floating-point value declared with `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The variable name. Names are case-sensitive.
    pub name:  String,
    /// The current value.
    pub value: f64,
}

/// Stores every variable declared during a session.
///
/// Names are unique: redeclaring a name overwrites its value in place, so the
/// table keeps the order in which names were first declared.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    variables: Vec<Variable>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.value)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Parameters
    /// - `name`: The variable to look up.
    /// - `column`: Where the name appeared, for error reporting.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if `name` was never
    /// declared.
    pub fn get(&self, name: &str, column: usize) -> Result<f64, RuntimeError> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             column })
    }

    /// Binds `name` to `value`, overwriting any previous binding, and returns
    /// `value`.
    pub fn define(&mut self, name: &str, value: f64) -> f64 {
        if let Some(var) = self.variables.iter_mut().find(|var| var.name == name) {
            var.value = value;
        } else {
            self.variables.push(Variable { name: name.to_string(),
                                           value });
        }
        value
    }

    /// Number of distinct variables declared.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the variables in the order they were first declared.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }
}
