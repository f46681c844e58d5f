use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::core::{EvalResult, parse_expression},
        variables::VariableTable,
    },
};

/// Parses and evaluates every statement on the line.
///
/// Statements follow each other without a separator: `let x = 2 (x + 2) * 3`
/// is the declaration `let x = 2` followed by the expression `(x + 2) * 3`.
///
/// Grammar: `calculation := statement*`
///
/// # Parameters
/// - `tokens`: Token stream over one line.
/// - `variables`: The session's variables. Declarations made before a failing
///   statement stay in place.
///
/// # Returns
/// The value of the last statement, or `0.0` for a line without statements.
pub fn parse_calculation(tokens: &mut TokenStream<'_>,
                         variables: &mut VariableTable)
                         -> EvalResult<f64> {
    let mut result = 0.0;
    loop {
        match tokens.get()? {
            Token::EndOfInput => return Ok(result),
            token => {
                tokens.putback(token)?;
                result = parse_statement(tokens, variables)?;
            },
        }
    }
}

/// Parses a single statement.
/// A statement is either a declaration, when it starts with `let`, or an
/// expression.
///
/// Grammar: `statement := declaration | expression`
pub fn parse_statement(tokens: &mut TokenStream<'_>,
                       variables: &mut VariableTable)
                       -> EvalResult<f64> {
    match tokens.get()? {
        Token::LetKeyword => parse_declaration(tokens, variables),
        token => {
            tokens.putback(token)?;
            parse_expression(tokens, variables)
        },
    }
}

/// Parses the remainder of a variable declaration after `let`.
///
/// ```text
///     declaration := "let" name "=" expression
/// ```
///
/// The variable is defined, or overwritten if it already exists, only after
/// the expression has been evaluated, so `let x = x + 1` reads the old `x`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `let` is not followed by a name,
/// - the name is not followed by `=`.
///
/// # Returns
/// The value assigned to the variable.
pub fn parse_declaration(tokens: &mut TokenStream<'_>,
                         variables: &mut VariableTable)
                         -> EvalResult<f64> {
    let name = match tokens.get()? {
        Token::Name(name) => name,
        token => {
            let column = tokens.column();
            tokens.putback(token)?;
            return Err(ParseError::ExpectedName { column }.into());
        },
    };

    match tokens.get()? {
        Token::Equals => {},
        token => {
            let column = tokens.column();
            tokens.putback(token)?;
            return Err(ParseError::MissingEquals { name, column }.into());
        },
    }

    let value = parse_expression(tokens, variables)?;
    Ok(variables.define(&name, value))
}
