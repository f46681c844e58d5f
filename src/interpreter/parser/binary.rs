use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::{core::EvalResult, unary::parse_primary},
        variables::VariableTable,
    },
};

/// Parses and evaluates multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/` and `%`. The remainder
/// follows the sign of the dividend, so `-8 % 3` is `-2`.
///
/// The rule is: `term := primary (("*" | "/" | "%") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the term.
/// - `variables`: Variables visible to the term.
///
/// # Returns
/// The value of the term.
///
/// # Errors
/// Fails with [`RuntimeError::DivisionByZero`] when the right operand of `/`
/// or `%` is zero, before the operation is carried out.
pub fn parse_term(tokens: &mut TokenStream<'_>, variables: &VariableTable) -> EvalResult<f64> {
    let mut left = parse_primary(tokens, variables)?;
    loop {
        match tokens.get()? {
            Token::Mul => left *= parse_primary(tokens, variables)?,
            Token::Div => {
                let column = tokens.column();
                left /= nonzero_divisor(parse_primary(tokens, variables)?, column)?;
            },
            Token::Mod => {
                let column = tokens.column();
                left %= nonzero_divisor(parse_primary(tokens, variables)?, column)?;
            },
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}

/// Rejects a zero right operand of `/` or `%`.
///
/// Both `0.0` and `-0.0` are rejected.
fn nonzero_divisor(value: f64, column: usize) -> Result<f64, RuntimeError> {
    if value == 0.0 {
        return Err(RuntimeError::DivisionByZero { column });
    }
    Ok(value)
}
