use crate::{
    error::CalcError,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::binary::parse_term,
        variables::VariableTable,
    },
};

/// Result type used by every grammar function.
///
/// Parsing and evaluation happen in the same pass, so a failure may come from
/// either phase.
pub type EvalResult<T> = Result<T, CalcError>;

/// Parses and evaluates an additive expression.
///
/// This is the entry point for expression parsing. Addition and subtraction
/// are folded left to right in a loop, so long chains do not deepen the
/// recursion.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `variables`: Variables visible to the expression.
///
/// # Returns
/// The value of the expression. The first token that does not belong to it
/// is pushed back onto `tokens`.
pub fn parse_expression(tokens: &mut TokenStream<'_>,
                        variables: &VariableTable)
                        -> EvalResult<f64> {
    let mut left = parse_term(tokens, variables)?;
    loop {
        match tokens.get()? {
            Token::Add => left += parse_term(tokens, variables)?,
            Token::Sub => left -= parse_term(tokens, variables)?,
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}
