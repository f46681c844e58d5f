use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::core::{EvalResult, parse_expression},
        variables::VariableTable,
    },
};

/// Parses and evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - variable names
/// - parenthesized expressions
/// - the prefix operators `+` and `-` applied to another primary
///
/// A run of prefix operators is folded in a loop, so `--x` is `-(-x)` however
/// long the run is. Parentheses recurse, bounded by
/// [`MAX_NESTING`](crate::interpreter::lexer::MAX_NESTING).
///
/// Grammar:
/// ```text
///     primary := "+" primary
///              | "-" primary
///              | "(" expression ")"
///              | number
///              | name
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
/// - `variables`: Variables a name may refer to.
///
/// # Returns
/// The value of the primary, or an error on failure. A token that cannot start
/// a primary is pushed back before the error is returned.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>,
                            variables: &VariableTable)
                            -> EvalResult<f64> {
    let mut negate = false;
    let token = loop {
        match tokens.get()? {
            Token::Add => {},
            Token::Sub => negate = !negate,
            token => break token,
        }
    };

    let value = match token {
        Token::LParen => parse_grouping(tokens, variables)?,
        Token::Number(value) => value,
        Token::Name(name) => variables.get(&name, tokens.column())?,
        token => {
            let error = ParseError::ExpectedPrimary { token:  token.to_string(),
                                                      column: tokens.column(), };
            tokens.putback(token)?;
            return Err(error.into());
        },
    };

    Ok(if negate { -value } else { value })
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping(tokens: &mut TokenStream<'_>, variables: &VariableTable) -> EvalResult<f64> {
    tokens.enter_group()?;
    let value = parse_expression(tokens, variables)?;
    tokens.leave_group();

    match tokens.get()? {
        Token::RParen => Ok(value),
        _ => Err(ParseError::MissingRParen { column: tokens.column() }.into()),
    }
}
