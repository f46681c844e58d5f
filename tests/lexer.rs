use letcalc::{
    error::{CalcError, ErrorKind, ParseError},
    interpreter::lexer::{Token, TokenStream},
};

fn collect(source: &str) -> Vec<Token> {
    let mut tokens = TokenStream::new(source);
    let mut out = Vec::new();
    loop {
        let token = tokens.get()
                          .unwrap_or_else(|e| panic!("lexing '{source}' failed: {e}"));
        let done = token == Token::EndOfInput;
        out.push(token);
        if done {
            return out;
        }
    }
}

#[test]
fn recognizes_every_token() {
    assert_eq!(collect("let x = 3.5 * (y % 2) / -1 + 0"),
               vec![Token::LetKeyword,
                    Token::Name("x".to_string()),
                    Token::Equals,
                    Token::Number(3.5),
                    Token::Mul,
                    Token::LParen,
                    Token::Name("y".to_string()),
                    Token::Mod,
                    Token::Number(2.0),
                    Token::RParen,
                    Token::Div,
                    Token::Sub,
                    Token::Number(1.0),
                    Token::Add,
                    Token::Number(0.0),
                    Token::EndOfInput]);
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(collect("2+3"),
               vec![Token::Number(2.0), Token::Add, Token::Number(3.0), Token::EndOfInput]);
}

#[test]
fn keyword_only_matches_whole_word() {
    assert_eq!(collect("letx let2 Let let"),
               vec![Token::Name("letx".to_string()),
                    Token::Name("let2".to_string()),
                    Token::Name("Let".to_string()),
                    Token::LetKeyword,
                    Token::EndOfInput]);
}

#[test]
fn number_followed_by_name_splits() {
    assert_eq!(collect("2x 1.5e2y"),
               vec![Token::Number(2.0),
                    Token::Name("x".to_string()),
                    Token::Number(150.0),
                    Token::Name("y".to_string()),
                    Token::EndOfInput]);
}

#[test]
fn end_of_input_repeats() {
    let mut tokens = TokenStream::new("7");
    assert_eq!(tokens.get(), Ok(Token::Number(7.0)));
    assert_eq!(tokens.get(), Ok(Token::EndOfInput));
    assert_eq!(tokens.get(), Ok(Token::EndOfInput));
}

#[test]
fn invalid_character_fails_with_its_column() {
    let mut tokens = TokenStream::new("1 @");
    assert_eq!(tokens.get(), Ok(Token::Number(1.0)));
    assert_eq!(tokens.get(),
               Err(ParseError::UnexpectedToken { token:  "@".to_string(),
                                                 column: 3, }));
}

#[test]
fn putback_returns_same_token_and_column() {
    let mut tokens = TokenStream::new("a   b");
    assert_eq!(tokens.get(), Ok(Token::Name("a".to_string())));
    assert_eq!(tokens.get(), Ok(Token::Name("b".to_string())));
    assert_eq!(tokens.column(), 5);

    tokens.putback(Token::Name("b".to_string())).unwrap();
    assert_eq!(tokens.get(), Ok(Token::Name("b".to_string())));
    assert_eq!(tokens.column(), 5);
    assert_eq!(tokens.get(), Ok(Token::EndOfInput));
}

#[test]
fn second_putback_is_internal_error() {
    let mut tokens = TokenStream::new("1 2");
    let first = tokens.get().unwrap();
    tokens.putback(first).unwrap();

    let err = tokens.putback(Token::Add).unwrap_err();
    assert!(matches!(err, ParseError::InternalInconsistency { .. }));
    assert_eq!(CalcError::from(err).kind(), ErrorKind::InternalInconsistency);

    // The buffered token is not overwritten.
    assert_eq!(tokens.get(), Ok(Token::Number(1.0)));
}

#[test]
fn ignore_skips_through_matching_token() {
    let mut tokens = TokenStream::new("1 2 ) 3");
    tokens.ignore(&Token::RParen);
    assert_eq!(tokens.get(), Ok(Token::Number(3.0)));
}

#[test]
fn ignore_compares_variants_only() {
    let mut tokens = TokenStream::new("+ - 42 * 5");
    tokens.ignore(&Token::Number(0.0));
    assert_eq!(tokens.get(), Ok(Token::Mul));
}

#[test]
fn ignore_consumes_matching_buffered_token() {
    let mut tokens = TokenStream::new(") 4");
    let paren = tokens.get().unwrap();
    tokens.putback(paren).unwrap();

    tokens.ignore(&Token::RParen);
    assert_eq!(tokens.get(), Ok(Token::Number(4.0)));
}

#[test]
fn ignore_discards_non_matching_buffered_token() {
    let mut tokens = TokenStream::new("a ) b");
    let name = tokens.get().unwrap();
    tokens.putback(name).unwrap();

    tokens.ignore(&Token::RParen);
    assert_eq!(tokens.get(), Ok(Token::Name("b".to_string())));
}

#[test]
fn ignore_skips_invalid_characters_and_stops_at_end() {
    let mut tokens = TokenStream::new("@ # ) 4");
    tokens.ignore(&Token::RParen);
    assert_eq!(tokens.get(), Ok(Token::Number(4.0)));

    let mut tokens = TokenStream::new("1 ; 2");
    tokens.ignore(&Token::RParen);
    assert_eq!(tokens.get(), Ok(Token::EndOfInput));
}

#[test]
fn tokens_display_their_spelling() {
    assert_eq!(Token::Mod.to_string(), "'%'");
    assert_eq!(Token::LetKeyword.to_string(), "'let'");
    assert_eq!(Token::Number(2.5).to_string(), "number 2.5");
    assert_eq!(Token::Name("hx".to_string()).to_string(), "name 'hx'");
    assert_eq!(Token::EndOfInput.to_string(), "end of input");
}
