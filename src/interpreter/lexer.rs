use std::mem::discriminant;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a line of input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `%`
    #[token("%")]
    Mod,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `let`
    #[token("let")]
    LetKeyword,
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Name(String),
    /// The line has no more tokens.
    EndOfInput,
    /// A character that starts no token.
    Invalid,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "'+'"),
            Self::Sub => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Mod => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Equals => write!(f, "'='"),
            Self::LetKeyword => write!(f, "'let'"),
            Self::Number(value) => write!(f, "number {value}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Invalid => write!(f, "invalid input"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// How many parenthesized groups may be open at once.
pub const MAX_NESTING: usize = 256;

/// A stream of tokens over one line with a single token of lookahead.
///
/// The grammar never needs to look further than one token ahead, so the
/// push-back buffer is a single slot. Pushing back into an occupied slot is
/// reported as [`ParseError::InternalInconsistency`].
pub struct TokenStream<'src> {
    lexer:  logos::Lexer<'src, Token>,
    buffer: Option<(Token, usize)>,
    column: usize,
    /// Byte offset and column of the last scanned token. Columns are counted
    /// forward from here so a line is only walked once.
    mark:   (usize, usize),
    depth:  usize,
}

impl<'src> TokenStream<'src> {
    /// Creates a token stream reading from `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:  Token::lexer(source),
               buffer: None,
               column: 1,
               mark:   (0, 1),
               depth:  0, }
    }

    /// Returns the next token.
    ///
    /// A pushed-back token is returned first. Otherwise the line is scanned;
    /// once it is exhausted every call yields [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the next character does not
    /// start any token.
    pub fn get(&mut self) -> Result<Token, ParseError> {
        if let Some((token, column)) = self.buffer.take() {
            self.column = column;
            return Ok(token);
        }

        match self.scan() {
            Token::Invalid => Err(ParseError::UnexpectedToken { token:  self.lexer
                                                                            .slice()
                                                                            .to_string(),
                                                                column: self.column, }),
            token => Ok(token),
        }
    }

    /// Stores `token` so that the next call to [`get`](Self::get) returns it.
    ///
    /// `token` is assumed to be the one most recently returned by `get`; its
    /// column is remembered along with it.
    ///
    /// # Errors
    /// Returns [`ParseError::InternalInconsistency`] if a token is already
    /// waiting in the buffer.
    pub fn putback(&mut self, token: Token) -> Result<(), ParseError> {
        if let Some((held, _)) = &self.buffer {
            return Err(ParseError::InternalInconsistency { details: format!("called putback with {token} while {held} was already buffered") });
        }
        self.buffer = Some((token, self.column));
        Ok(())
    }

    /// Discards tokens until one of the same kind as `kind` has been consumed
    /// or the line ends.
    ///
    /// Only the variant is compared, so `Token::Number(0.0)` matches any
    /// number. Unrecognized characters are skipped silently.
    pub fn ignore(&mut self, kind: &Token) {
        if let Some((token, column)) = self.buffer.take() {
            self.column = column;
            if discriminant(&token) == discriminant(kind) {
                return;
            }
        }

        loop {
            let token = self.scan();
            if token == Token::EndOfInput || discriminant(&token) == discriminant(kind) {
                break;
            }
        }
    }

    /// The 1-based column of the token most recently returned by
    /// [`get`](Self::get).
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Enters a parenthesized group.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] once more than
    /// [`MAX_NESTING`] groups are open.
    pub fn enter_group(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING,
                                                    column: self.column, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost parenthesized group.
    pub const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn scan(&mut self) -> Token {
        let token = match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Invalid,
            None => {
                self.column = self.advance_to(self.lexer.source().len());
                return Token::EndOfInput;
            },
        };
        self.column = self.advance_to(self.lexer.span().start);
        token
    }

    fn advance_to(&mut self, offset: usize) -> usize {
        let (from, column) = self.mark;
        let column = column + self.lexer.source()[from..offset].chars().count();
        self.mark = (offset, column);
        column
    }
}
