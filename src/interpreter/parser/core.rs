use log::trace;

use crate::{
    error::{Error, EvalError},
    interpreter::lexer::{Token, tokenize},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, Error>;

/// The tokens of one line, stored once, with precomputed bracket partners.
///
/// The evaluator never copies tokens: it recurses over `[start, end)` index
/// ranges into this stream, and uses [`TokenStream::partner`] to jump from a
/// closing `)` or `]` to its opening counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens:   Vec<(Token, usize)>,
    partners: Vec<Option<usize>>,
}

impl TokenStream {
    /// Builds a stream from tokens, pairing parentheses and brackets.
    ///
    /// # Errors
    /// Returns `EvalError::UnmatchedParen` for a closing token without an
    /// opener, an opener that is never closed, or a `(` closed by `]` (and
    /// vice versa).
    pub fn new(tokens: Vec<(Token, usize)>) -> Result<Self, EvalError> {
        let mut partners = vec![None; tokens.len()];
        let mut open: Vec<usize> = Vec::new();

        for (index, (token, column)) in tokens.iter().enumerate() {
            match token {
                Token::LParen | Token::LBracket => open.push(index),
                Token::RParen | Token::RBracket => {
                    let opener = open.pop()
                                     .ok_or(EvalError::UnmatchedParen { column: *column })?;
                    let matches = matches!((&tokens[opener].0, token),
                                           (Token::LParen, Token::RParen)
                                           | (Token::LBracket, Token::RBracket));
                    if !matches {
                        return Err(EvalError::UnmatchedParen { column: *column });
                    }
                    partners[opener] = Some(index);
                    partners[index] = Some(opener);
                },
                _ => {},
            }
        }

        if let Some(&unclosed) = open.last() {
            return Err(EvalError::UnmatchedParen { column: tokens[unclosed].1 });
        }

        Ok(Self { tokens, partners })
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` for a blank or comment-only line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range; the evaluator only asks for indices
    /// inside the range it is reducing.
    #[must_use]
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index].0
    }

    /// The 1-based source column of the token at `index`, or one past the
    /// last token's column when `index` is the end of the stream.
    #[must_use]
    pub fn column(&self, index: usize) -> usize {
        match self.tokens.get(index) {
            Some((_, column)) => *column,
            None => self.tokens.last().map_or(1, |(_, column)| column + 1),
        }
    }

    /// The index of the parenthesis or bracket paired with the one at
    /// `index`, or `None` if that token is not a parenthesis or bracket.
    #[must_use]
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied().flatten()
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().map(|(token, _)| token)
    }
}

/// Tokenizes a line and builds its [`TokenStream`].
///
/// # Errors
/// Returns `Error::Lex` if tokenizing fails and `Error::Eval` with
/// `UnmatchedParen` if parentheses or brackets do not pair up.
///
/// # Example
/// ```
/// use apl360::{
///     error::{Error, EvalError},
///     interpreter::parser::core::parse,
/// };
///
/// let stream = parse("(1 2)[2]").unwrap();
/// assert_eq!(stream.partner(0), Some(3));
/// assert_eq!(stream.partner(6), Some(4));
///
/// let err = parse("(1+2").unwrap_err();
/// assert_eq!(err, Error::Eval(EvalError::UnmatchedParen { column: 1 }));
/// ```
pub fn parse(source: &str) -> ParseResult<TokenStream> {
    let tokens = tokenize(source)?;
    let stream = TokenStream::new(tokens)?;
    trace!("token stream: {:?}", stream.iter().map(ToString::to_string).collect::<Vec<_>>());
    Ok(stream)
}
