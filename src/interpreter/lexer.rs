use log::trace;
use logos::Logos;

use crate::{error::LexError, interpreter::glyph::Glyph};

/// Represents a lexical token of an APL expression.
///
/// Tokens are produced by [`tokenize`] and stored once, in order, inside a
/// `TokenStream`. Each is paired with its 1-based character column.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal such as `42`, `¯3.5` or `1E¯3`.
    Number(f64),
    /// A primitive function symbol.
    Glyph(Glyph),
    /// A variable name.
    Identifier(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `←` or `<-`
    Assign,
    /// `/` directly after a glyph, turning it into a reduction.
    Reduce,
}

impl Token {
    /// Returns `true` if an operand can end with this token, i.e. a glyph
    /// directly to its right takes it as a left argument.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Identifier(_) | Self::RParen | Self::RBracket)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Glyph(g) => write!(f, "{g}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Assign => write!(f, "←"),
            Self::Reduce => write!(f, "/"),
        }
    }
}

/// Raw lexemes recognised by `logos`, before the context-sensitive rules
/// (sign folding, reduction) are applied.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\f\r\n]+")]
enum Lexeme<'s> {
    /// Unsigned or high-minus literal, e.g. `3`, `.5`, `¯2.5E¯3`.
    #[regex(r"¯?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][¯+-]?[0-9]+)?", |lex| lex.slice())]
    Number(&'s str),
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Identifier(&'s str),
    /// `⍝ comments`
    #[regex(r"⍝[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ASCII `-`, which may become the sign of the following literal.
    #[token("-")]
    Hyphen,
    /// ASCII `/`, either a reduction or division.
    #[token("/")]
    Slash,
    #[token("+", |_| Glyph::Plus)]
    #[token("−", |_| Glyph::Minus)]
    #[token("×", |_| Glyph::Times)]
    #[token("*", |_| Glyph::Times)]
    #[token("sign", |_| Glyph::Times)]
    #[token("÷", |_| Glyph::Divide)]
    #[token("recip", |_| Glyph::Divide)]
    #[token("⋆", |_| Glyph::Power)]
    #[token("^", |_| Glyph::Power)]
    #[token("**", |_| Glyph::Power)]
    #[token("exp", |_| Glyph::Power)]
    #[token("⍟", |_| Glyph::Log)]
    #[token("ln", |_| Glyph::Log)]
    #[token("⌈", |_| Glyph::Ceiling)]
    #[token("ceil", |_| Glyph::Ceiling)]
    #[token("⌊", |_| Glyph::Floor)]
    #[token("floor", |_| Glyph::Floor)]
    #[token("|", |_| Glyph::Residue)]
    #[token("abs", |_| Glyph::Residue)]
    #[token("%", |_| Glyph::Residue)]
    #[token("mod", |_| Glyph::Residue)]
    #[token("⍳", |_| Glyph::Iota)]
    #[token("iota", |_| Glyph::Iota)]
    #[token("⍴", |_| Glyph::Rho)]
    #[token("rho", |_| Glyph::Rho)]
    #[token(",", |_| Glyph::Catenate)]
    #[token("=", |_| Glyph::Equal)]
    #[token("==", |_| Glyph::Equal)]
    Glyph(Glyph),
    #[token("←")]
    #[token("<-")]
    Assign,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

/// Converts a line of source text into tokens paired with their columns.
///
/// Besides the plain lexical rules this applies the two context-sensitive
/// ones:
/// - an ASCII `-` glued to the literal after it is that literal's sign, unless
///   it directly follows an operand (`2-3` is a subtraction, `2×-3` is not);
/// - `/` directly after a glyph is a reduction, anywhere else it is division.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] for input that matches no
/// lexeme and [`LexError::MalformedNumber`] for a literal that does not fit in
/// a finite `f64`.
///
/// # Example
/// ```
/// use apl360::interpreter::{glyph::Glyph, lexer::{Token, tokenize}};
///
/// let tokens = tokenize("x←¯1 2×-3").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Assign,
///                 Token::Number(-1.0),
///                 Token::Number(2.0),
///                 Token::Glyph(Glyph::Times),
///                 Token::Number(-3.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        match lexeme {
            Ok(lexeme) => lexemes.push((lexeme, span)),
            Err(()) => {
                let column = column_of(source, span.start);
                let character = source[span.start..].chars().next().unwrap_or(' ');
                return Err(LexError::UnrecognizedCharacter { character, column });
            },
        }
    }

    let mut tokens: Vec<(Token, usize)> = Vec::with_capacity(lexemes.len());
    let mut iter = lexemes.iter().peekable();

    while let Some((lexeme, span)) = iter.next() {
        let column = column_of(source, span.start);
        let follows_operand = tokens.last().is_some_and(|(t, _)| t.ends_operand());

        let token = match *lexeme {
            Lexeme::Number(text) => Token::Number(parse_number(text, column)?),
            Lexeme::Hyphen => {
                let literal = iter.peek().and_then(|(next, next_span)| match next {
                                              Lexeme::Number(text)
                                                  if next_span.start == span.end
                                                     && !follows_operand
                                                     && !text.starts_with('¯') =>
                                              {
                                                  Some(*text)
                                              },
                                              _ => None,
                                          });
                if let Some(text) = literal {
                    iter.next();
                    Token::Number(-parse_number(text, column)?)
                } else {
                    Token::Glyph(Glyph::Minus)
                }
            },
            Lexeme::Slash => match tokens.last() {
                Some((Token::Glyph(_), _)) => Token::Reduce,
                _ => Token::Glyph(Glyph::Divide),
            },
            Lexeme::Identifier(name) => Token::Identifier(name.to_string()),
            Lexeme::Glyph(glyph) => Token::Glyph(glyph),
            Lexeme::Assign => Token::Assign,
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,
            Lexeme::LBracket => Token::LBracket,
            Lexeme::RBracket => Token::RBracket,
            Lexeme::Comment => continue,
        };
        tokens.push((token, column));
    }

    trace!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Parses a literal slice, accepting APL high minus for the mantissa and the
/// exponent.
fn parse_number(text: &str, column: usize) -> Result<f64, LexError> {
    let ascii = text.replace('¯', "-");
    match ascii.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexError::MalformedNumber { text: text.to_string(),
                                             column }),
    }
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
