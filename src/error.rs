/// Lexing errors.
///
/// Raised while turning a line of text into tokens: characters that belong
/// to no token and numeric literals that cannot be represented.
pub mod lex_error;
/// Evaluation errors.
///
/// Raised while reducing a token stream to a value: unknown names, valence
/// and shape problems, domain violations and malformed expressions.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;

/// Any error produced while evaluating one line.
///
/// Both phases convert into this type, so `?` can be used across the lexer
/// and the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The tokens could not be evaluated.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
