#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// A character that starts no known token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// 1-based column of the character.
        column:    usize,
    },
    /// A numeric literal that does not fit in a finite `f64`.
    MalformedNumber {
        /// The literal as written.
        text:   String,
        /// 1-based column where the literal starts.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, column } => {
                write!(f, "Lex error at column {column}: unrecognized character '{character}'.")
            },
            Self::MalformedNumber { text, column } => {
                write!(f, "Lex error at column {column}: malformed number '{text}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
