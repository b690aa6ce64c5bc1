#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a line.
pub enum EvalError {
    /// A parenthesis or bracket without a partner.
    UnmatchedParen {
        /// 1-based column of the unpaired token.
        column: usize,
    },
    /// A name was used before anything was assigned to it.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// 1-based column of the name.
        column: usize,
    },
    /// A function was applied to a single argument but has no monadic form.
    NoMonadicForm {
        /// The function as written, e.g. `=`.
        function: String,
    },
    /// A function was applied to two arguments but has no dyadic form.
    NoDyadicForm {
        /// The function as written, e.g. `⍳` or `+/`.
        function: String,
    },
    /// Two vectors of different lengths were combined elementwise.
    ShapeMismatch {
        /// Length of the left argument.
        left:  usize,
        /// Length of the right argument.
        right: usize,
    },
    /// An argument outside the domain of a function, such as the logarithm
    /// of zero or a division by zero.
    DomainError {
        /// Details about the violation.
        details: String,
    },
    /// An assignment arrow anywhere but after a single leading name, or an
    /// assignment without a right-hand side.
    MalformedAssignment {
        /// 1-based column of the arrow.
        column: usize,
    },
    /// A function with nothing to its right, or an empty group.
    MissingOperand {
        /// 1-based column where an operand was expected.
        column: usize,
    },
    /// Tokens that do not form an expression, such as two juxtaposed names.
    Syntax {
        /// Details about the problem.
        details: String,
        /// 1-based column of the offending token.
        column:  usize,
    },
    /// An index outside `1..=max`.
    IndexOutOfBounds {
        /// Length of the indexed value (`0` for a scalar).
        max:   usize,
        /// The index that was requested.
        found: i64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedParen { column } => {
                write!(f, "Syntax error at column {column}: unmatched parenthesis.")
            },
            Self::UndefinedVariable { name, column } => {
                write!(f, "Value error at column {column}: undefined variable '{name}'.")
            },
            Self::NoMonadicForm { function } => {
                write!(f, "Valence error: '{function}' has no monadic form.")
            },
            Self::NoDyadicForm { function } => {
                write!(f, "Valence error: '{function}' has no dyadic form.")
            },
            Self::ShapeMismatch { left, right } => write!(f,
                                                          "Length error: cannot combine vectors of length {left} and {right}."),
            Self::DomainError { details } => write!(f, "Domain error: {details}."),
            Self::MalformedAssignment { column } => write!(f,
                                                           "Syntax error at column {column}: assignment must follow a single leading name and have a value."),
            Self::MissingOperand { column } => {
                write!(f, "Syntax error at column {column}: missing operand.")
            },
            Self::Syntax { details, column } => {
                write!(f, "Syntax error at column {column}: {details}.")
            },
            Self::IndexOutOfBounds { max, found } => write!(f,
                                                            "Index error: index {found} is out of bounds, maximum is {max}."),
        }
    }
}

impl std::error::Error for EvalError {}
