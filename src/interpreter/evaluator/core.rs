use log::debug;

use crate::{
    error::EvalError,
    interpreter::{
        environment::Environment,
        evaluator::{index::index, primitive::core::Function},
        lexer::Token,
        parser::core::TokenStream,
        settings::Settings,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Deepest nesting of groups, brackets and chained assignments a line may
/// use. Deeper lines fail with a syntax error instead of exhausting the
/// stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Reduces one line's token stream to a value.
///
/// ## Usage
///
/// An `Evaluator` is created per line. It borrows the line's
/// [`TokenStream`], the session [`Environment`] (mutably, for assignment)
/// and the session [`Settings`]. Assignments it performs are staged in the
/// environment; committing or discarding them is up to the caller, see
/// [`crate::evaluate_line`].
///
/// ## Evaluation order
///
/// APL has no precedence table. Every function takes as its right argument
/// the value of everything to its right, and as its left argument the single
/// operand directly to its left, if there is one:
///
/// ```text
///   2 × 3 + 4   ≡   2 × (3 + 4)
///   ⍟ ÷ 2       ≡   ⍟ (÷ 2)
/// ```
///
/// The evaluator works right to left over index ranges of the stream. At
/// each step it holds one already-reduced right operand; a function found to
/// its left is applied dyadically if an operand ends just left of the
/// function, monadically otherwise.
pub struct Evaluator<'a> {
    stream:      &'a TokenStream,
    environment: &'a mut Environment,
    settings:    &'a Settings,
    depth:       usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for one token stream.
    #[must_use]
    pub const fn new(stream: &'a TokenStream,
                     environment: &'a mut Environment,
                     settings: &'a Settings)
                     -> Self {
        Self { stream,
               environment,
               settings,
               depth: 0 }
    }

    /// Evaluates the whole stream.
    ///
    /// # Returns
    /// `None` for an empty stream (a blank or comment-only line), otherwise
    /// the value of the expression. For an assignment that is the assigned
    /// value.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, parser::core::parse,
    ///     settings::Settings, value::core::Value,
    /// };
    ///
    /// let stream = parse("2×3+4").unwrap();
    /// let mut env = Environment::new();
    /// let settings = Settings::default();
    ///
    /// let value = Evaluator::new(&stream, &mut env, &settings).run().unwrap();
    /// assert_eq!(value, Some(Value::Scalar(14.0)));
    /// ```
    pub fn run(&mut self) -> EvalResult<Option<Value>> {
        if self.stream.is_empty() {
            return Ok(None);
        }
        self.eval_expression(0, self.stream.len()).map(Some)
    }

    /// Evaluates the expression occupying `[lo, hi)` one nesting level
    /// below the caller.
    fn eval_expression(&mut self, lo: usize, hi: usize) -> EvalResult<Value> {
        self.nested(lo, |this| this.eval_range(lo, hi))
    }

    /// Runs `eval` one nesting level deeper.
    ///
    /// # Errors
    /// A syntax error at the column of token `at` once the nesting exceeds
    /// [`MAX_NESTING_DEPTH`].
    fn nested<T>(&mut self,
                 at: usize,
                 eval: impl FnOnce(&mut Self) -> EvalResult<T>)
                 -> EvalResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(EvalError::Syntax { details: "expression nested too deeply".into(),
                                           column:  self.stream.column(at), });
        }
        self.depth += 1;
        let result = eval(self);
        self.depth -= 1;
        result
    }

    /// Reduces `[lo, hi)` at the current nesting level.
    ///
    /// A leading `name ←` makes the range an assignment: the rest is
    /// evaluated (recursively, so `a ← b ← 1` binds both names) and bound.
    /// Otherwise the range is reduced from the right: the rightmost operand
    /// first, then one function (and possibly its left operand) at a time.
    fn eval_range(&mut self, lo: usize, hi: usize) -> EvalResult<Value> {
        if lo >= hi {
            return Err(EvalError::MissingOperand { column: self.stream.column(hi) });
        }

        if let Some(name) = self.assignment_target(lo, hi) {
            if lo + 2 >= hi {
                return Err(EvalError::MalformedAssignment { column: self.stream.column(lo + 1) });
            }
            let value = self.eval_expression(lo + 2, hi)?;
            debug!("assign {name} ← {value}");
            self.environment.assign(name, value.clone());
            return Ok(value);
        }

        let (mut right, mut pos) = self.reduce_operand(lo, hi)?;

        while pos > lo {
            let (function, start) = self.function_ending_at(lo, pos)?;

            if start > lo && self.stream.token(start - 1).ends_operand() {
                let (left, left_start) = self.reduce_operand(lo, start)?;
                debug!("apply {function} dyadically to {left} and {right}");
                right = function.apply_dyadic(&left, &right, self.settings)?;
                pos = left_start;
            } else {
                debug!("apply {function} monadically to {right}");
                right = function.apply_monadic(&right, self.settings)?;
                pos = start;
            }
        }

        Ok(right)
    }

    /// Returns the name being assigned if `[lo, hi)` starts with `name ←`.
    fn assignment_target(&self, lo: usize, hi: usize) -> Option<&'a str> {
        let stream: &'a TokenStream = self.stream;
        if lo + 1 >= hi {
            return None;
        }
        match (stream.token(lo), stream.token(lo + 1)) {
            (Token::Identifier(name), Token::Assign) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Reduces the operand that ends just before `hi`.
    ///
    /// An operand is a strand of numeric literals, a name, a parenthesized
    /// group, a bracketed vector literal, or any of these followed by an
    /// index in brackets.
    ///
    /// # Returns
    /// The operand's value and the index of its first token.
    fn reduce_operand(&mut self, lo: usize, hi: usize) -> EvalResult<(Value, usize)> {
        let stream: &'a TokenStream = self.stream;
        let last = hi - 1;
        let column = stream.column(last);

        match stream.token(last) {
            Token::Number(_) => Ok(self.reduce_strand(lo, hi)),
            Token::Identifier(name) => {
                let value =
                    self.environment
                        .get(name)
                        .cloned()
                        .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone(),
                                                                      column })?;
                Ok((value, last))
            },
            Token::RParen => {
                let open = self.opener(lo, last)?;
                let value = self.eval_expression(open + 1, last)?;
                Ok((value, open))
            },
            Token::RBracket => {
                let open = self.opener(lo, last)?;
                if open == lo || !stream.token(open - 1).ends_operand() {
                    return Ok((self.vector_literal(open, last)?, open));
                }
                let subscript = self.eval_expression(open + 1, last)?;
                let (target, start) = self.nested(open, |this| this.reduce_operand(lo, open))?;
                Ok((index(&target, &subscript)?, start))
            },
            Token::Assign => Err(EvalError::MalformedAssignment { column }),
            Token::Glyph(_) | Token::Reduce => Err(EvalError::MissingOperand { column }),
            Token::LParen | Token::LBracket => Err(EvalError::UnmatchedParen { column }),
        }
    }

    /// Evaluates a bracketed literal such as `[1 2 3]` or `[x,2×y]` between
    /// `open` and `close`.
    ///
    /// The contents are an ordinary expression whose value is always taken
    /// as a vector, so `[5]` has length one and `[]` is empty.
    fn vector_literal(&mut self, open: usize, close: usize) -> EvalResult<Value> {
        if open + 1 == close {
            return Ok(Value::from(Vec::new()));
        }
        match self.eval_expression(open + 1, close)? {
            Value::Scalar(x) => Ok(Value::from(vec![x])),
            vector @ Value::Vector(_) => Ok(vector),
        }
    }

    /// Collects the maximal run of numeric literals ending before `hi` into a
    /// scalar (one literal) or a vector (several).
    fn reduce_strand(&self, lo: usize, hi: usize) -> (Value, usize) {
        let mut start = hi - 1;
        while start > lo && matches!(self.stream.token(start - 1), Token::Number(_)) {
            start -= 1;
        }

        let numbers: Vec<f64> = (start..hi).filter_map(|i| match self.stream.token(i) {
                                                  Token::Number(n) => Some(*n),
                                                  _ => None,
                                              })
                                           .collect();

        if let [single] = numbers.as_slice() {
            (Value::Scalar(*single), start)
        } else {
            (Value::from(numbers), start)
        }
    }

    /// Finds the function that ends just before `pos`.
    ///
    /// # Returns
    /// The function and the index of its first token.
    ///
    /// # Errors
    /// A value directly left of another value is a syntax error (only
    /// numeric literals form strands), and an arrow here is a misplaced
    /// assignment.
    fn function_ending_at(&self, lo: usize, pos: usize) -> EvalResult<(Function, usize)> {
        let last = pos - 1;
        let column = self.stream.column(last);

        match self.stream.token(last) {
            Token::Glyph(glyph) => Ok((Function::Primitive(*glyph), last)),
            Token::Reduce => match (last > lo).then(|| self.stream.token(last - 1)) {
                Some(Token::Glyph(glyph)) => Ok((Function::Reduce(*glyph), last - 1)),
                _ => Err(EvalError::Syntax { details: "'/' needs a function to its left".into(),
                                             column }),
            },
            Token::Assign => Err(EvalError::MalformedAssignment { column }),
            token if token.ends_operand() => {
                Err(EvalError::Syntax { details: format!("'{token}' cannot be juxtaposed with the value to its right"),
                                        column })
            },
            _ => Err(EvalError::UnmatchedParen { column }),
        }
    }

    /// Returns the opener paired with the closer at `close`, checking that it
    /// lies inside the range being reduced.
    fn opener(&self, lo: usize, close: usize) -> EvalResult<usize> {
        match self.stream.partner(close) {
            Some(open) if open >= lo && open < close => Ok(open),
            _ => Err(EvalError::UnmatchedParen { column: self.stream.column(close) }),
        }
    }
}
