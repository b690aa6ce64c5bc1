use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, settings::Settings, value::core::Value},
    util::num::{f64_to_length_checked, usize_to_f64_checked},
};

/// Monadic `⍳`: the vector `1 2 … n`.
///
/// The argument must be a single non-negative integer, given as a scalar or
/// a one-element vector. `⍳0` is the empty vector.
///
/// # Errors
/// `DomainError` for a longer vector, a negative or fractional count, or a
/// count above [`crate::util::num::MAX_VECTOR_LENGTH`].
///
/// # Example
/// ```
/// use apl360::{
///     error::EvalError,
///     interpreter::{evaluator::primitive::iota::index_generator, settings::Settings, value::core::Value},
/// };
///
/// let settings = Settings::default();
///
/// let v = index_generator(&Value::Scalar(4.0), &settings).unwrap();
/// assert_eq!(v, Value::from(vec![1.0, 2.0, 3.0, 4.0]));
///
/// let empty = index_generator(&Value::Scalar(0.0), &settings).unwrap();
/// assert_eq!(empty, Value::from(Vec::new()));
///
/// let err = index_generator(&Value::Scalar(2.5), &settings).unwrap_err();
/// assert!(matches!(err, EvalError::DomainError { .. }));
/// ```
pub fn index_generator(value: &Value, _: &Settings) -> EvalResult<Value> {
    let count = value.as_scalar()
                     .ok_or_else(|| EvalError::DomainError { details: "⍳ needs a single number".into() })?;
    let count = f64_to_length_checked(count, "the argument of ⍳")?;

    (1..=count).map(usize_to_f64_checked)
               .collect::<EvalResult<Vec<_>>>()
               .map(Value::from)
}
