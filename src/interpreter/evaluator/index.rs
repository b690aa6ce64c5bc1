use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_i64_checked,
};

/// Selects elements of `target` by 1-based position.
///
/// The result has the shape of `subscript`: a scalar subscript gives a
/// scalar, a vector subscript gives a vector of the same length.
///
/// # Errors
/// - `DomainError` if a subscript is not an integer.
/// - `IndexOutOfBounds` if a subscript is below 1 or past the end. A scalar
///   has no positions, so indexing one always fails with `max` 0.
///
/// # Example
/// ```
/// use apl360::{
///     error::EvalError,
///     interpreter::{evaluator::index::index, value::core::Value},
/// };
///
/// let v = Value::from(vec![10.0, 20.0, 30.0]);
///
/// assert_eq!(index(&v, &Value::Scalar(2.0)).unwrap(), Value::Scalar(20.0));
/// assert_eq!(index(&v, &Value::from(vec![3.0, 1.0])).unwrap(),
///            Value::from(vec![30.0, 10.0]));
///
/// let err = index(&v, &Value::Scalar(4.0)).unwrap_err();
/// assert_eq!(err, EvalError::IndexOutOfBounds { max: 3, found: 4 });
/// ```
pub fn index(target: &Value, subscript: &Value) -> EvalResult<Value> {
    let items: &[f64] = match target {
        Value::Scalar(_) => &[],
        Value::Vector(items) => items.as_slice(),
    };

    let pick = |position: f64| -> EvalResult<f64> {
        let found = f64_to_i64_checked(position)?;
        usize::try_from(found).ok()
                              .and_then(|i| i.checked_sub(1))
                              .and_then(|i| items.get(i).copied())
                              .ok_or(EvalError::IndexOutOfBounds { max: items.len(),
                                                                   found })
    };

    match subscript {
        Value::Scalar(position) => Ok(Value::Scalar(pick(*position)?)),
        Value::Vector(positions) => positions.iter()
                                             .map(|p| pick(*p))
                                             .collect::<EvalResult<Vec<_>>>()
                                             .map(Value::from),
    }
}
