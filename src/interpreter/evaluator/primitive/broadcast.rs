use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a scalar function to every element of a value, preserving its
/// shape.
///
/// Each result must be a finite number; NaN or an infinity becomes a
/// `DomainError`.
///
/// # Example
/// ```
/// use apl360::interpreter::{evaluator::primitive::broadcast::map_monadic, value::core::Value};
///
/// let v = Value::from(vec![1.0, -2.0]);
/// let r = map_monadic(&v, |x| Ok(x * 10.0)).unwrap();
///
/// assert_eq!(r, Value::from(vec![10.0, -20.0]));
/// ```
pub fn map_monadic<F>(value: &Value, f: F) -> EvalResult<Value>
    where F: Fn(f64) -> EvalResult<f64>
{
    match value {
        Value::Scalar(x) => Ok(Value::Scalar(finite(f(*x)?)?)),
        Value::Vector(items) => {
            let mut out = Vec::with_capacity(items.len());
            for x in items.iter() {
                out.push(finite(f(*x)?)?);
            }
            Ok(Value::from(out))
        },
    }
}

/// Applies a scalar function elementwise to two values.
///
/// Broadcasting rules:
/// - Scalar with scalar gives a scalar.
/// - A scalar, or a vector of length one, is paired with every element of
///   the other vector.
/// - Two vectors must have the same length; otherwise the result is a
///   `ShapeMismatch`.
///
/// Each result must be a finite number; NaN or an infinity becomes a
/// `DomainError`.
///
/// # Example
/// ```
/// use apl360::{
///     error::EvalError,
///     interpreter::{evaluator::primitive::broadcast::map_dyadic, value::core::Value},
/// };
///
/// let add = |a: f64, b: f64| Ok(a + b);
///
/// let r = map_dyadic(&Value::Scalar(1.0), &Value::from(vec![1.0, 2.0]), add).unwrap();
/// assert_eq!(r, Value::from(vec![2.0, 3.0]));
///
/// let err = map_dyadic(&Value::from(vec![1.0, 2.0, 3.0]),
///                      &Value::from(vec![1.0, 2.0]),
///                      add).unwrap_err();
/// assert_eq!(err, EvalError::ShapeMismatch { left: 3, right: 2 });
/// ```
pub fn map_dyadic<F>(left: &Value, right: &Value, f: F) -> EvalResult<Value>
    where F: Fn(f64, f64) -> EvalResult<f64>
{
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(finite(f(*a, *b)?)?)),

        (Value::Scalar(a), Value::Vector(bs)) => collect(bs.iter().map(|b| f(*a, *b))),

        (Value::Vector(a_items), Value::Scalar(b)) => collect(a_items.iter().map(|a| f(*a, *b))),

        (Value::Vector(a_items), Value::Vector(b_items)) => {
            if a_items.len() == b_items.len() {
                collect(a_items.iter().zip(b_items.iter()).map(|(a, b)| f(*a, *b)))
            } else if let [a] = a_items.as_slice() {
                collect(b_items.iter().map(|b| f(*a, *b)))
            } else if let [b] = b_items.as_slice() {
                collect(a_items.iter().map(|a| f(*a, *b)))
            } else {
                Err(EvalError::ShapeMismatch { left:  a_items.len(),
                                               right: b_items.len(), })
            }
        },
    }
}

/// Collects elementwise results into a vector, checking each one.
fn collect<I>(results: I) -> EvalResult<Value>
    where I: Iterator<Item = EvalResult<f64>>
{
    results.map(|r| r.and_then(finite))
           .collect::<EvalResult<Vec<_>>>()
           .map(Value::from)
}

/// Rejects NaN and infinite results.
fn finite(x: f64) -> EvalResult<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(EvalError::DomainError { details: "result is not a finite real number".into() })
    }
}
