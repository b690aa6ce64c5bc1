use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, settings::Settings, value::core::Value},
    util::num::{f64_to_length_checked, usize_to_f64_checked},
};

/// Monadic `⍴`: the shape of a value.
///
/// A vector's shape is the one-element vector holding its length; a scalar
/// has no axes, so its shape is the empty vector.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::structural::shape, settings::Settings, value::core::Value,
/// };
///
/// let settings = Settings::default();
///
/// assert_eq!(shape(&Value::from(vec![5.0, 6.0, 7.0]), &settings).unwrap(),
///            Value::from(vec![3.0]));
/// assert_eq!(shape(&Value::Scalar(5.0), &settings).unwrap(), Value::from(Vec::new()));
/// ```
pub fn shape(value: &Value, _: &Settings) -> EvalResult<Value> {
    match value.length() {
        Some(length) => Ok(Value::from(vec![usize_to_f64_checked(length)?])),
        None => Ok(Value::from(Vec::new())),
    }
}

/// Dyadic `⍴`: `n⍴v` builds a vector of `n` items taken cyclically from `v`.
///
/// # Errors
/// `DomainError` if `n` is not a single non-negative integer, or if `v` is
/// empty while `n` is positive.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::structural::reshape, settings::Settings, value::core::Value,
/// };
///
/// let r = reshape(&Value::Scalar(5.0), &Value::from(vec![1.0, 2.0]), &Settings::default()).unwrap();
/// assert_eq!(r, Value::from(vec![1.0, 2.0, 1.0, 2.0, 1.0]));
/// ```
pub fn reshape(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    let count = left.as_scalar().ok_or_else(|| EvalError::DomainError { details: "the left argument of ⍴ must be a single number".into() })?;
    let count = f64_to_length_checked(count, "the left argument of ⍴")?;

    let source = right.as_slice();
    if source.is_empty() && count > 0 {
        return Err(EvalError::DomainError { details: "cannot reshape an empty vector".into() });
    }

    Ok(Value::from(source.iter().copied().cycle().take(count).collect::<Vec<_>>()))
}

/// Monadic `,`: the argument as a vector. A scalar becomes a one-element
/// vector.
pub fn ravel(value: &Value, _: &Settings) -> EvalResult<Value> {
    match value {
        Value::Scalar(x) => Ok(Value::from(vec![*x])),
        Value::Vector(_) => Ok(value.clone()),
    }
}

/// Dyadic `,`: joins two values into one vector, scalars counting as
/// one-element vectors.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::structural::catenate, settings::Settings, value::core::Value,
/// };
///
/// let r = catenate(&Value::Scalar(1.0), &Value::from(vec![2.0, 3.0]), &Settings::default()).unwrap();
/// assert_eq!(r, Value::from(vec![1.0, 2.0, 3.0]));
/// ```
pub fn catenate(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    let (left, right) = (left.as_slice(), right.as_slice());
    let mut joined = Vec::with_capacity(left.len() + right.len());
    joined.extend_from_slice(left);
    joined.extend_from_slice(right);
    Ok(Value::from(joined))
}
