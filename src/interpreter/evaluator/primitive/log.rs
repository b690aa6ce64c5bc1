use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            primitive::broadcast::{map_dyadic, map_monadic},
        },
        settings::Settings,
        value::core::Value,
    },
};

/// Monadic `⍟`: natural logarithm of each element.
///
/// # Errors
/// `DomainError` if any element is zero or negative.
///
/// # Example
/// ```
/// use apl360::{
///     error::EvalError,
///     interpreter::{evaluator::primitive::log::natural_log, settings::Settings, value::core::Value},
/// };
///
/// let settings = Settings::default();
///
/// let r = natural_log(&Value::Scalar(1.0), &settings).unwrap();
/// assert_eq!(r, Value::Scalar(0.0));
///
/// let err = natural_log(&Value::Scalar(-1.0), &settings).unwrap_err();
/// assert!(matches!(err, EvalError::DomainError { .. }));
/// ```
pub fn natural_log(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| Ok(positive(x)?.ln()))
}

/// Dyadic `⍟`: `base ⍟ x` is the logarithm of `x` to `base`, computed as
/// `ln(x) / ln(base)`.
///
/// # Errors
/// `DomainError` if `x` or `base` is not positive, or `base` is one.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::log::log_base, settings::Settings, value::core::Value,
/// };
///
/// let r = log_base(&Value::Scalar(2.0), &Value::from(vec![8.0, 1024.0]), &Settings::default()).unwrap();
/// assert_eq!(r.to_string(), "3 10");
/// ```
pub fn log_base(base: &Value, value: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(base, value, |b, x| {
        if b == 1.0 {
            return Err(EvalError::DomainError { details: "logarithm to base 1".into() });
        }
        Ok(positive(x)?.ln() / positive(b)?.ln())
    })
}

/// Checks that a logarithm argument is positive.
fn positive(x: f64) -> EvalResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(EvalError::DomainError { details: format!("logarithm of non-positive number {x}") })
    }
}
