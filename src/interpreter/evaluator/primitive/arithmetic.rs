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

/// Monadic `+`: returns the argument unchanged.
pub fn conjugate(value: &Value, _: &Settings) -> EvalResult<Value> {
    Ok(value.clone())
}

/// Dyadic `+`: elementwise addition.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::arithmetic::add, settings::Settings, value::core::Value,
/// };
///
/// let r = add(&Value::from(vec![1.0, 2.0]), &Value::Scalar(10.0), &Settings::default()).unwrap();
/// assert_eq!(r, Value::from(vec![11.0, 12.0]));
/// ```
pub fn add(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(a + b))
}

/// Monadic `−`: elementwise negation.
pub fn negate(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| Ok(-x))
}

/// Dyadic `−`: elementwise subtraction.
pub fn subtract(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(a - b))
}

/// Monadic `×`: the sign of each element, `¯1`, `0` or `1`.
///
/// Unlike `f64::signum`, zero maps to zero.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::arithmetic::signum, settings::Settings, value::core::Value,
/// };
///
/// let r = signum(&Value::from(vec![-3.5, 0.0, 2.0]), &Settings::default()).unwrap();
/// assert_eq!(r, Value::from(vec![-1.0, 0.0, 1.0]));
/// ```
pub fn signum(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| {
        if x > 0.0 {
            Ok(1.0)
        } else if x < 0.0 {
            Ok(-1.0)
        } else {
            Ok(0.0)
        }
    })
}

/// Dyadic `×`: elementwise multiplication.
pub fn multiply(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(a * b))
}

/// Monadic `÷`: elementwise reciprocal.
///
/// # Errors
/// `DomainError` if any element is zero.
pub fn reciprocal(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| {
        if x == 0.0 {
            return Err(EvalError::DomainError { details: "reciprocal of zero".into() });
        }
        Ok(1.0 / x)
    })
}

/// Dyadic `÷`: elementwise division.
///
/// # Errors
/// `DomainError` if any divisor is zero, including `0÷0`.
///
/// # Example
/// ```
/// use apl360::{
///     error::EvalError,
///     interpreter::{evaluator::primitive::arithmetic::divide, settings::Settings, value::core::Value},
/// };
///
/// let settings = Settings::default();
///
/// let r = divide(&Value::Scalar(1.0), &Value::Scalar(4.0), &settings).unwrap();
/// assert_eq!(r, Value::Scalar(0.25));
///
/// let err = divide(&Value::Scalar(1.0), &Value::Scalar(0.0), &settings).unwrap_err();
/// assert!(matches!(err, EvalError::DomainError { .. }));
/// ```
pub fn divide(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| {
        if b == 0.0 {
            return Err(EvalError::DomainError { details: format!("division of {a} by zero") });
        }
        Ok(a / b)
    })
}

/// Monadic `⋆`: e raised to each element.
pub fn exponential(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| Ok(x.exp()))
}

/// Dyadic `⋆`: `a` raised to the power `b`.
///
/// Results that are not real (a negative base with a fractional exponent) or
/// not finite are rejected by the broadcasting layer as domain errors.
pub fn power(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(a.powf(b)))
}
