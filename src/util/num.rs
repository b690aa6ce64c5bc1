use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Longest vector a primitive is allowed to build (`⍳`, `⍴`).
///
/// Requests beyond this are domain errors rather than allocation failures.
pub const MAX_VECTOR_LENGTH: usize = 1 << 24;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns a `DomainError` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use apl360::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100).unwrap(), 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(EvalError::DomainError { details: format!("{value} is too large to be represented exactly") });
    }

    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns a `DomainError` for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use apl360::{error::EvalError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(-12.0).unwrap(), -12);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, EvalError::DomainError { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> EvalResult<i64> {
    if !value.is_finite() || value.abs() > MAX_SAFE_U64_INT as f64 {
        return Err(EvalError::DomainError { details: format!("{value} is not a representable integer") });
    }
    if value.fract() != 0.0 {
        return Err(EvalError::DomainError { details: format!("{value} is not an integer") });
    }
    Ok(value as i64)
}

/// Converts an `f64` to a length or count.
///
/// The value must be a non-negative integer no larger than
/// [`MAX_VECTOR_LENGTH`]. `what` names the quantity in the error message.
///
/// ## Errors
/// Returns a `DomainError` for negative, fractional, non-finite or oversized
/// values.
///
/// ## Example
/// ```
/// use apl360::{error::EvalError, util::num::f64_to_length_checked};
///
/// assert_eq!(f64_to_length_checked(5.0, "length").unwrap(), 5);
///
/// let err = f64_to_length_checked(-1.0, "length").unwrap_err();
/// assert_eq!(err,
///            EvalError::DomainError { details: "length must be a non-negative integer, found -1".into() });
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_length_checked(value: f64, what: &str) -> EvalResult<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(EvalError::DomainError { details: format!("{what} must be a non-negative integer, found {value}") });
    }
    if value > MAX_VECTOR_LENGTH as f64 {
        return Err(EvalError::DomainError { details: format!("{what} {value} exceeds the limit of {MAX_VECTOR_LENGTH}") });
    }
    Ok(value as usize)
}
