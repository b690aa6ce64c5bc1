use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        primitive::broadcast::{map_dyadic, map_monadic},
    },
    settings::Settings,
    value::core::Value,
};

/// Monadic `|`: absolute value of each element.
pub fn magnitude(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| Ok(x.abs()))
}

/// Dyadic `|`: `a|b` is the remainder of `b` divided by `a`.
///
/// The result takes the sign of `a`, and `0|b` is `b`. A remainder that is
/// within the comparison tolerance of zero or of `a` is reported as zero, so
/// `0.1|0.3` is `0` rather than a rounding artefact.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::residue::residue, settings::Settings, value::core::Value,
/// };
///
/// let settings = Settings::default();
///
/// let r = residue(&Value::Scalar(3.0), &Value::from(vec![7.0, -7.0, 9.0]), &settings).unwrap();
/// assert_eq!(r, Value::from(vec![1.0, 2.0, 0.0]));
///
/// let r = residue(&Value::Scalar(0.0), &Value::Scalar(5.0), &settings).unwrap();
/// assert_eq!(r, Value::Scalar(5.0));
/// ```
pub fn residue(left: &Value, right: &Value, settings: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| {
        if a == 0.0 {
            return Ok(b);
        }
        let r = b - a * (b / a).floor();
        if settings.tolerant_eq(r, a) || settings.tolerant_eq(r + b, b) {
            Ok(0.0)
        } else {
            Ok(r)
        }
    })
}
