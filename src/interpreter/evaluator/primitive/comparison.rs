use crate::interpreter::{
    evaluator::{core::EvalResult, primitive::broadcast::map_dyadic},
    settings::Settings,
    value::core::Value,
};

/// Dyadic `=`: `1` where the elements are equal within the comparison
/// tolerance, `0` elsewhere.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::comparison::equal, settings::Settings, value::core::Value,
/// };
///
/// let r = equal(&Value::Scalar(2.0), &Value::from(vec![1.0, 2.0, 3.0]), &Settings::default()).unwrap();
/// assert_eq!(r, Value::from(vec![0.0, 1.0, 0.0]));
/// ```
pub fn equal(left: &Value, right: &Value, settings: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(if settings.tolerant_eq(a, b) { 1.0 } else { 0.0 }))
}
