use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        primitive::broadcast::{map_dyadic, map_monadic},
    },
    settings::Settings,
    value::core::Value,
};

/// Monadic `⌈`: the smallest integer not below each element.
pub fn ceiling(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| Ok(x.ceil()))
}

/// Monadic `⌊`: the largest integer not above each element.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::min_max::floor, settings::Settings, value::core::Value,
/// };
///
/// let r = floor(&Value::from(vec![2.7, -2.2]), &Settings::default()).unwrap();
/// assert_eq!(r, Value::from(vec![2.0, -3.0]));
/// ```
pub fn floor(value: &Value, _: &Settings) -> EvalResult<Value> {
    map_monadic(value, |x| Ok(x.floor()))
}

/// Dyadic `⌈`: the larger of each pair.
pub fn maximum(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(a.max(b)))
}

/// Dyadic `⌊`: the smaller of each pair.
pub fn minimum(left: &Value, right: &Value, _: &Settings) -> EvalResult<Value> {
    map_dyadic(left, right, |a, b| Ok(a.min(b)))
}
