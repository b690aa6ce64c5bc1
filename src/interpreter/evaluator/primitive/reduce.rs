use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, primitive::core::PrimitiveDef},
        glyph::Glyph,
        settings::Settings,
        value::core::Value,
    },
};

/// The value of `f/` over an empty vector, for the glyphs that have one.
const fn identity(glyph: Glyph) -> Option<f64> {
    match glyph {
        Glyph::Plus | Glyph::Minus | Glyph::Residue => Some(0.0),
        Glyph::Times | Glyph::Divide | Glyph::Power | Glyph::Equal => Some(1.0),
        Glyph::Ceiling => Some(f64::MIN),
        Glyph::Floor => Some(f64::MAX),
        Glyph::Log | Glyph::Iota | Glyph::Rho | Glyph::Catenate => None,
    }
}

/// Applies the reduction `glyph/` to a value.
///
/// The dyadic form of `glyph` is folded from the right, so `-/1 2 3` is
/// `1-(2-3)`, which is `2`. A scalar is returned unchanged and a one-element
/// vector gives its element.
///
/// # Errors
/// - `NoDyadicForm` if the glyph has no dyadic form.
/// - `DomainError` for an empty vector if the glyph has no identity element.
///
/// # Example
/// ```
/// use apl360::interpreter::{
///     evaluator::primitive::reduce::reduce, glyph::Glyph, settings::Settings, value::core::Value,
/// };
///
/// let settings = Settings::default();
///
/// let v = Value::from(vec![1.0, 2.0, 3.0]);
/// assert_eq!(reduce(Glyph::Minus, &v, &settings).unwrap(), Value::Scalar(2.0));
/// assert_eq!(reduce(Glyph::Ceiling, &v, &settings).unwrap(), Value::Scalar(3.0));
///
/// let empty = Value::from(Vec::new());
/// assert_eq!(reduce(Glyph::Times, &empty, &settings).unwrap(), Value::Scalar(1.0));
/// ```
pub fn reduce(glyph: Glyph, value: &Value, settings: &Settings) -> EvalResult<Value> {
    let dyadic = PrimitiveDef::of(glyph).and_then(|def| def.dyadic)
                                        .ok_or_else(|| EvalError::NoDyadicForm { function: format!("{glyph}/") })?;

    let items = match value {
        Value::Scalar(_) => return Ok(value.clone()),
        Value::Vector(items) => items,
    };

    let Some((last, rest)) = items.split_last() else {
        return identity(glyph).map(Value::Scalar)
                              .ok_or_else(|| EvalError::DomainError { details: format!("{glyph}/ of an empty vector has no identity") });
    };

    rest.iter()
        .rev()
        .try_fold(Value::Scalar(*last), |acc, x| dyadic(&Value::Scalar(*x), &acc, settings))
}
