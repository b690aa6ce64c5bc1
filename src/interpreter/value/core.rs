use std::rc::Rc;

use crate::interpreter::{settings::Settings, value::format::Formatted};

/// Represents a runtime value in the interpreter.
///
/// A value is either a single number or a flat vector of numbers. Values are
/// never modified in place: every primitive builds a new one, and vectors are
/// reference counted so that copying a value out of the environment is cheap.
///
/// A vector of length one broadcasts like a scalar but keeps its shape, so
/// `,5` still displays and reports its shape as a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number.
    Scalar(f64),
    /// An ordered sequence of numbers, possibly empty.
    Vector(Rc<Vec<f64>>),
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl Value {
    /// The elements of the value; a scalar is viewed as a one-element slice.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Scalar(3.0).as_slice(), &[3.0]);
    /// assert_eq!(Value::from(vec![1.0, 2.0]).as_slice(), &[1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Scalar(x) => std::slice::from_ref(x),
            Self::Vector(v) => v,
        }
    }

    /// The single number held by a scalar or a one-element vector.
    ///
    /// Returns `None` for vectors of any other length.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(x) => Some(*x),
            Self::Vector(v) if v.len() == 1 => Some(v[0]),
            Self::Vector(_) => None,
        }
    }

    /// The length of a vector, or `None` for a scalar.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v.len()),
        }
    }

    /// Wraps the value for display with the given settings.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::{settings::Settings, value::core::Value};
    ///
    /// let settings = Settings { high_minus: true,
    ///                           ..Settings::default() };
    /// let v = Value::from(vec![-1.5, 2.0, 1.0 / 3.0]);
    ///
    /// assert_eq!(v.display_with(&settings).to_string(), "¯1.5 2 0.3333333333");
    /// ```
    #[must_use]
    pub const fn display_with<'a>(&'a self, settings: &'a Settings) -> Formatted<'a> {
        Formatted { value: self,
                    settings }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with(&Settings::default()))
    }
}
