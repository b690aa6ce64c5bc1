use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            primitive::{
                arithmetic, comparison, iota, log, min_max, reduce::reduce, residue, structural,
            },
        },
        glyph::Glyph,
        settings::Settings,
        value::core::Value,
    },
};

/// Signature of a monadic primitive.
pub type MonadicFn = fn(&Value, &Settings) -> EvalResult<Value>;
/// Signature of a dyadic primitive: left argument, right argument.
pub type DyadicFn = fn(&Value, &Value, &Settings) -> EvalResult<Value>;

/// Defines the primitive table.
///
/// Each entry provides:
/// - the glyph it implements and a short name,
/// - the optional monadic and dyadic implementations,
/// - a one-line description of each form, shown by `help`.
///
/// The macro produces `PrimitiveDef` and `PRIMITIVE_TABLE`.
macro_rules! primitive_functions {
    (
        $(
            $glyph:ident => {
                name: $name:literal,
                monadic: $monadic:expr,
                dyadic: $dyadic:expr,
                describe: ($monadic_help:expr, $dyadic_help:expr) $(,)?
            }
        ),* $(,)?
    ) => {
        /// One row of the primitive table.
        pub struct PrimitiveDef {
            /// The glyph this row implements.
            pub glyph:        Glyph,
            /// Short English name.
            pub name:         &'static str,
            /// Monadic implementation, if the glyph has one.
            pub monadic:      Option<MonadicFn>,
            /// Dyadic implementation, if the glyph has one.
            pub dyadic:       Option<DyadicFn>,
            /// Description of the monadic form.
            pub monadic_help: Option<&'static str>,
            /// Description of the dyadic form.
            pub dyadic_help:  Option<&'static str>,
        }

        /// Every primitive, in `help` order.
        pub static PRIMITIVE_TABLE: &[PrimitiveDef] = &[
            $(
                PrimitiveDef { glyph:        Glyph::$glyph,
                               name:         $name,
                               monadic:      $monadic,
                               dyadic:       $dyadic,
                               monadic_help: $monadic_help,
                               dyadic_help:  $dyadic_help, },
            )*
        ];
    };
}

primitive_functions! {
    Plus => {
        name: "plus",
        monadic: Some(arithmetic::conjugate),
        dyadic: Some(arithmetic::add),
        describe: (Some("identity: the argument unchanged"), Some("addition")),
    },
    Minus => {
        name: "minus",
        monadic: Some(arithmetic::negate),
        dyadic: Some(arithmetic::subtract),
        describe: (Some("negation"), Some("subtraction")),
    },
    Times => {
        name: "times",
        monadic: Some(arithmetic::signum),
        dyadic: Some(arithmetic::multiply),
        describe: (Some("sign: ¯1, 0 or 1"), Some("multiplication")),
    },
    Divide => {
        name: "divide",
        monadic: Some(arithmetic::reciprocal),
        dyadic: Some(arithmetic::divide),
        describe: (Some("reciprocal: 1÷x"), Some("division")),
    },
    Power => {
        name: "power",
        monadic: Some(arithmetic::exponential),
        dyadic: Some(arithmetic::power),
        describe: (Some("exponential: e to the power x"), Some("power: a to the power b")),
    },
    Log => {
        name: "log",
        monadic: Some(log::natural_log),
        dyadic: Some(log::log_base),
        describe: (Some("natural logarithm"), Some("logarithm of b to base a")),
    },
    Ceiling => {
        name: "ceiling",
        monadic: Some(min_max::ceiling),
        dyadic: Some(min_max::maximum),
        describe: (Some("ceiling: smallest integer not below x"), Some("maximum")),
    },
    Floor => {
        name: "floor",
        monadic: Some(min_max::floor),
        dyadic: Some(min_max::minimum),
        describe: (Some("floor: largest integer not above x"), Some("minimum")),
    },
    Residue => {
        name: "residue",
        monadic: Some(residue::magnitude),
        dyadic: Some(residue::residue),
        describe: (Some("magnitude: absolute value"), Some("residue: b modulo a")),
    },
    Iota => {
        name: "iota",
        monadic: Some(iota::index_generator),
        dyadic: None,
        describe: (Some("index generator: 1 2 … n"), None),
    },
    Rho => {
        name: "rho",
        monadic: Some(structural::shape),
        dyadic: Some(structural::reshape),
        describe: (Some("shape: length of a vector, empty for a scalar"), Some("reshape: a items taken cyclically from b")),
    },
    Catenate => {
        name: "comma",
        monadic: Some(structural::ravel),
        dyadic: Some(structural::catenate),
        describe: (Some("ravel: the argument as a vector"), Some("catenate: join a and b")),
    },
    Equal => {
        name: "equal",
        monadic: None,
        dyadic: Some(comparison::equal),
        describe: (None, Some("equality: 1 where a equals b, else 0")),
    },
}

impl PrimitiveDef {
    /// Looks up the table row of a glyph.
    #[must_use]
    pub fn of(glyph: Glyph) -> Option<&'static Self> {
        PRIMITIVE_TABLE.iter().find(|def| def.glyph == glyph)
    }
}

/// A function found in an expression: a primitive, or a primitive modified
/// by the reduction operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// A glyph used on its own, e.g. `+`.
    Primitive(Glyph),
    /// A glyph followed by `/`, e.g. `+/`.
    Reduce(Glyph),
}

impl Function {
    /// Applies the function to a single (right) argument.
    ///
    /// # Errors
    /// `NoMonadicForm` if the glyph has no monadic meaning, or whatever the
    /// implementation raises.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::{
    ///     evaluator::primitive::core::Function, glyph::Glyph, settings::Settings,
    ///     value::core::Value,
    /// };
    ///
    /// let settings = Settings::default();
    /// let v = Function::Primitive(Glyph::Iota).apply_monadic(&Value::Scalar(3.0), &settings)
    ///                                         .unwrap();
    /// assert_eq!(v, Value::from(vec![1.0, 2.0, 3.0]));
    ///
    /// let sum = Function::Reduce(Glyph::Plus).apply_monadic(&v, &settings).unwrap();
    /// assert_eq!(sum, Value::Scalar(6.0));
    /// ```
    pub fn apply_monadic(self, right: &Value, settings: &Settings) -> EvalResult<Value> {
        match self {
            Self::Primitive(glyph) => {
                let monadic = PrimitiveDef::of(glyph).and_then(|def| def.monadic)
                                                     .ok_or_else(|| EvalError::NoMonadicForm { function: self.to_string() })?;
                monadic(right, settings)
            },
            Self::Reduce(glyph) => reduce(glyph, right, settings),
        }
    }

    /// Applies the function to a left and a right argument.
    ///
    /// # Errors
    /// `NoDyadicForm` if the glyph has no dyadic meaning (reductions never
    /// do), or whatever the implementation raises.
    pub fn apply_dyadic(self,
                        left: &Value,
                        right: &Value,
                        settings: &Settings)
                        -> EvalResult<Value> {
        let dyadic = match self {
            Self::Primitive(glyph) => PrimitiveDef::of(glyph).and_then(|def| def.dyadic),
            Self::Reduce(_) => None,
        };
        let dyadic = dyadic.ok_or_else(|| EvalError::NoDyadicForm { function: self.to_string() })?;
        dyadic(left, right, settings)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(glyph) => write!(f, "{glyph}"),
            Self::Reduce(glyph) => write!(f, "{glyph}/"),
        }
    }
}
