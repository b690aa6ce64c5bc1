use crate::{
    interpreter::{settings::Settings, value::core::Value},
    util::num::MAX_SAFE_U64_INT,
};

/// Smallest decimal exponent still printed in positional notation.
const MIN_POSITIONAL_EXPONENT: i32 = -6;

/// A value paired with the settings used to display it.
///
/// Created by [`Value::display_with`].
pub struct Formatted<'a> {
    pub(crate) value:    &'a Value,
    pub(crate) settings: &'a Settings,
}

impl std::fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, number) in self.value.as_slice().iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", format_number(*number, self.settings))?;
        }
        Ok(())
    }
}

/// Formats a single number the way the session displays it.
///
/// Integers up to `2^53` in magnitude are exact in an `f64` and are always
/// written out in full. Other numbers show at most `print_precision`
/// significant digits, with trailing zeros and a trailing decimal point
/// dropped, and magnitudes outside the positional range switch to `E`
/// notation. Negative numbers use `¯` when `high_minus` is set.
///
/// # Example
/// ```
/// use apl360::interpreter::{settings::Settings, value::format::format_number};
///
/// let settings = Settings::default();
///
/// assert_eq!(format_number(14.0, &settings), "14");
/// assert_eq!(format_number(-0.25, &settings), "-0.25");
/// assert_eq!(format_number(2.0_f64.sqrt(), &settings), "1.414213562");
/// assert_eq!(format_number(12_345_678_901.0, &settings), "12345678901");
/// assert_eq!(format_number(1e20, &settings), "1E20");
/// assert_eq!(format_number(1.5e11, &settings), "150000000000");
/// assert_eq!(format_number(123_456_789_012.5, &settings), "1.23456789E11");
/// assert_eq!(format_number(-0.0, &settings), "0");
/// ```
#[must_use]
pub fn format_number(number: f64, settings: &Settings) -> String {
    if number == 0.0 {
        return "0".to_string();
    }

    let minus = if settings.high_minus { "¯" } else { "-" };
    let sign = if number < 0.0 { minus } else { "" };
    let magnitude = number.abs();

    #[allow(clippy::cast_precision_loss)]
    let exact_integer = magnitude.fract() == 0.0 && magnitude <= MAX_SAFE_U64_INT as f64;
    if exact_integer {
        return format!("{sign}{magnitude:.0}");
    }

    let precision = settings.print_precision.clamp(1, 17);

    // Rounding to the requested digits first fixes the exponent, so that
    // 9.99999999999 is laid out as 10 rather than 9.999999999.
    let scientific = format!("{magnitude:.*e}", precision - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = i32::try_from(precision).unwrap_or(17);

    if (MIN_POSITIONAL_EXPONENT..digits).contains(&exponent) {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        let positional = format!("{magnitude:.decimals$}");
        format!("{sign}{}", trim_fraction(&positional))
    } else {
        let exponent_sign = if exponent < 0 { minus } else { "" };
        format!("{sign}{}E{exponent_sign}{}",
                trim_fraction(mantissa),
                exponent.unsigned_abs())
    }
}

/// Removes trailing zeros of a fractional part, and the point if nothing is
/// left after it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
