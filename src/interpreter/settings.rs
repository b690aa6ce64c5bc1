/// Default number of significant digits shown for a number.
pub const DEFAULT_PRINT_PRECISION: usize = 10;
/// Default relative tolerance used by `=` and `|`.
pub const DEFAULT_COMPARISON_TOLERANCE: f64 = 1e-13;

/// Session-wide evaluation and display settings.
///
/// A `Settings` value is created once per session (from the command line in
/// the binary) and passed by reference into every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Significant digits used when displaying numbers (1 to 17).
    pub print_precision:      usize,
    /// Display negative numbers with APL's `¯` instead of `-`.
    pub high_minus:           bool,
    /// Relative tolerance for tolerant equality.
    pub comparison_tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { print_precision:      DEFAULT_PRINT_PRECISION,
               high_minus:           false,
               comparison_tolerance: DEFAULT_COMPARISON_TOLERANCE, }
    }
}

impl Settings {
    /// Returns `true` if `a` and `b` are equal within the comparison
    /// tolerance, relative to the larger magnitude.
    ///
    /// # Example
    /// ```
    /// use apl360::interpreter::settings::Settings;
    ///
    /// let settings = Settings::default();
    /// assert!(settings.tolerant_eq(0.1 + 0.2, 0.3));
    /// assert!(!settings.tolerant_eq(1.0, 1.0001));
    /// ```
    #[must_use]
    pub fn tolerant_eq(&self, a: f64, b: f64) -> bool {
        #[allow(clippy::float_cmp)]
        let exact = a == b;
        exact || (a - b).abs() <= self.comparison_tolerance * a.abs().max(b.abs())
    }
}
