/// The `Value` type itself: scalars and vectors of numbers, with accessors
/// used by the primitives.
pub mod core;
/// Display formatting.
///
/// Renders numbers with a bounded number of significant digits and optional
/// APL high minus, and vectors as space-separated elements on one line.
pub mod format;
