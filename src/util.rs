/// Numeric conversion helpers.
///
/// Safe conversions between `f64` and the integer types used for lengths and
/// indices. Every function returns a `Result` that is `Ok` only when the
/// conversion is exact; otherwise a `DomainError` describes the problem.
pub mod num;
