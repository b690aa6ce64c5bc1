/// The token arena and bracket pairing.
///
/// Contains `TokenStream`, the single contiguous store of a line's tokens
/// that the evaluator indexes into, and `parse`, which builds it from source.
pub mod core;
