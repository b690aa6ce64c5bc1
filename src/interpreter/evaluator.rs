/// The right-to-left reducer.
///
/// Holds `Evaluator`, which walks a line's `TokenStream` from the right,
/// resolving names against the environment and dispatching each function
/// monadically or dyadically depending on what stands to its left.
///
/// # Responsibilities
/// - Forms numeric strands, looks up names and recurses into parentheses.
/// - Recognizes leading `name ←` assignments, right-associatively.
/// - Reports misplaced tokens with the column they occur at.
pub mod core;
/// Bracket indexing, `v[i]`.
pub mod index;
/// The primitive functions.
///
/// Implements every glyph's monadic and dyadic meaning over scalars and
/// vectors, the broadcasting rules they share, and the reduction operator.
/// All of them are reached through the dispatch table in
/// `primitive::core`.
pub mod primitive;
