/// Variable bindings.
///
/// Holds the mapping from names to values for a whole session, with staged
/// writes so that a line which fails leaves no bindings behind.
pub mod environment;
/// The evaluator module reduces token streams to values.
///
/// The evaluator scans a line from right to left, recursing into
/// parenthesized groups, and dispatches every glyph to its monadic or dyadic
/// implementation depending on whether an operand stands to its left.
///
/// # Responsibilities
/// - Right-to-left reduction of expressions, strands and groups.
/// - Assignment and variable lookup.
/// - The primitive function table and its broadcasting rules.
pub mod evaluator;
/// Primitive function symbols and their ASCII spellings.
pub mod glyph;
/// The lexer module tokenizes a line of input.
///
/// Built on `logos`. Produces numbers, glyphs, names, parentheses, brackets,
/// the assignment arrow and the reduction marker, each with its column.
///
/// # Responsibilities
/// - Recognise APL glyphs and their ASCII fallbacks.
/// - Fold a sign into a numeric literal (`¯3`, and `-3` where it cannot be a
///   subtraction).
/// - Report unrecognised characters with their position.
pub mod lexer;
/// The parser module turns tokens into a `TokenStream`.
///
/// There is no syntax tree: the stream stores every token once and records
/// which parenthesis or bracket closes which, so the evaluator can work on
/// index ranges.
pub mod parser;
/// Display and comparison settings shared by a session.
pub mod settings;
/// The value module defines the runtime data model.
///
/// # Responsibilities
/// - Defines the `Value` enum (scalar or vector).
/// - Formats values for display.
pub mod value;
