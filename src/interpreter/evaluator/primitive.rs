/// Dispatch table and the `Function` type the evaluator applies.
pub mod core;

/// Elementwise mapping with scalar extension and shape checks.
pub mod broadcast;

/// `+ − × ÷ ⋆`
pub mod arithmetic;
/// `=`
pub mod comparison;
/// `⍳`
pub mod iota;
/// `⍟`
pub mod log;
/// `⌈ ⌊`
pub mod min_max;
/// `f/`
pub mod reduce;
/// `|`
pub mod residue;
/// `⍴ ,`
pub mod structural;
