//! PHP literal rendering.
//!
//! Output matches what PHP's `var_export($value, true)` prints, so the
//! generated files are byte-compatible with ones written by the runtime's
//! own config handlers.

mod array;
mod value;

pub use array::PhpArray;
pub use value::{PhpValue, quote};
