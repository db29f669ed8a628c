#![forbid(unsafe_code)]

//! Tree configuration.
//!
//! [`TreeParams`] carries everything producer and verifier must agree on
//! besides the hash function itself: the leaf encoding descriptor, how much a
//! loaded blob is re-checked, and an upper bound on the leaf count. Consumers
//! are expected to go through [`TreeParamsBuilder`], which starts from a
//! [`BuiltinProfile`] and validates on `build`.

mod builder;
mod types;
mod validate;

pub use builder::{BuiltinProfile, TreeParamsBuilder};
pub use types::{LoadMode, TreeParams, DUMP_FORMAT};
pub use validate::{validate, ParamsError, MAX_LEAF_FIELDS};
