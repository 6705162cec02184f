//! Prelude module for the gaian_date crate.
//!
//! Re-exports the derive_more macros used on the date types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
