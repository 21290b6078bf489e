//! Core traits, wire primitives, constants, and error types.

pub mod constants;
mod error;
mod traits;
pub mod wire;

pub use error::*;
pub use traits::*;
