//! # Constants
//! Constant values, both physical and unit conversions.
//!
mod conversions;
mod universal;

pub use conversions::*;
pub use universal::*;
