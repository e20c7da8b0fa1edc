//! # Interpolation
//! Interpolation of values tabulated on a regular grid.
//!
//! Each [`GridAxis`] defines whether its nodes are linearly or logarithmically spaced,
//! interpolation is then linear in the scaled coordinates. The
//! [`RegularGridInterpolator`] combines two such axes with a matrix of values.
//!
mod axis;
mod grid;

pub use axis::{GridAxis, InterpScale};
pub use grid::{InterpOptions, RegularGridInterpolator};
