//! # Units
//! Physical units and quantities.
//!
//! Only the handful of units which appear in dark matter spectra are supported, a
//! [`Unit`] is a product of known symbols raised to integer powers. Conversions are
//! allowed between units with the same [`Dimensions`].
//!
//! ```
//!     use darkflux_core::units::{Quantity, Unit};
//!     let mass: Quantity = "5000.0 GeV".parse().unwrap();
//!     let tev: Unit = "TeV".parse().unwrap();
//!     assert!((mass.to_value(&tev).unwrap() - 5.0).abs() < 1e-12);
//! ```
//!
mod quantity;
mod unit;

pub use quantity::Quantity;
pub use unit::{Dimensions, Unit};
