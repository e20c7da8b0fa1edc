//! # darkflux Core
//! Gamma-ray spectra of dark matter annihilation and decay.
//!
//! The photon yields of the PPPC 4 DM ID tables are interpolated in dark matter mass
//! and energy, and combined with a J-Factor to give the differential flux expected
//! from a dark matter source.
//!
//! The yield table is not distributed with this crate, see [`data`] for where it is
//! expected to be found.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod constants;
pub mod data;
pub mod errors;
pub mod flux;
pub mod interp;
pub mod io;
pub mod units;

/// Common useful imports
pub mod prelude {
    pub use crate::errors::{DmResult, Error};
    pub use crate::flux::{
        Annihilation, DarkMatterAnnihilationSpectralModel, DarkMatterDecaySpectralModel,
        DarkMatterProcess, Decay, ModelDocument, Parameter, PrimaryFlux, SpectralModel,
    };
    pub use crate::io::{FileIO, FluxTable};
    pub use crate::units::{Quantity, Unit};
}
