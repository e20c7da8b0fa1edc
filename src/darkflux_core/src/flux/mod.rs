//! # Flux
//! Gamma-ray flux from dark matter annihilation and decay.
//!
//! There are a few models contained here:
//! [`PrimaryFlux`] - Photon yield dN/dE of a single channel for a dark matter mass.
//! [`DarkMatterAnnihilationSpectralModel`] - Flux from pairs of annihilating particles.
//! [`DarkMatterDecaySpectralModel`] - Flux from decaying particles.
//!
//! Models are serialized through [`ModelDocument`].
//!
mod channels;
mod models;
mod parameter;
mod primary;
mod record;

#[cfg(test)]
mod testing;

pub use channels::{allowed_channels, channel_column, CHANNEL_REGISTRY};
pub use models::*;
pub use parameter::Parameter;
pub use primary::{PrimaryFlux, LOG10X_COLUMN, MASS_COLUMN};
pub use record::{ModelDocument, SpectralRecord};
