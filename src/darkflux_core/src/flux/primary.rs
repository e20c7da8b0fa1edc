use log::debug;
use std::f64::consts::LN_10;

use super::channels::{allowed_channels, channel_column};
use super::Parameter;
use crate::errors::{DmResult, Error};
use crate::interp::{GridAxis, InterpOptions, InterpScale, RegularGridInterpolator};
use crate::io::FluxTable;
use crate::units::Quantity;

/// Column of the tabulated spectra containing the dark matter mass in GeV.
pub const MASS_COLUMN: &str = "mDM";

/// Column of the tabulated spectra containing log10(x), where x = E / mDM.
pub const LOG10X_COLUMN: &str = "Log[10,x]";

/// Gamma-ray yield per annihilation (or decay) of a dark matter particle.
///
/// Based on the precomputed spectra of Cirelli et al. (2011), the PPPC 4 DM ID.
/// The tabulated dN/dlog10(x) of a single channel are interpolated linearly in
/// log10(x) and in log(mass), so any mass within the tabulated range may be used.
/// Energies outside of the tabulated x range have a yield of exactly zero.
///
/// References:
/// <https://ui.adsabs.harvard.edu/abs/2011JCAP...03..051C>
/// <http://www.marcocirelli.net/PPPC4DMID.html>
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryFlux {
    channel: String,

    /// Dark matter mass in GeV, bounded by the tabulated masses.
    mass: Parameter,

    /// Axes are (log10x, mass).
    interpolator: RegularGridInterpolator,
}

impl PrimaryFlux {
    /// Model type name followed by its alias.
    pub const TAG: [&'static str; 2] = ["PrimaryFlux", "dm-pf"];

    /// Construct the yield of a channel for a dark matter mass, reading the table from
    /// the data directory.
    ///
    /// # Arguments
    ///
    /// * `mass` - Dark matter particle mass as rest mass energy.
    /// * `channel` - Channel name, see [`PrimaryFlux::allowed_channels`].
    pub fn new(mass: &Quantity, channel: &str) -> DmResult<Self> {
        let table = FluxTable::load_default()?;
        PrimaryFlux::from_table(&table, mass, channel)
    }

    /// Construct the yield of a channel for a dark matter mass from a loaded table.
    pub fn from_table(table: &FluxTable, mass: &Quantity, channel: &str) -> DmResult<Self> {
        let column = channel_column(channel)?;
        let grid = table.grid(LOG10X_COLUMN, MASS_COLUMN, column)?;

        let log10x_axis = GridAxis::from_nodes("log10x", grid.row_nodes, InterpScale::Lin)?;
        let mass_axis = GridAxis::from_nodes("mass", grid.col_nodes, InterpScale::Log)?;

        let mass_param = Parameter::new("mass", mass_axis.min(), "GeV")
            .with_bounds(mass_axis.min(), mass_axis.max())?
            .with_interp(InterpScale::Log)
            .freeze();

        debug!(
            "Building '{}' yields over {} log10x and {} mass nodes",
            channel,
            log10x_axis.len(),
            mass_axis.len()
        );

        let options = InterpOptions {
            extrapolate: true,
            fill_value: Some(0.0),
            values_scale: InterpScale::Lin,
        };
        let interpolator =
            RegularGridInterpolator::new([log10x_axis, mass_axis], grid.values, options)?;

        let mut flux = PrimaryFlux {
            channel: channel.to_string(),
            mass: mass_param,
            interpolator,
        };
        flux.set_mass(mass)?;
        Ok(flux)
    }

    /// List of allowed channels.
    pub fn allowed_channels() -> Vec<&'static str> {
        allowed_channels()
    }

    /// Channel name.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Dark matter mass in GeV.
    pub fn mass(&self) -> Quantity {
        Quantity::gev(self.mass.value())
    }

    /// The bounded mass parameter.
    pub fn mass_parameter(&self) -> &Parameter {
        &self.mass
    }

    /// Smallest and largest tabulated masses.
    pub fn mass_range(&self) -> (Quantity, Quantity) {
        let axis = &self.interpolator.axes()[1];
        (Quantity::gev(axis.min()), Quantity::gev(axis.max()))
    }

    /// Change the dark matter mass.
    ///
    /// The mass must be an energy within the tabulated mass range, otherwise an error is
    /// returned and the mass is left unchanged.
    pub fn set_mass(&mut self, mass: &Quantity) -> DmResult<()> {
        let value = mass.to_gev()?;
        if !self.mass.contains(value) {
            let (min, max) = self.mass_range();
            return Err(Error::MassOutOfBounds {
                mass: mass.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        self.mass.set_value(value)
    }

    /// Differential yield dN/dE at the given energy.
    ///
    /// The tabulated dN/dlog10(x) is converted using dlog10(x)/dE = 1 / (E ln(10)).
    /// The result has the inverse unit of the provided energy.
    pub fn evaluate(&self, energy: &Quantity) -> DmResult<Quantity> {
        let energy_gev = energy.to_gev()?;
        if !energy_gev.is_finite() || energy_gev <= 0.0 {
            return Err(Error::ValueError(format!(
                "Energy must be positive and finite, found {}",
                energy
            )));
        }
        let mass = self.mass.value();
        let log10x = (energy_gev / mass).log10();
        let dn_dlog10x = self.interpolator.interpolate([log10x, mass])?;
        Ok(Quantity::new(
            dn_dlog10x / (energy.value() * LN_10),
            energy.unit().powi(-1),
        ))
    }

    /// Differential yield at many energies.
    pub fn evaluate_many(&self, energies: &[Quantity]) -> DmResult<Vec<Quantity>> {
        energies.iter().map(|e| self.evaluate(e)).collect()
    }
}
