use std::f64::consts::PI;
use std::fmt::Debug;

use super::{ModelDocument, Parameter, PrimaryFlux, SpectralRecord};
use crate::constants::{
    INTEGRATION_POINTS_PER_DECADE, K_DIRAC, K_MAJORANA, LIFETIME_AGE_OF_UNIVERSE,
    THERMAL_RELIC_CROSS_SECTION,
};
use crate::errors::{DmResult, Error};
use crate::io::FluxTable;
use crate::units::{Quantity, Unit};

/// A differential gamma-ray flux as a function of energy.
pub trait SpectralModel: Sized {
    /// Differential flux at the energy for the provided value of the scale parameter.
    fn evaluate(&self, energy: &Quantity, scale: f64) -> DmResult<Quantity>;

    /// The scale parameter of the model.
    fn scale(&self) -> &Parameter;

    /// Serialize the model.
    fn to_dict(&self) -> ModelDocument;

    /// Construct the model from its serialized form, using an already loaded table.
    fn from_dict_with_table(doc: &ModelDocument, table: &FluxTable) -> DmResult<Self>;

    /// Construct the model from its serialized form, reading the table from the data
    /// directory.
    fn from_dict(doc: &ModelDocument) -> DmResult<Self> {
        Self::from_dict_with_table(doc, &FluxTable::load_default()?)
    }

    /// Differential flux at the energy using the current scale parameter.
    fn flux(&self, energy: &Quantity) -> DmResult<Quantity> {
        self.evaluate(energy, self.scale().value())
    }

    /// Differential flux at many energies.
    fn evaluate_many(&self, energies: &[Quantity], scale: f64) -> DmResult<Vec<Quantity>> {
        energies.iter().map(|e| self.evaluate(e, scale)).collect()
    }

    /// Flux integrated between two energies.
    fn integral(&self, energy_min: &Quantity, energy_max: &Quantity) -> DmResult<Quantity> {
        integrate_moment(self, energy_min, energy_max, 0)
    }

    /// Energy flux, the flux weighted by energy, integrated between two energies.
    fn energy_flux(&self, energy_min: &Quantity, energy_max: &Quantity) -> DmResult<Quantity> {
        integrate_moment(self, energy_min, energy_max, 1)
    }
}

/// Integrate E^power * flux(E) between two energies.
///
/// The trapezoid rule is applied in log(E) on log spaced energies, so that the
/// integrand is flux(E) * E^(power + 1). Energies are integrated in GeV.
fn integrate_moment<M: SpectralModel>(
    model: &M,
    energy_min: &Quantity,
    energy_max: &Quantity,
    power: i32,
) -> DmResult<Quantity> {
    let low = energy_min.to_gev()?;
    let high = energy_max.to_gev()?;
    if !(low > 0.0 && high > low && high.is_finite()) {
        return Err(Error::ValueError(format!(
            "Integration requires 0 < energy_min < energy_max, found {} and {}",
            energy_min, energy_max
        )));
    }

    let n_steps = ((high / low).log10() * INTEGRATION_POINTS_PER_DECADE)
        .ceil()
        .max(1.0) as usize;
    let step = (high / low).ln() / n_steps as f64;

    let flux_unit = model.flux(&Quantity::gev(low))?.unit().clone();
    let integrand = (0..=n_steps)
        .map(|idx| {
            let energy = low * (step * idx as f64).exp();
            let flux = model.flux(&Quantity::gev(energy))?;
            Ok(flux.to_value(&flux_unit)? * energy.powi(power + 1))
        })
        .collect::<DmResult<Vec<f64>>>()?;

    let total: f64 = integrand
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]) * step)
        .sum();
    Ok(Quantity::new(total, &flux_unit * &Unit::gev().powi(power + 1)))
}

/// The particle physics process producing the photons.
///
/// The flux of both processes has the form
/// `scale * jfactor * rate * dN/dE / (4 pi mass^MASS_POWER)`.
pub trait DarkMatterProcess: Debug + Clone + PartialEq {
    /// Model type name followed by its alias.
    const TAG: [&'static str; 2];

    /// Power of the dark matter mass in the denominator of the flux.
    const MASS_POWER: i32;

    /// Rate of the process per particle (or particle pair).
    fn rate(&self) -> DmResult<Quantity>;

    /// Particle multiplicity factor, only defined for annihilation.
    fn multiplicity(&self) -> Option<u32>;

    /// Construct the process from a serialized multiplicity factor.
    fn from_multiplicity(k: Option<u32>) -> DmResult<Self>;
}

/// Annihilation of two dark matter particles with the thermal relic cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annihilation {
    k: u32,
}

impl Annihilation {
    /// Annihilation with multiplicity k, 2 for Majorana and 4 for Dirac particles.
    pub fn new(k: u32) -> DmResult<Self> {
        if k == 0 {
            return Err(Error::ValueError(
                "Particle multiplicity k must be positive.".into(),
            ));
        }
        Ok(Annihilation { k })
    }

    /// Self-conjugate particles.
    pub fn majorana() -> Self {
        Annihilation { k: K_MAJORANA }
    }

    /// Particles which are not their own antiparticle.
    pub fn dirac() -> Self {
        Annihilation { k: K_DIRAC }
    }

    /// Particle multiplicity.
    pub fn k(&self) -> u32 {
        self.k
    }
}

impl Default for Annihilation {
    fn default() -> Self {
        Annihilation::majorana()
    }
}

impl DarkMatterProcess for Annihilation {
    const TAG: [&'static str; 2] = ["DarkMatterAnnihilationSpectralModel", "dm-annihilation"];
    const MASS_POWER: i32 = 2;

    fn rate(&self) -> DmResult<Quantity> {
        let sigma_v = Quantity::new(
            THERMAL_RELIC_CROSS_SECTION,
            Unit::from_terms(&[("cm", 3), ("s", -1)])?,
        );
        Ok(sigma_v / f64::from(self.k))
    }

    fn multiplicity(&self) -> Option<u32> {
        Some(self.k)
    }

    fn from_multiplicity(k: Option<u32>) -> DmResult<Self> {
        Annihilation::new(k.unwrap_or(K_MAJORANA))
    }
}

/// Decay of a single dark matter particle.
///
/// The lifetime is fixed to the age of the universe, this is a modeling
/// simplification and not a measured lifetime. Fluxes for other lifetimes follow
/// from the scale parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decay;

impl DarkMatterProcess for Decay {
    const TAG: [&'static str; 2] = ["DarkMatterDecaySpectralModel", "dm-decay"];
    const MASS_POWER: i32 = 1;

    fn rate(&self) -> DmResult<Quantity> {
        Ok(Quantity::new(
            LIFETIME_AGE_OF_UNIVERSE.recip(),
            Unit::from_terms(&[("s", -1)])?,
        ))
    }

    fn multiplicity(&self) -> Option<u32> {
        None
    }

    fn from_multiplicity(k: Option<u32>) -> DmResult<Self> {
        match k {
            None => Ok(Decay),
            Some(k) => Err(Error::ValueError(format!(
                "Decay models do not have a particle multiplicity, found k={}.",
                k
            ))),
        }
    }
}

/// Dark matter spectral model.
///
/// The gamma-ray flux is computed as follows:
///
/// dphi/dE = scale * J * rate * dN/dE(E (1 + z)) / (4 pi mDM^n)
///
/// Where for annihilation rate = <sigma v> / k with n = 2, and for decay
/// rate = 1 / tau with n = 1. See [`Annihilation`] and [`Decay`].
///
/// ```no_run
///     use darkflux_core::prelude::*;
///
///     let mass = Quantity::gev(5000.0);
///     let jfactor: Quantity = "3.41e19 GeV2 cm-5".parse().unwrap();
///     let model = DarkMatterAnnihilationSpectralModel::new(&mass, "b")
///         .unwrap()
///         .with_jfactor(jfactor);
///     let flux = model.flux(&Quantity::gev(100.0)).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DarkMatterSpectralModel<P: DarkMatterProcess> {
    mass: Quantity,
    channel: String,
    jfactor: Quantity,
    z: f64,
    scale: Parameter,
    process: P,
    primary_flux: PrimaryFlux,
}

/// Flux from dark matter annihilation.
pub type DarkMatterAnnihilationSpectralModel = DarkMatterSpectralModel<Annihilation>;

/// Flux from dark matter decay.
pub type DarkMatterDecaySpectralModel = DarkMatterSpectralModel<Decay>;

impl<P: DarkMatterProcess + Default> DarkMatterSpectralModel<P> {
    /// Construct a model with scale 1, a dimensionless J-Factor of 1, and no redshift.
    ///
    /// The yield table is read from the data directory.
    pub fn new(mass: &Quantity, channel: &str) -> DmResult<Self> {
        DarkMatterSpectralModel::with_process(mass, channel, P::default())
    }
}

impl<P: DarkMatterProcess> DarkMatterSpectralModel<P> {
    /// Construct a model for a specific process, reading the yield table from the data
    /// directory.
    pub fn with_process(mass: &Quantity, channel: &str, process: P) -> DmResult<Self> {
        let table = FluxTable::load_default()?;
        DarkMatterSpectralModel::from_table(&table, mass, channel, process)
    }

    /// Construct a model for a specific process from a loaded table.
    pub fn from_table(
        table: &FluxTable,
        mass: &Quantity,
        channel: &str,
        process: P,
    ) -> DmResult<Self> {
        let primary_flux = PrimaryFlux::from_table(table, mass, channel)?;
        Ok(DarkMatterSpectralModel {
            mass: mass.clone(),
            channel: channel.to_string(),
            jfactor: Quantity::dimensionless(1.0),
            z: 0.0,
            scale: Parameter::scale(1.0),
            process,
            primary_flux,
        })
    }

    /// Set the value of the scale parameter.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Parameter::scale(scale);
        self
    }

    /// Set the J-Factor.
    ///
    /// This is the integrated J-Factor when the spatial model is a point source.
    pub fn with_jfactor(mut self, jfactor: Quantity) -> Self {
        self.jfactor = jfactor;
        self
    }

    /// Set the redshift of the source.
    pub fn with_redshift(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Dark matter mass.
    pub fn mass(&self) -> &Quantity {
        &self.mass
    }

    /// Change the dark matter mass, the mass is unchanged if this fails.
    pub fn set_mass(&mut self, mass: &Quantity) -> DmResult<()> {
        self.primary_flux.set_mass(mass)?;
        self.mass = mass.clone();
        Ok(())
    }

    /// Channel name.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// J-Factor.
    pub fn jfactor(&self) -> &Quantity {
        &self.jfactor
    }

    /// Redshift of the source.
    pub fn redshift(&self) -> f64 {
        self.z
    }

    /// The process producing the photons.
    pub fn process(&self) -> &P {
        &self.process
    }

    /// The photon yield of the channel.
    pub fn primary_flux(&self) -> &PrimaryFlux {
        &self.primary_flux
    }

    /// Mutable access to the scale parameter, used during fitting.
    pub fn scale_mut(&mut self) -> &mut Parameter {
        &mut self.scale
    }
}

impl DarkMatterAnnihilationSpectralModel {
    /// Set the particle multiplicity, 2 for Majorana and 4 for Dirac particles.
    pub fn with_k(mut self, k: u32) -> DmResult<Self> {
        self.process = Annihilation::new(k)?;
        Ok(self)
    }

    /// Particle multiplicity.
    pub fn k(&self) -> u32 {
        self.process.k()
    }
}

impl<P: DarkMatterProcess> SpectralModel for DarkMatterSpectralModel<P> {
    /// Energies and the mass enter the formula in GeV, so the flux is per GeV
    /// whichever energy unit is provided.
    fn evaluate(&self, energy: &Quantity, scale: f64) -> DmResult<Quantity> {
        let emitted = Quantity::gev(energy.to_gev()? * (1.0 + self.z));
        let dnde = self.primary_flux.evaluate(&emitted)?;
        let mass = self.primary_flux.mass();
        let flux = self.jfactor.clone() * self.process.rate()? * dnde
            / (mass.powi(P::MASS_POWER) * (4.0 * PI));
        Ok(flux * scale)
    }

    fn scale(&self) -> &Parameter {
        &self.scale
    }

    fn to_dict(&self) -> ModelDocument {
        ModelDocument {
            spectral: SpectralRecord {
                model_type: P::TAG[0].to_string(),
                parameters: vec![self.scale.clone()],
                channel: self.channel.clone(),
                mass: self.mass.to_string(),
                jfactor: self.jfactor.to_string(),
                z: self.z,
                k: self.process.multiplicity(),
            },
        }
    }

    fn from_dict_with_table(doc: &ModelDocument, table: &FluxTable) -> DmResult<Self> {
        let record = &doc.spectral;
        if !P::TAG.iter().any(|tag| *tag == record.model_type) {
            return Err(Error::ValueError(format!(
                "Cannot construct a {} from a model of type '{}'.",
                P::TAG[0],
                record.model_type
            )));
        }
        let scale = doc
            .parameter("scale")
            .ok_or_else(|| Error::ValueError("Model is missing the 'scale' parameter.".into()))?;
        let process = P::from_multiplicity(record.k)?;
        let mass: Quantity = record.mass.parse()?;
        let jfactor: Quantity = record.jfactor.parse()?;

        let mut model = DarkMatterSpectralModel::from_table(table, &mass, &record.channel, process)?
            .with_jfactor(jfactor)
            .with_redshift(record.z);
        model.scale = scale.clone();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DATA_ENV_VAR, TABLE_FILENAME};
    use crate::flux::testing::{synthetic_table, synthetic_yield};
    use approx::assert_relative_eq;
    use std::env;
    use std::f64::consts::LN_10;

    fn energies() -> Vec<Quantity> {
        [1.0, 3.0, 10.0, 42.0, 100.0, 999.0, 4999.0]
            .into_iter()
            .map(Quantity::gev)
            .collect()
    }

    fn annihilation(table: &FluxTable) -> DarkMatterAnnihilationSpectralModel {
        let jfactor: Quantity = "3.41e19 GeV2 cm-5".parse().unwrap();
        DarkMatterAnnihilationSpectralModel::from_table(
            table,
            &Quantity::gev(5000.0),
            "b",
            Annihilation::default(),
        )
        .unwrap()
        .with_jfactor(jfactor)
    }

    #[test]
    fn test_annihilation_flux() {
        let table = synthetic_table();
        let model = annihilation(&table);
        assert_eq!(model.k(), 2);

        let energy = Quantity::gev(100.0);
        let flux = model.evaluate(&energy, 1.0).unwrap();
        assert!(flux.value().is_finite());
        assert!(flux.value() > 0.0);

        let expected_unit: Unit = "cm-2 s-1 GeV-1".parse().unwrap();
        assert!(flux.unit().is_equivalent(&expected_unit));

        let dnde = synthetic_yield(11, (100.0_f64 / 5000.0).log10(), 5000.0) / (100.0 * LN_10);
        let expected = 3.41e19 * 3e-26 * dnde / (2.0 * 5000.0 * 5000.0 * 4.0 * PI);
        assert_relative_eq!(
            flux.to_value(&expected_unit).unwrap(),
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_annihilation_k() {
        let table = synthetic_table();
        let majorana = annihilation(&table);
        let dirac = annihilation(&table).with_k(4).unwrap();
        assert_eq!(dirac.process(), &Annihilation::dirac());

        for energy in energies() {
            let a = majorana.evaluate(&energy, 1.0).unwrap().value();
            let b = dirac.evaluate(&energy, 1.0).unwrap().value();
            assert_relative_eq!(a, 2.0 * b, max_relative = 1e-14);
        }
        assert!(matches!(
            annihilation(&table).with_k(0),
            Err(Error::ValueError(_))
        ));
    }

    #[test]
    fn test_decay_flux() {
        let table = synthetic_table();
        let mass = Quantity::gev(1000.0);
        let model =
            DarkMatterDecaySpectralModel::from_table(&table, &mass, "tau", Decay).unwrap();
        let jfactor: Quantity = "3.41e19 GeV cm-2".parse().unwrap();
        let scaled = model.clone().with_jfactor(jfactor.clone());

        let energy = Quantity::gev(10.0);
        let flux = scaled.evaluate(&energy, 1.0).unwrap();
        let expected_unit: Unit = "cm-2 s-1 GeV-1".parse().unwrap();
        assert!(flux.unit().is_equivalent(&expected_unit));

        let dnde = synthetic_yield(8, -2.0, 1000.0) / (10.0 * LN_10);
        let expected = 3.41e19 * dnde / (4.3e17 * 1000.0 * 4.0 * PI);
        assert_relative_eq!(flux.value(), expected, max_relative = 1e-9);

        // linear in scale and in the J-Factor
        for energy in energies() {
            let base = model.evaluate(&energy, 1.0).unwrap().value();
            let doubled = model.evaluate(&energy, 2.0).unwrap().value();
            assert_relative_eq!(doubled, 2.0 * base, max_relative = 1e-14);

            let with_j = scaled.evaluate(&energy, 1.0).unwrap().value();
            assert_relative_eq!(with_j, 3.41e19 * base, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_redshift() {
        let table = synthetic_table();
        let model = annihilation(&table);
        let shifted = annihilation(&table).with_redshift(1.0);
        assert_eq!(shifted.redshift(), 1.0);

        let observed = shifted.evaluate(&Quantity::gev(50.0), 1.0).unwrap();
        let emitted = model.evaluate(&Quantity::gev(100.0), 1.0).unwrap();
        assert_relative_eq!(observed.value(), emitted.value(), max_relative = 1e-12);

        // emitted energies above the mass have no flux
        let observed = shifted.evaluate(&Quantity::gev(3000.0), 1.0).unwrap();
        assert_eq!(observed.value(), 0.0);
    }

    #[test]
    fn test_flux_unit_in_gev() {
        let table = synthetic_table();
        let jfactor: Quantity = "3.41e19 GeV2 cm-5".parse().unwrap();
        let tev_model = DarkMatterAnnihilationSpectralModel::from_table(
            &table,
            &"5 TeV".parse().unwrap(),
            "b",
            Annihilation::default(),
        )
        .unwrap()
        .with_jfactor(jfactor);

        let flux = tev_model.evaluate(&"0.1 TeV".parse().unwrap(), 1.0).unwrap();
        assert_eq!(flux.unit().to_string(), "GeV-1 cm-2 s-1");
        let expected = annihilation(&table)
            .evaluate(&Quantity::gev(100.0), 1.0)
            .unwrap();
        assert_relative_eq!(flux.value(), expected.value(), max_relative = 1e-12);
        assert_eq!(tev_model.to_dict().spectral.mass, "5.0 TeV");

        let integral = tev_model
            .integral(&"0.01 TeV".parse().unwrap(), &"1 TeV".parse().unwrap())
            .unwrap();
        assert_eq!(integral.unit().to_string(), "cm-2 s-1");
    }

    #[test]
    fn test_default_table_not_found() {
        // The only test which changes the data directory variable.
        let previous = env::var(DATA_ENV_VAR).ok();
        let missing = env::temp_dir().join(format!("darkflux_missing_{}", std::process::id()));
        let empty = env::temp_dir().join(format!("darkflux_empty_{}", std::process::id()));
        std::fs::create_dir_all(&empty).unwrap();
        let mass = Quantity::gev(5000.0);

        env::set_var(DATA_ENV_VAR, &missing);
        let expected = Error::DataNotFound(missing.join(TABLE_FILENAME).display().to_string());
        assert_eq!(
            DarkMatterAnnihilationSpectralModel::new(&mass, "b").unwrap_err(),
            expected
        );

        env::set_var(DATA_ENV_VAR, &empty);
        let expected = Error::DataNotFound(empty.join(TABLE_FILENAME).display().to_string());
        assert_eq!(
            DarkMatterDecaySpectralModel::new(&mass, "b").unwrap_err(),
            expected
        );
        assert_eq!(PrimaryFlux::new(&mass, "b").unwrap_err(), expected);
        let doc = annihilation(&synthetic_table()).to_dict();
        assert_eq!(
            DarkMatterAnnihilationSpectralModel::from_dict(&doc).unwrap_err(),
            expected
        );

        match previous {
            Some(value) => env::set_var(DATA_ENV_VAR, value),
            None => env::remove_var(DATA_ENV_VAR),
        }
        std::fs::remove_dir(&empty).unwrap();
    }

    #[test]
    fn test_set_mass() {
        let table = synthetic_table();
        let mut model = annihilation(&table);
        assert!(matches!(
            model.set_mass(&Quantity::gev(1e6)),
            Err(Error::MassOutOfBounds { .. })
        ));
        assert_eq!(model.mass(), &Quantity::gev(5000.0));
        assert_eq!(model.primary_flux().mass(), Quantity::gev(5000.0));

        let mass: Quantity = "1 TeV".parse().unwrap();
        model.set_mass(&mass).unwrap();
        assert_eq!(model.mass(), &mass);
        assert_relative_eq!(model.primary_flux().mass().value(), 1000.0);
    }

    #[test]
    fn test_dict_round_trip() {
        let table = synthetic_table();
        let mut model = annihilation(&table).with_k(4).unwrap().with_redshift(0.5);
        model.scale_mut().set_value(2.5).unwrap();
        model.scale_mut().frozen = true;

        let doc = model.to_dict();
        assert_eq!(doc.spectral.model_type, "DarkMatterAnnihilationSpectralModel");
        assert_eq!(doc.spectral.mass, "5000.0 GeV");
        assert_eq!(doc.spectral.jfactor, "3.41e19 GeV2 cm-5");
        assert_eq!(doc.spectral.k, Some(4));

        let json = doc.to_json().unwrap();
        let loaded = DarkMatterAnnihilationSpectralModel::from_dict_with_table(
            &ModelDocument::from_json(&json).unwrap(),
            &table,
        )
        .unwrap();
        assert_eq!(loaded, model);
        assert!(loaded.scale().frozen);

        for energy in energies() {
            assert_relative_eq!(
                loaded.flux(&energy).unwrap().value(),
                model.flux(&energy).unwrap().value(),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_decay_dict() {
        let table = synthetic_table();
        let model = DarkMatterDecaySpectralModel::from_table(
            &table,
            &"2 TeV".parse().unwrap(),
            "gamma",
            Decay,
        )
        .unwrap()
        .with_scale(3.0);

        let json = model.to_dict().to_json().unwrap();
        assert!(json.contains("\"type\": \"DarkMatterDecaySpectralModel\""));
        assert!(!json.contains("\"k\""));

        let path = env::temp_dir().join(format!("darkflux_decay_{}.json", std::process::id()));
        model.to_dict().save_json(&path).unwrap();
        let doc = ModelDocument::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let loaded = DarkMatterDecaySpectralModel::from_dict_with_table(&doc, &table).unwrap();
        assert_eq!(loaded, model);
        assert_eq!(loaded.mass().to_string(), "2.0 TeV");
    }

    #[test]
    fn test_dict_failures() {
        let table = synthetic_table();
        let doc = annihilation(&table).to_dict();

        // annihilation records are not decay records
        assert!(matches!(
            DarkMatterDecaySpectralModel::from_dict_with_table(&doc, &table),
            Err(Error::ValueError(_))
        ));

        // the alias is accepted
        let mut alias = doc.clone();
        alias.spectral.model_type = "dm-annihilation".into();
        assert!(DarkMatterAnnihilationSpectralModel::from_dict_with_table(&alias, &table).is_ok());

        let mut no_scale = doc.clone();
        no_scale.spectral.parameters.clear();
        assert!(DarkMatterAnnihilationSpectralModel::from_dict_with_table(&no_scale, &table)
            .is_err());

        let mut bad_channel = doc.clone();
        bad_channel.spectral.channel = "foo".into();
        assert!(matches!(
            DarkMatterAnnihilationSpectralModel::from_dict_with_table(&bad_channel, &table),
            Err(Error::InvalidChannel { .. })
        ));

        let mut decay = doc;
        decay.spectral.model_type = "dm-decay".into();
        assert!(matches!(
            DarkMatterDecaySpectralModel::from_dict_with_table(&decay, &table),
            Err(Error::ValueError(_))
        ));
        decay.spectral.k = None;
        assert!(DarkMatterDecaySpectralModel::from_dict_with_table(&decay, &table).is_ok());
    }

    #[test]
    fn test_integral() {
        let table = synthetic_table();
        let mass = 1000.0;
        let model =
            DarkMatterDecaySpectralModel::from_table(&table, &Quantity::gev(mass), "b", Decay)
                .unwrap();
        let emin = Quantity::gev(1.0);
        let emax = Quantity::gev(100.0);

        // The yield is linear in log10(x), between x = 1e-3 and 1e-1.
        let norm = 1.0 / (4.3e17 * mass * 4.0 * PI);
        let c = 12.0 * 0.01 * (1.0 + mass.ln());
        let expected = norm * c * (5.5_f64.powi(2) - 3.5_f64.powi(2)) / 2.0;
        let integral = model.integral(&emin, &emax).unwrap();
        assert_relative_eq!(integral.value(), expected, max_relative = 1e-9);

        let antiderivative = |t: f64| 10_f64.powf(t) * ((t + 6.5) / LN_10 - 1.0 / LN_10.powi(2));
        let expected = norm * mass * c * (antiderivative(-1.0) - antiderivative(-3.0));
        let energy_flux = model.energy_flux(&emin, &emax).unwrap();
        assert_relative_eq!(energy_flux.value(), expected, max_relative = 1e-3);

        assert!(model.integral(&emax, &emin).is_err());
        assert!(model.integral(&emin, &"1 s".parse().unwrap()).is_err());
    }
}
