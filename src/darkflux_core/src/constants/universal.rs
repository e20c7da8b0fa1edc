/// Thermally averaged annihilation cross-section in cm^3 / s.
///
/// Canonical value which reproduces the observed relic density for a thermally
/// produced dark matter particle.
pub const THERMAL_RELIC_CROSS_SECTION: f64 = 3e-26;

/// Age of the universe in seconds.
///
/// The decay model uses this as the particle lifetime. This is an approximation, the
/// real lifetime is unknown and only bounded from below by this value.
pub const LIFETIME_AGE_OF_UNIVERSE: f64 = 4.3e17;

/// Number of self-conjugate (Majorana) particles participating in annihilation.
pub const K_MAJORANA: u32 = 2;

/// Number of non self-conjugate (Dirac) particles participating in annihilation.
pub const K_DIRAC: u32 = 4;

/// Number of integration points per decade of energy used for integrated fluxes.
pub const INTEGRATION_POINTS_PER_DECADE: f64 = 100.0;
