/// GeV per eV (Definition)
pub const GEV_PER_EV: f64 = 1e-9;

/// GeV per erg
pub const GEV_PER_ERG: f64 = 624.150_907_446_076_1;

/// GeV per Joule
pub const GEV_PER_JOULE: f64 = 6.241_509_074_460_763e9;

/// cm per meter (Definition)
pub const CM_PER_M: f64 = 100.0;

/// cm per parsec
pub const CM_PER_PC: f64 = 3.085_677_581_491_367e18;

/// Seconds per Julian year (Definition)
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Seconds per day (Definition)
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Radians per degree
pub const RAD_PER_DEG: f64 = std::f64::consts::PI / 180.0;
