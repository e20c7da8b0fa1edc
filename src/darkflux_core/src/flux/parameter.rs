use serde::{Deserialize, Serialize};

use crate::errors::{DmResult, Error};
use crate::interp::InterpScale;
use crate::units::Quantity;

/// A named model parameter with optional bounds.
///
/// The value can only be changed through [`Parameter::set_value`], which rejects
/// values outside of the bounds without modifying the parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter.
    pub name: String,

    value: f64,

    /// Unit of the value, empty for dimensionless parameters.
    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    min: Option<f64>,

    #[serde(default)]
    max: Option<f64>,

    /// Frozen parameters are not varied during fitting.
    #[serde(default)]
    pub frozen: bool,

    /// Uncertainty on the value, in the same unit.
    #[serde(default)]
    pub error: f64,

    /// Spacing used when the parameter is scanned or interpolated.
    #[serde(default)]
    pub interp: InterpScale,
}

impl Parameter {
    /// Construct a new unbounded, free parameter.
    pub fn new(name: &str, value: f64, unit: &str) -> Self {
        Parameter {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            min: None,
            max: None,
            frozen: false,
            error: 0.0,
            interp: InterpScale::Lin,
        }
    }

    /// The linear scale parameter shared by all spectral models.
    pub fn scale(value: f64) -> Self {
        Parameter::new("scale", value, "").with_interp(InterpScale::Log)
    }

    /// Restrict the parameter to the closed range [min, max].
    pub fn with_bounds(mut self, min: f64, max: f64) -> DmResult<Self> {
        if min > max {
            return Err(Error::ValueError(format!(
                "Parameter '{}' minimum {} is larger than the maximum {}.",
                self.name, min, max
            )));
        }
        self.min = Some(min);
        self.max = Some(max);
        if !self.contains(self.value) {
            return Err(self.out_of_bounds(self.value));
        }
        Ok(self)
    }

    /// Set the interpolation spacing of the parameter.
    pub fn with_interp(mut self, interp: InterpScale) -> Self {
        self.interp = interp;
        self
    }

    /// Freeze the parameter.
    pub fn freeze(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound, if any.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Upper bound, if any.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Current value including the unit.
    pub fn quantity(&self) -> DmResult<Quantity> {
        Ok(Quantity::new(self.value, self.unit.parse()?))
    }

    /// Is the value within the bounds of the parameter.
    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan()
            && self.min.map_or(true, |min| value >= min)
            && self.max.map_or(true, |max| value <= max)
    }

    /// Update the value, values outside of the bounds are rejected.
    pub fn set_value(&mut self, value: f64) -> DmResult<()> {
        if !self.contains(value) {
            return Err(self.out_of_bounds(value));
        }
        self.value = value;
        Ok(())
    }

    fn out_of_bounds(&self, value: f64) -> Error {
        Error::ValueError(format!(
            "Value {} of parameter '{}' is outside of the bounds [{:?}, {:?}].",
            value, self.name, self.min, self.max
        ))
    }
}
