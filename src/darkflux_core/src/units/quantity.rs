use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use super::{Dimensions, Unit};
use crate::errors::{DmResult, Error};

/// A value paired with its physical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Construct a new quantity.
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// A pure number without a unit.
    pub fn dimensionless(value: f64) -> Self {
        Quantity::new(value, Unit::dimensionless())
    }

    /// An energy in GeV.
    pub fn gev(value: f64) -> Self {
        Quantity::new(value, Unit::gev())
    }

    /// Value in the unit of the quantity.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit of the quantity.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Convert the quantity to another unit.
    pub fn to(&self, unit: &Unit) -> DmResult<Quantity> {
        Ok(Quantity::new(self.to_value(unit)?, unit.clone()))
    }

    /// Value of the quantity expressed in another unit.
    pub fn to_value(&self, unit: &Unit) -> DmResult<f64> {
        Ok(self.value * self.unit.conversion_factor(unit)?)
    }

    /// Value of the quantity in GeV, failing if this is not an energy.
    pub fn to_gev(&self) -> DmResult<f64> {
        if self.unit.dimensions() != Dimensions::ENERGY {
            return Err(Error::UnitMismatch(format!(
                "Expected an energy, found '{}'",
                self
            )));
        }
        self.to_value(&Unit::gev())
    }

    /// Raise the quantity to an integer power.
    pub fn powi(&self, power: i32) -> Quantity {
        Quantity::new(self.value.powi(power), self.unit.powi(power))
    }
}

impl Mul<Quantity> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value * rhs.value, &self.unit * &rhs.unit)
    }
}

impl Div<Quantity> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value / rhs.value, &self.unit / &rhs.unit)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.unit)
    }
}

impl fmt::Display for Quantity {
    /// Values are written with the shortest representation which parses back exactly,
    /// `5000.0 GeV` or `3.41e19 GeV2 cm-5`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.unit == Unit::dimensionless() {
            write!(f, "{:?}", self.value)
        } else {
            write!(f, "{:?} {}", self.value, self.unit)
        }
    }
}

impl FromStr for Quantity {
    type Err = Error;

    fn from_str(text: &str) -> DmResult<Self> {
        let text = text.trim();
        let (value, unit) = text
            .split_once(char::is_whitespace)
            .unwrap_or((text, ""));
        let value = value.parse::<f64>().map_err(|_| {
            Error::ParseError(format!("Could not parse a quantity from '{}'", text))
        })?;
        Ok(Quantity::new(value, unit.parse()?))
    }
}
