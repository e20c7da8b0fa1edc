use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Div, Mul};
use std::str::FromStr;

use crate::constants::{
    CM_PER_M, CM_PER_PC, GEV_PER_ERG, GEV_PER_EV, GEV_PER_JOULE, RAD_PER_DEG, SECONDS_PER_DAY,
    SECONDS_PER_YEAR,
};
use crate::errors::{DmResult, Error};

/// Powers of the base dimensions carried by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Power of energy.
    pub energy: i32,

    /// Power of length.
    pub length: i32,

    /// Power of time.
    pub time: i32,

    /// Power of angle, a steradian is angle squared.
    pub angle: i32,
}

impl Dimensions {
    /// No dimensions.
    pub const NONE: Dimensions = Dimensions::new(0, 0, 0, 0);

    /// Energy, for example GeV.
    pub const ENERGY: Dimensions = Dimensions::new(1, 0, 0, 0);

    const LENGTH: Dimensions = Dimensions::new(0, 1, 0, 0);
    const TIME: Dimensions = Dimensions::new(0, 0, 1, 0);
    const ANGLE: Dimensions = Dimensions::new(0, 0, 0, 1);
    const SOLID_ANGLE: Dimensions = Dimensions::new(0, 0, 0, 2);

    /// Construct a new set of dimension powers.
    pub const fn new(energy: i32, length: i32, time: i32, angle: i32) -> Self {
        Dimensions {
            energy,
            length,
            time,
            angle,
        }
    }

    /// Raise the dimensions to an integer power.
    pub fn powi(self, power: i32) -> Self {
        Dimensions::new(
            self.energy * power,
            self.length * power,
            self.time * power,
            self.angle * power,
        )
    }
}

impl Add for Dimensions {
    type Output = Dimensions;

    fn add(self, rhs: Dimensions) -> Dimensions {
        Dimensions::new(
            self.energy + rhs.energy,
            self.length + rhs.length,
            self.time + rhs.time,
            self.angle + rhs.angle,
        )
    }
}

/// Scale of a symbol with respect to GeV, cm, s and rad.
#[derive(Debug, Clone, Copy)]
struct BaseUnit {
    scale: f64,
    dims: Dimensions,
}

const fn base(scale: f64, dims: Dimensions) -> BaseUnit {
    BaseUnit { scale, dims }
}

lazy_static! {
    /// Every unit symbol which may appear in a unit string.
    static ref BASE_UNITS: HashMap<&'static str, BaseUnit> = HashMap::from([
        ("eV", base(GEV_PER_EV, Dimensions::ENERGY)),
        ("keV", base(GEV_PER_EV * 1e3, Dimensions::ENERGY)),
        ("MeV", base(GEV_PER_EV * 1e6, Dimensions::ENERGY)),
        ("GeV", base(1.0, Dimensions::ENERGY)),
        ("TeV", base(1e3, Dimensions::ENERGY)),
        ("PeV", base(1e6, Dimensions::ENERGY)),
        ("erg", base(GEV_PER_ERG, Dimensions::ENERGY)),
        ("J", base(GEV_PER_JOULE, Dimensions::ENERGY)),
        ("cm", base(1.0, Dimensions::LENGTH)),
        ("m", base(CM_PER_M, Dimensions::LENGTH)),
        ("km", base(CM_PER_M * 1e3, Dimensions::LENGTH)),
        ("pc", base(CM_PER_PC, Dimensions::LENGTH)),
        ("kpc", base(CM_PER_PC * 1e3, Dimensions::LENGTH)),
        ("Mpc", base(CM_PER_PC * 1e6, Dimensions::LENGTH)),
        ("s", base(1.0, Dimensions::TIME)),
        ("min", base(60.0, Dimensions::TIME)),
        ("h", base(3600.0, Dimensions::TIME)),
        ("d", base(SECONDS_PER_DAY, Dimensions::TIME)),
        ("yr", base(SECONDS_PER_YEAR, Dimensions::TIME)),
        ("rad", base(1.0, Dimensions::ANGLE)),
        ("deg", base(RAD_PER_DEG, Dimensions::ANGLE)),
        ("sr", base(1.0, Dimensions::SOLID_ANGLE)),
    ]);
}

/// A physical unit, represented as a product of symbols raised to integer powers.
///
/// Symbols are kept in the order they were first seen, repeated symbols are merged,
/// so `GeV2 cm-5` multiplied by `cm3 s-1` is `GeV2 cm-2 s-1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Unit {
    terms: Vec<(&'static str, i32)>,
}

impl Unit {
    /// Unit of a pure number.
    pub fn dimensionless() -> Self {
        Unit { terms: Vec::new() }
    }

    /// Unit built from symbols with integer powers.
    ///
    /// Every symbol must be a known unit, otherwise [`Error::UnitMismatch`] is returned.
    pub fn from_terms(terms: &[(&str, i32)]) -> DmResult<Self> {
        terms
            .iter()
            .try_fold(Unit::dimensionless(), |unit, (symbol, power)| -> DmResult<Unit> {
                let (key, _) = BASE_UNITS
                    .get_key_value(*symbol)
                    .ok_or_else(|| Error::UnitMismatch(format!("Unknown unit '{}'", symbol)))?;
                Ok(unit.with_term(*key, *power))
            })
    }

    /// The GeV, the internal energy unit of the tabulated spectra.
    pub fn gev() -> Self {
        Unit {
            terms: vec![("GeV", 1)],
        }
    }

    fn with_term(mut self, symbol: &'static str, power: i32) -> Self {
        match self.terms.iter_mut().find(|(s, _)| *s == symbol) {
            Some(term) => term.1 += power,
            None => self.terms.push((symbol, power)),
        }
        self.terms.retain(|(_, p)| *p != 0);
        self
    }

    /// Powers of the base dimensions of this unit.
    pub fn dimensions(&self) -> Dimensions {
        self.terms
            .iter()
            .filter_map(|(symbol, power)| BASE_UNITS.get(*symbol).map(|b| b.dims.powi(*power)))
            .fold(Dimensions::NONE, |acc, dims| acc + dims)
    }

    /// Size of this unit expressed in GeV, cm, s and rad.
    pub fn scale(&self) -> f64 {
        self.terms
            .iter()
            .filter_map(|(symbol, power)| BASE_UNITS.get(*symbol).map(|b| b.scale.powi(*power)))
            .product()
    }

    /// Is this unit free of dimensions.
    ///
    /// Note that a unit such as `GeV TeV-1` has no dimensions but a scale of 1e-3.
    pub fn is_dimensionless(&self) -> bool {
        self.dimensions() == Dimensions::NONE
    }

    /// Can this unit be converted into the other.
    pub fn is_equivalent(&self, other: &Unit) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Raise the unit to an integer power.
    pub fn powi(&self, power: i32) -> Unit {
        self.terms
            .iter()
            .fold(Unit::dimensionless(), |unit, (symbol, p)| {
                unit.with_term(*symbol, p * power)
            })
    }

    /// Factor which converts a value in this unit into a value in the other unit.
    pub fn conversion_factor(&self, other: &Unit) -> DmResult<f64> {
        if !self.is_equivalent(other) {
            return Err(Error::UnitMismatch(format!(
                "'{}' ({:?}) and '{}' ({:?}) are not convertible",
                self,
                self.dimensions(),
                other,
                other.dimensions()
            )));
        }
        Ok(self.scale() / other.scale())
    }
}

impl Mul<&Unit> for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        rhs.terms
            .iter()
            .fold(self.clone(), |unit, (symbol, power)| {
                unit.with_term(*symbol, *power)
            })
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        self * &rhs.powi(-1)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self
            .terms
            .iter()
            .map(|(symbol, power)| match power {
                1 => symbol.to_string(),
                p => format!("{}{}", symbol, p),
            })
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", text)
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parse strings such as `GeV2 cm-5`, `GeV2 / cm5` or `1 / (cm2 s)`.
    ///
    /// Every symbol following a `/` is placed in the denominator.
    fn from_str(text: &str) -> DmResult<Self> {
        let text = text.replace('/', " / ").replace(|c: char| c == '(' || c == ')', " ");
        let mut unit = Unit::dimensionless();
        let mut sign = 1;
        for token in text.split_whitespace() {
            if token == "/" {
                sign = -1;
                continue;
            }
            if token == "1" {
                continue;
            }
            let split = token
                .find(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
                .unwrap_or(token.len());
            let (symbol, power) = token.split_at(split);
            let power = match power {
                "" => 1,
                p => p.parse::<i32>().map_err(|_| {
                    Error::UnitMismatch(format!("Invalid power '{}' in unit '{}'", p, token))
                })?,
            };
            let (symbol, _) = BASE_UNITS
                .get_key_value(symbol)
                .ok_or_else(|| Error::UnitMismatch(format!("Unknown unit '{}'", symbol)))?;
            unit = unit.with_term(symbol, sign * power);
        }
        Ok(unit)
    }
}
