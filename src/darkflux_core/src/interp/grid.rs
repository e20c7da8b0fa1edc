use nalgebra::DMatrix;

use super::{GridAxis, InterpScale};
use crate::errors::{DmResult, Error};

/// Behavior of the interpolator outside of the grid, and scaling of the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpOptions {
    /// Linearly extrapolate from the edge cells when no fill value is given.
    pub extrapolate: bool,

    /// Value returned for any coordinate outside of the grid.
    pub fill_value: Option<f64>,

    /// Transform applied to the values before interpolating.
    pub values_scale: InterpScale,
}

impl Default for InterpOptions {
    fn default() -> Self {
        InterpOptions {
            extrapolate: true,
            fill_value: None,
            values_scale: InterpScale::Lin,
        }
    }
}

/// Bilinear interpolation of values tabulated on two axes.
///
/// Values are stored as a matrix where rows correspond to the nodes of the first
/// axis and columns to the nodes of the second axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularGridInterpolator {
    axes: [GridAxis; 2],

    /// Values transformed by the values scale.
    values: DMatrix<f64>,

    options: InterpOptions,
}

impl RegularGridInterpolator {
    /// Construct a new interpolator.
    ///
    /// # Arguments
    ///
    /// * `axes` - The row axis followed by the column axis.
    /// * `values` - Tabulated values with shape (rows, columns).
    /// * `options` - Extrapolation and value scaling options.
    pub fn new(axes: [GridAxis; 2], values: DMatrix<f64>, options: InterpOptions) -> DmResult<Self> {
        let expected = (axes[0].len(), axes[1].len());
        if values.shape() != expected {
            return Err(Error::ValueError(format!(
                "Grid values have shape {:?}, but axes '{}' and '{}' require {:?}.",
                values.shape(),
                axes[0].name(),
                axes[1].name(),
                expected
            )));
        }
        let values = values.map(|v| options.values_scale.forward(v));
        Ok(RegularGridInterpolator {
            axes,
            values,
            options,
        })
    }

    /// The row and column axes.
    pub fn axes(&self) -> &[GridAxis; 2] {
        &self.axes
    }

    /// Options used by the interpolator.
    pub fn options(&self) -> &InterpOptions {
        &self.options
    }

    /// Interpolate the grid at the coordinate (row, column).
    ///
    /// Coordinates outside of the grid return the fill value if one is set, otherwise
    /// are extrapolated if allowed, otherwise return an error.
    pub fn interpolate(&self, coord: [f64; 2]) -> DmResult<f64> {
        let inside = self.axes[0].contains(coord[0]) && self.axes[1].contains(coord[1]);
        if !inside {
            if let Some(fill) = self.options.fill_value {
                return Ok(fill);
            }
            if !self.options.extrapolate || coord.iter().any(|x| x.is_nan()) {
                return Err(Error::ValueError(format!(
                    "Coordinate {:?} is outside of the grid along '{}' and '{}'.",
                    coord,
                    self.axes[0].name(),
                    self.axes[1].name()
                )));
            }
        }

        let (row, row_frac) = self.axes[0].locate(coord[0]);
        let (col, col_frac) = self.axes[1].locate(coord[1]);

        let lower = lerp(
            self.values[(row, col)],
            self.values[(row + 1, col)],
            row_frac,
        );
        let upper = lerp(
            self.values[(row, col + 1)],
            self.values[(row + 1, col + 1)],
            row_frac,
        );
        Ok(self
            .options
            .values_scale
            .inverse(lerp(lower, upper, col_frac)))
    }

    /// Interpolate the grid at many coordinates.
    pub fn interpolate_many(&self, coords: &[[f64; 2]]) -> DmResult<Vec<f64>> {
        coords.iter().map(|c| self.interpolate(*c)).collect()
    }
}

/// Linear interpolation which returns the node value exactly when the fraction is
/// exactly 0 or 1.
#[inline(always)]
fn lerp(low: f64, high: f64, frac: f64) -> f64 {
    if frac == 0.0 {
        return low;
    }
    if frac == 1.0 {
        return high;
    }
    low * (1.0 - frac) + high * frac
}
