use serde::{Deserialize, Serialize};

use crate::errors::{DmResult, Error};

/// Coordinate transform applied before interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpScale {
    /// Interpolate linearly in the value itself.
    #[default]
    Lin,

    /// Interpolate linearly in the natural log of the value.
    Log,
}

impl InterpScale {
    /// Transform a value into the interpolation coordinate.
    #[inline(always)]
    pub fn forward(&self, value: f64) -> f64 {
        match self {
            InterpScale::Lin => value,
            InterpScale::Log => value.ln(),
        }
    }

    /// Transform an interpolation coordinate back into a value.
    #[inline(always)]
    pub fn inverse(&self, value: f64) -> f64 {
        match self {
            InterpScale::Lin => value,
            InterpScale::Log => value.exp(),
        }
    }
}

/// A named axis of strictly increasing nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxis {
    name: String,
    nodes: Vec<f64>,
    scale: InterpScale,

    /// Nodes transformed by `scale`.
    scaled: Vec<f64>,
}

impl GridAxis {
    /// Construct an axis from its node values.
    ///
    /// Nodes must be finite and strictly increasing, at least two are required. Log
    /// scaled axes additionally require all nodes to be positive.
    pub fn from_nodes(name: &str, nodes: Vec<f64>, scale: InterpScale) -> DmResult<Self> {
        if nodes.len() < 2 {
            return Err(Error::ValueError(format!(
                "Axis '{}' requires at least 2 nodes, found {}.",
                name,
                nodes.len()
            )));
        }
        if nodes.iter().any(|x| !x.is_finite()) {
            return Err(Error::ValueError(format!(
                "Axis '{}' contains non-finite nodes.",
                name
            )));
        }
        if nodes.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(Error::ValueError(format!(
                "Axis '{}' nodes must be strictly increasing.",
                name
            )));
        }
        if scale == InterpScale::Log && nodes[0] <= 0.0 {
            return Err(Error::ValueError(format!(
                "Axis '{}' is log scaled but contains non-positive nodes.",
                name
            )));
        }
        let scaled = nodes.iter().map(|x| scale.forward(*x)).collect();
        Ok(GridAxis {
            name: name.to_string(),
            nodes,
            scale,
            scaled,
        })
    }

    /// Name of the axis.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node values of the axis.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Node spacing of the axis.
    pub fn scale(&self) -> InterpScale {
        self.scale
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Axes always have at least two nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Smallest node.
    pub fn min(&self) -> f64 {
        self.nodes[0]
    }

    /// Largest node.
    pub fn max(&self) -> f64 {
        self.nodes[self.nodes.len() - 1]
    }

    /// Is the coordinate inside of the closed range of the nodes.
    pub fn contains(&self, coord: f64) -> bool {
        (self.min()..=self.max()).contains(&coord)
    }

    /// Find the lower node index of the cell containing the coordinate, and the
    /// fractional position within that cell in scaled coordinates.
    ///
    /// Coordinates outside of the axis are assigned to the first or last cell, with a
    /// fraction outside of [0, 1], which results in linear extrapolation.
    pub(crate) fn locate(&self, coord: f64) -> (usize, f64) {
        let scaled = self.scale.forward(coord);
        let idx = self
            .scaled
            .partition_point(|&node| node <= scaled)
            .clamp(1, self.scaled.len() - 1)
            - 1;
        let lower = self.scaled[idx];
        let upper = self.scaled[idx + 1];
        (idx, (scaled - lower) / (upper - lower))
    }
}
