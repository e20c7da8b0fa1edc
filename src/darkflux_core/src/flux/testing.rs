//! Synthetic yield tables used by the tests.
//!
//! The yields are a product of a linear function of log10(x) and a linear function
//! of ln(mass), which bilinear interpolation reproduces exactly at any point inside
//! of the grid.
use itertools::iproduct;

use super::channels::CHANNEL_REGISTRY;
use crate::io::FluxTable;

/// Tabulated masses in GeV.
pub(crate) const MASSES: [f64; 7] = [10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0, 10000.0];

/// Tabulated log10(x) nodes, -6 to 0 in steps of 0.5.
pub(crate) fn log10x_nodes() -> Vec<f64> {
    (0..=12).map(|j| -6.0 + 0.5 * j as f64).collect()
}

/// dN/dlog10(x) of the synthetic table.
pub(crate) fn synthetic_yield(channel_idx: usize, log10x: f64, mass: f64) -> f64 {
    (channel_idx + 1) as f64 * 0.01 * (log10x + 6.5) * (1.0 + mass.ln())
}

/// Text of a complete synthetic table containing every registered channel.
pub(crate) fn synthetic_table_text() -> String {
    let header = ["mDM", "Log[10,x]"]
        .into_iter()
        .chain(CHANNEL_REGISTRY.iter().map(|(_, column)| *column))
        .collect::<Vec<_>>()
        .join(" ");

    let rows = iproduct!(MASSES, log10x_nodes()).map(|(mass, log10x)| {
        let yields = (0..CHANNEL_REGISTRY.len())
            .map(|idx| format!("{:?}", synthetic_yield(idx, log10x, mass)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{:?} {:?} {}", mass, log10x, yields)
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parsed synthetic table.
pub(crate) fn synthetic_table() -> FluxTable {
    synthetic_table_text().parse().unwrap()
}
