//! Annihilation and decay channels of the PPPC 4 DM ID tables.
use crate::errors::{DmResult, Error};

/// Mapping from channel names to the column labels used in the tabulated spectra.
///
/// Greek letters are written the way Mathematica exports them, `\[Tau]` for tau.
pub const CHANNEL_REGISTRY: [(&str, &str); 28] = [
    ("eL", "eL"),
    ("eR", "eR"),
    ("e", "e"),
    ("muL", r"\[Mu]L"),
    ("muR", r"\[Mu]R"),
    ("mu", r"\[Mu]"),
    ("tauL", r"\[Tau]L"),
    ("tauR", r"\[Tau]R"),
    ("tau", r"\[Tau]"),
    ("q", "q"),
    ("c", "c"),
    ("b", "b"),
    ("t", "t"),
    ("WL", "WL"),
    ("WT", "WT"),
    ("W", "W"),
    ("ZL", "ZL"),
    ("ZT", "ZT"),
    ("Z", "Z"),
    ("g", "g"),
    ("gamma", r"\[Gamma]"),
    ("h", "h"),
    ("nu_e", r"\[Nu]e"),
    ("nu_mu", r"\[Nu]\[Mu]"),
    ("nu_tau", r"\[Nu]\[Tau]"),
    ("V->e", "V->e"),
    ("V->mu", r"V->\[Mu]"),
    ("V->tau", r"V->\[Tau]"),
];

/// Names of all supported channels.
pub fn allowed_channels() -> Vec<&'static str> {
    CHANNEL_REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Column label of the tabulated spectra for a channel.
pub fn channel_column(channel: &str) -> DmResult<&'static str> {
    CHANNEL_REGISTRY
        .iter()
        .find(|(name, _)| *name == channel)
        .map(|(_, column)| *column)
        .ok_or_else(|| Error::InvalidChannel {
            channel: channel.to_string(),
            allowed: allowed_channels().into_iter().map(String::from).collect(),
        })
}
