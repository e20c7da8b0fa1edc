//! Serialized form of the spectral models.
//!
//! Models are written as part of a larger model configuration, in the form:
//!
//! ```text
//! {
//!   "spectral": {
//!     "type": "DarkMatterAnnihilationSpectralModel",
//!     "parameters": [{"name": "scale", "value": 1.0, ...}],
//!     "channel": "b",
//!     "mass": "5000.0 GeV",
//!     "jfactor": "3.41e19 GeV2 cm-5",
//!     "z": 0.0,
//!     "k": 2
//!   }
//! }
//! ```
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::Parameter;
use crate::errors::DmResult;

/// A serialized spectral model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// The spectral component.
    pub spectral: SpectralRecord,
}

/// Fields of a serialized dark matter spectral model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralRecord {
    /// Model type name or alias.
    #[serde(rename = "type")]
    pub model_type: String,

    /// Fit parameters of the model, including their metadata.
    pub parameters: Vec<Parameter>,

    /// Channel name.
    pub channel: String,

    /// Dark matter mass including unit, for example `5000.0 GeV`.
    pub mass: String,

    /// J-Factor including unit, for example `3.41e19 GeV2 cm-5`.
    pub jfactor: String,

    /// Redshift of the source.
    #[serde(default)]
    pub z: f64,

    /// Annihilating particle multiplicity, absent for decay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
}

impl ModelDocument {
    /// Find a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.spectral.parameters.iter().find(|p| p.name == name)
    }

    /// Write the document as JSON text.
    pub fn to_json(&self) -> DmResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a document from JSON text.
    pub fn from_json(text: &str) -> DmResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Save the document to a JSON file.
    pub fn save_json(&self, filename: &Path) -> DmResult<()> {
        let f = BufWriter::new(File::create(filename)?);
        serde_json::to_writer_pretty(f, self)?;
        Ok(())
    }

    /// Load a document from a JSON file.
    pub fn load_json(filename: &Path) -> DmResult<Self> {
        let f = BufReader::new(File::open(filename)?);
        Ok(serde_json::from_reader(f)?)
    }
}
