//! # Errors
//! Errors emitted by darkflux_core

use std::{error, fmt, io};

/// darkflux specific result.
pub type DmResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tabulated spectra file could not be found, contains the expected path.
    DataNotFound(String),

    /// Requested channel is not part of the channel registry.
    InvalidChannel {
        /// Channel which was requested.
        channel: String,

        /// All channels which are supported.
        allowed: Vec<String>,
    },

    /// Requested dark matter mass lies outside of the tabulated mass range.
    MassOutOfBounds {
        /// Requested mass, including unit.
        mass: String,

        /// Smallest tabulated mass, including unit.
        min: String,

        /// Largest tabulated mass, including unit.
        max: String,
    },

    /// Physical units are not convertible or could not be understood.
    UnitMismatch(String),

    /// Text input could not be parsed, either a table or a serialized model.
    ParseError(String),

    /// Input or variable exceeded expected or allowed bounds.
    ValueError(String),

    /// Error related to IO.
    IOError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DataNotFound(path) => {
                write!(
                    f,
                    "File not found: {}\n\
                     Set the DARKFLUX_DATA environment variable to the directory holding \
                     dark_matter_spectra/, the dataset may be downloaded with:\n\
                     gammapy download datasets --src dark_matter_spectra",
                    path
                )
            }
            Error::InvalidChannel { channel, allowed } => {
                write!(f, "Invalid channel: {}\nAvailable: {:?}", channel, allowed)
            }
            Error::MassOutOfBounds { mass, min, max } => {
                write!(
                    f,
                    "The mass {} is out of the bounds of the model. \
                     Please choose a mass between {} < `mDM` < {}",
                    mass, min, max
                )
            }
            Error::UnitMismatch(s) => {
                write!(f, "{}", s)
            }
            Error::ParseError(s) => {
                write!(f, "{}", s)
            }
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
            Error::IOError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IOError(error.to_string())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(value: std::num::ParseIntError) -> Self {
        Error::ParseError(value.to_string())
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(value: std::num::ParseFloatError) -> Self {
        Error::ParseError(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::ParseError(value.to_string())
    }
}
