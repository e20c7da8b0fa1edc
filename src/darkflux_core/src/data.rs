//! Location of the tabulated dark matter spectra
//!
//! The spectra are read from a data directory, which by default exists in the home
//! directory of the user. This can be changed by setting the DARKFLUX_DATA
//! environment variable. The data directory is expected to contain the
//! `dark_matter_spectra/AtProduction_gammas.dat` file distributed with the PPPC 4 DM ID
//! tables.

use directories::UserDirs;
use std::{env, path::PathBuf};

use crate::errors::{DmResult, Error};

/// Environment variable which overrides the data directory.
pub const DATA_ENV_VAR: &str = "DARKFLUX_DATA";

/// Location of the gamma-ray yield table relative to the data directory.
pub const TABLE_FILENAME: &str = "dark_matter_spectra/AtProduction_gammas.dat";

/// Get the data directory for darkflux.
///
/// This first checks if the DARKFLUX_DATA environment variable is set.
/// If it is set, it checks if the directory exists. If it does not exist,
/// a [`Error::DataNotFound`] is returned. If it does exist, it returns the path.
///
/// If the DARKFLUX_DATA environment variable is not set, the `.darkflux` directory
/// in the home directory of the user is used.
pub fn data_dir() -> DmResult<PathBuf> {
    data_dir_from(env::var(DATA_ENV_VAR).ok())
}

/// Resolve the data directory from the value of the DARKFLUX_DATA variable.
///
/// A directory which does not exist is reported with the table path expected inside
/// of it.
pub fn data_dir_from(env_path: Option<String>) -> DmResult<PathBuf> {
    match env_path {
        Some(env_path) => {
            let path = PathBuf::from(env_path);
            if !path.is_dir() {
                return Err(Error::DataNotFound(
                    path.join(TABLE_FILENAME).display().to_string(),
                ));
            }
            Ok(path)
        }
        None => {
            let user_dirs =
                UserDirs::new().ok_or(Error::IOError("Failed to find home directory.".into()))?;
            Ok(user_dirs.home_dir().join(".darkflux"))
        }
    }
}

/// The absolute location of the gamma-ray yield table.
///
/// The file itself is not checked for existence here, readers report a
/// [`Error::DataNotFound`] if it is absent.
pub fn table_path() -> DmResult<PathBuf> {
    Ok(data_dir()?.join(TABLE_FILENAME))
}
