//! File IO related tools

mod table;

pub use table::{FluxTable, TableGrid};

use crate::errors::{DmResult, Error};
use bincode::serde::{decode_from_std_read, encode_into_std_write};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Support for automatic derivation of binary Save/Load
pub trait FileIO: Serialize
where
    for<'de> Self: Deserialize<'de>,
{
    /// Save into a file.
    fn save(&self, filename: String) -> DmResult<usize> {
        let mut f = BufWriter::new(File::create(filename)?);
        encode_into_std_write(self, &mut f, bincode::config::legacy())
            .map_err(|_| Error::IOError("Failed to write to file".into()))
    }

    /// Load from a file.
    fn load(filename: String) -> DmResult<Self> {
        let mut f = BufReader::new(File::open(filename)?);
        decode_from_std_read(&mut f, bincode::config::legacy())
            .map_err(|_| Error::IOError("Failed to read from file".into()))
    }
}
