//! Reader for whitespace delimited tables with a header row of column names.
//!
//! This is the format used by the PPPC 4 DM ID tables, for example:
//!
//! ```text
//! mDM   Log[10,x]   eL   eR   ...
//! 5.0   -8.9        0.0  0.0  ...
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.
use itertools::{izip, Itertools};
use log::{debug, warn};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::FileIO;
use crate::data;
use crate::errors::{DmResult, Error};

/// Numeric table with named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl FileIO for FluxTable {}

/// Values of a table column reshaped onto the grid spanned by two other columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    /// Sorted unique values of the row column.
    pub row_nodes: Vec<f64>,

    /// Sorted unique values of the column column.
    pub col_nodes: Vec<f64>,

    /// Values with shape (row nodes, column nodes).
    pub values: DMatrix<f64>,
}

impl FromStr for FluxTable {
    type Err = Error;

    /// Load a table from the full text of a file.
    fn from_str(text: &str) -> DmResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (_, header) = lines
            .next()
            .ok_or_else(|| Error::ParseError("Table does not contain a header.".into()))?;
        let names = header.split_whitespace().map(String::from).collect_vec();
        if let Some(name) = names.iter().duplicates().next() {
            return Err(Error::ParseError(format!(
                "Column '{}' appears more than once in the header.",
                name
            )));
        }

        let mut columns = vec![Vec::new(); names.len()];
        for (line_no, line) in lines {
            let values = line.split_whitespace().collect_vec();
            if values.len() != names.len() {
                return Err(Error::ParseError(format!(
                    "Line {}: expected {} columns, found {}.",
                    line_no,
                    names.len(),
                    values.len()
                )));
            }
            for (column, name, value) in izip!(columns.iter_mut(), &names, values) {
                let parsed = value.parse::<f64>().map_err(|_| {
                    Error::ParseError(format!(
                        "Line {}: could not parse '{}' in column '{}'.",
                        line_no, value, name
                    ))
                })?;
                // -0.0 and 0.0 must be the same grid node
                column.push(parsed + 0.0);
            }
        }
        if columns.first().map_or(true, |c| c.is_empty()) {
            return Err(Error::ParseError("Table does not contain any rows.".into()));
        }
        Ok(FluxTable { names, columns })
    }
}

impl FluxTable {
    /// Read a table from a file.
    ///
    /// A missing file results in [`Error::DataNotFound`].
    pub fn read(path: &Path) -> DmResult<Self> {
        if !path.exists() {
            return Err(Error::DataNotFound(path.display().to_string()));
        }
        let table: FluxTable = fs::read_to_string(path)?.parse()?;
        debug!(
            "Read {} rows of {} columns from {}",
            table.n_rows(),
            table.names.len(),
            path.display()
        );
        Ok(table)
    }

    /// Read the gamma-ray yield table from the data directory.
    ///
    /// See [`crate::data`] for how the data directory is configured.
    pub fn load_default() -> DmResult<Self> {
        FluxTable::read(&data::table_path()?)
    }

    /// Names of all columns in order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    /// Values of a single column.
    pub fn column(&self, name: &str) -> DmResult<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| {
                Error::ParseError(format!(
                    "Column '{}' not found in table, available columns: {:?}",
                    name, self.names
                ))
            })
    }

    /// Sorted unique values of a column.
    pub fn unique(&self, name: &str) -> DmResult<Vec<f64>> {
        Ok(self
            .column(name)?
            .iter()
            .copied()
            .sorted_by(|a, b| a.total_cmp(b))
            .dedup()
            .collect_vec())
    }

    /// Reshape the values column onto the grid spanned by the unique values of the
    /// row and column columns.
    ///
    /// The order of the rows in the file does not matter, but every grid point must
    /// appear exactly once.
    pub fn grid(&self, row_name: &str, col_name: &str, value_name: &str) -> DmResult<TableGrid> {
        let row_nodes = self.unique(row_name)?;
        let col_nodes = self.unique(col_name)?;

        let mut values = DMatrix::from_element(row_nodes.len(), col_nodes.len(), 0.0);
        let mut filled = DMatrix::from_element(row_nodes.len(), col_nodes.len(), false);

        for (row, col, value) in izip!(
            self.column(row_name)?,
            self.column(col_name)?,
            self.column(value_name)?
        ) {
            let idx = (
                node_index(&row_nodes, *row, row_name)?,
                node_index(&col_nodes, *col, col_name)?,
            );
            if filled[idx] {
                return Err(Error::ParseError(format!(
                    "Table contains more than one entry for {}={} and {}={}.",
                    row_name, row, col_name, col
                )));
            }
            filled[idx] = true;
            values[idx] = *value;
        }

        let n_missing = filled.iter().filter(|f| !**f).count();
        if n_missing > 0 {
            return Err(Error::ParseError(format!(
                "Table does not form a complete grid over '{}' and '{}', {} entries are missing.",
                row_name, col_name, n_missing
            )));
        }
        if values.iter().any(|v| *v < 0.0) {
            warn!("Column '{}' contains negative values.", value_name);
        }

        Ok(TableGrid {
            row_nodes,
            col_nodes,
            values,
        })
    }
}

fn node_index(nodes: &[f64], value: f64, name: &str) -> DmResult<usize> {
    nodes
        .binary_search_by(|node| node.total_cmp(&value))
        .map_err(|_| Error::ParseError(format!("Value {} not found in column '{}'.", value, name)))
}
