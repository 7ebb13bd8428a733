use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashSet;
use std::ops::Index;

use polars::prelude::{DataFrame, DataType};
use tracing::warn;

use super::row::Row;
use crate::error::TreeError;


/// Struct `Sample` holds an ordered batch of [`Row`]s
/// together with the column names seen in them.
#[derive(Debug, Clone, Default)]
pub struct Sample {
    pub(super) names: Vec<String>,
    pub(super) rows: Vec<Row>,
}


impl Sample {
    /// Construct a `Sample` from rows built in memory.
    /// Column names are collected in order of first appearance;
    /// names inside a single row are taken in sorted order
    /// so that the result does not depend on hashing.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for row in rows.iter() {
            let mut row_names = row.names().collect::<Vec<_>>();
            row_names.sort_unstable();
            for name in row_names {
                if seen.insert(name.to_string()) {
                    names.push(name.to_string());
                }
            }
        }

        Self { names, rows }
    }


    /// Read a CSV format file to `Sample` type.
    ///
    /// Empty cells, `NaN`, and `?` are read as missing values.
    /// Any other cell that is not a number is also read as missing,
    /// with a warning; encoding categorical text is up to the caller.
    /// If `has_header` is `false`, the columns are named
    /// `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self, TreeError>
        where P: AsRef<Path>,
    {
        let path = file.as_ref();
        let io_error = |source: std::io::Error| TreeError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Open the given `file`.
        let file = File::open(path).map_err(io_error)?;
        let mut lines = BufReader::new(file).lines().enumerate();

        let mut names = Vec::new();
        if has_header {
            if let Some((_, line)) = lines.next() {
                names = line.map_err(io_error)?
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>();
            }
        }

        let mut rows = Vec::new();
        for (k, line) in lines {
            let line = line.map_err(io_error)?;
            let line_no = k + 1;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',').collect::<Vec<_>>();

            // If the header does not exist,
            // construct a dummy header from the first row.
            if names.is_empty() {
                names = (1..=cells.len())
                    .map(|i| format!("Feat. [{i}]"))
                    .collect();
            }

            if cells.len() != names.len() {
                return Err(TreeError::RowLength {
                    line: line_no,
                    expected: names.len(),
                    got: cells.len(),
                });
            }

            let row = names.iter()
                .zip(cells)
                .map(|(name, cell)| {
                    (name.as_str(), parse_cell(cell, name, line_no))
                })
                .collect::<Row>();
            rows.push(row);
        }

        Ok(Self { names, rows })
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// Every column is cast to `f64`; nulls become missing values.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self, TreeError> {
        let n_sample = data.height();
        let mut rows = vec![Row::new(); n_sample];
        let mut names = Vec::with_capacity(data.width());

        for series in data.get_columns() {
            let name = series.name().to_string();
            let values = series.cast(&DataType::Float64)?;
            let values = values.f64()?;

            rows.iter_mut()
                .zip(values.into_iter())
                .for_each(|(row, value)| {
                    row.insert(name.clone(), value.unwrap_or(f64::NAN));
                });
            names.push(name);
        }

        Ok(Self { names, rows })
    }


    /// Returns the rows of this sample.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns the column names, in file (or first-seen) order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns every column name except `target`.
    /// This is the default attribute set for growing a tree.
    pub fn attributes_except(&self, target: &str) -> Vec<String> {
        self.names.iter()
            .filter(|name| name.as_str() != target)
            .cloned()
            .collect()
    }


    /// Returns the pair of the number of rows and columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.names.len())
    }


    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if this sample has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns an iterator over the rows.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}


impl Index<usize> for Sample {
    type Output = Row;
    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx]
    }
}


impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}


fn parse_cell(cell: &str, name: &str, line: usize) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() || cell == "?" {
        return f64::NAN;
    }

    match cell.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                line,
                column = name,
                value = cell,
                "non-numeric value read as missing"
            );
            f64::NAN
        },
    }
}
