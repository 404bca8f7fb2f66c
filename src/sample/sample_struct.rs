use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use polars::prelude::*;

use crate::error::MiniTreesError;


/// Struct `Sample` holds a categorical dataset.
/// Every cell is a string drawn from a finite set of values,
/// and the class label is just another column,
/// selected by [`Sample::set_target`].
///
/// Invariant: every row has exactly as many cells as there are
/// attribute names. All constructors check this and answer
/// [`MiniTreesError::RaggedRow`] on violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(crate) names: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
    pub(crate) target: Option<usize>,
}


impl Sample {
    /// Construct a `Sample` from attribute names and rows.
    pub fn from_rows<S, T>(names: T, rows: Vec<Vec<String>>)
        -> Result<Self, MiniTreesError>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref()
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        let sample = Self { names, rows, target: None, };
        sample.check_rows()?;
        Ok(sample)
    }


    /// Read a CSV format file to `Sample` type.
    /// See [`SampleReader`](crate::SampleReader) for other delimiters
    /// and for files without a header row.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self, MiniTreesError>
        where P: AsRef<Path>,
    {
        Self::read_delimited(file.as_ref(), ',', has_header, None)
    }


    /// Convert a `polars::DataFrame` into a `Sample`.
    /// Every column is cast to a string column;
    /// missing values become empty cells.
    pub fn from_dataframe(data: DataFrame) -> Result<Self, MiniTreesError> {
        let (n_rows, _) = data.shape();

        let names = data.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        let mut columns = Vec::new();
        for series in data.get_columns() {
            let casted = series.cast(&DataType::Utf8)
                .map_err(|e| MiniTreesError::DataFrame(e.to_string()))?;
            let column = casted.utf8()
                .map_err(|e| MiniTreesError::DataFrame(e.to_string()))?
                .into_iter()
                .map(|cell| cell.unwrap_or("").to_string())
                .collect::<Vec<_>>();
            columns.push(column);
        }

        let rows = (0..n_rows)
            .map(|i| {
                columns.iter()
                    .map(|column| column[i].clone())
                    .collect()
            })
            .collect();

        let sample = Self { names, rows, target: None, };
        sample.check_rows()?;
        Ok(sample)
    }


    /// Reads a delimited text file.
    /// Blank and whitespace-only lines are skipped;
    /// each cell is trimmed but empty cells are kept.
    /// Explicitly given `names` win over a header row
    /// (the header line is still consumed).
    pub(crate) fn read_delimited(
        file: &Path,
        delimiter: char,
        has_header: bool,
        names: Option<Vec<String>>,
    ) -> Result<Self, MiniTreesError>
    {
        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut header = names;
        let mut want_header = has_header;
        let mut rows = Vec::new();

        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(delimiter)
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>();

            if want_header {
                want_header = false;
                if header.is_none() {
                    header = Some(cells);
                }
                continue;
            }
            rows.push(cells);
        }

        let n_columns = rows.first().map(|row| row.len()).unwrap_or(0);
        let names = match header {
            Some(names) => names,
            None => (1..=n_columns).map(|i| format!("Feat. [{i}]")).collect(),
        };

        if !rows.is_empty() && names.len() != n_columns {
            return Err(MiniTreesError::NameCountMismatch {
                n_names: names.len(),
                n_columns,
            });
        }

        let sample = Self { names, rows, target: None, };
        sample.check_rows()?;
        Ok(sample)
    }


    /// Select the column named `target` as the class label.
    /// The remaining columns become the splittable features.
    pub fn set_target<S: AsRef<str>>(mut self, target: S)
        -> Result<Self, MiniTreesError>
    {
        let target = target.as_ref();
        let pos = self.names.iter()
            .position(|name| name == target)
            .ok_or_else(|| MiniTreesError::TargetNotFound(target.to_string()))?;

        self.target = Some(pos);
        Ok(self)
    }


    /// Returns the pair of the number of rows and
    /// the number of attribute columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.names.len())
    }


    /// Returns the attribute (column) names.
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the column index of the target attribute.
    pub fn target_index(&self) -> Result<usize, MiniTreesError> {
        self.target.ok_or(MiniTreesError::TargetNotSet)
    }


    /// Returns the splittable column indices,
    /// every column except the target one.
    pub fn feature_indices(&self) -> Vec<usize> {
        (0..self.names.len())
            .filter(|&i| Some(i) != self.target)
            .collect()
    }


    /// Returns every row index, `0..n_rows`.
    pub fn indices(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }


    /// Returns the `idx`-th row.
    pub fn at(&self, idx: usize) -> &[String] {
        &self.rows[idx][..]
    }


    /// Returns the cell at the given row and column.
    pub fn value(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }


    /// Every row must have exactly one cell per attribute name.
    fn check_rows(&self) -> Result<(), MiniTreesError> {
        let expected = self.names.len();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(MiniTreesError::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }


    /// A new `Sample` over the rows selected by `ix`,
    /// keeping names and target.
    pub(crate) fn subset(&self, ix: &[usize]) -> Self {
        let rows = ix.iter()
            .map(|&i| self.rows[i].clone())
            .collect();

        Self { names: self.names.clone(), rows, target: self.target, }
    }


    /// Split `self` into a `(rest, picked)` pair, where `picked` holds
    /// the rows selected by `ix[start..end]` and `rest` the others.
    /// Out-of-range bounds are clamped.
    pub(crate) fn split_at_indices(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let end = end.min(ix.len());
        let start = start.min(end);

        let picked = self.subset(&ix[start..end]);

        let rest = ix[..start].iter()
            .chain(ix[end..].iter())
            .copied()
            .collect::<Vec<_>>();
        let rest = self.subset(&rest[..]);

        (rest, picked)
    }
}
