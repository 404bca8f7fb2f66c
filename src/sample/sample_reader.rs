use std::path::Path;

use crate::error::MiniTreesError;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// # Example
/// The following code reads a CSV file with a header row.
/// ```no_run
/// use minitrees::SampleReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
/// Files without a header row take their attribute names
/// from [`SampleReader::attribute_names`]; if neither is given,
/// dummy names are assigned.
pub struct SampleReader<P, S> {
    file: Option<P>,
    delimiter: char,
    has_header: bool,
    names: Option<Vec<String>>,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            delimiter: ',',
            has_header: false,
            names: None,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the cell delimiter.
    /// Default is `','.`
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the attribute (column) names explicitly.
    /// Explicit names win over a header row.
    pub fn attribute_names<N, T>(mut self, names: T) -> Self
        where N: ToString,
              T: AsRef<[N]>,
    {
        let names = names.as_ref()
            .iter()
            .map(|name| name.to_string())
            .collect();
        self.names = Some(names);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample, MiniTreesError>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, MiniTreesError> {
        let file = self.file.ok_or(MiniTreesError::NoInputFile)?;

        let sample = Sample::read_delimited(
            file.as_ref(),
            self.delimiter,
            self.has_header,
            self.names,
        )?;

        match self.target {
            Some(target) => sample.set_target(target),
            None => Ok(sample),
        }
    }
}
