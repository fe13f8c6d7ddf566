use std::io::Read;
use std::path::PathBuf;

use crate::math::interpolation::sampletable::SampleTable;

use super::accelerationsource::AccelerationSource;
use super::sourceerror::SourceError;

/// Acceleration profile stored in a csv file.
///
/// Without a column name the file is read as headerless and the first column
/// is used. With a column name the first row is taken as the header row and
/// the matching column is used.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    column: Option<String>
}

impl CsvSource {
    pub fn new<P>(path: P, column: Option<String>) -> CsvSource where
        P: Into<PathBuf> {
        CsvSource { path: path.into(), column }
    }

    /// Relative paths are resolved against the current working directory.
    pub fn resolved_path(&self) -> Result<PathBuf, SourceError> {
        if self.path.is_relative() {
            Ok(std::env::current_dir()?.join(&self.path))
        } else {
            Ok(self.path.clone())
        }
    }

    pub fn read_from<R>(&self, reader: R) -> Result<SampleTable, SourceError> where
        R: Read {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.column.is_some())
            .from_reader(reader);

        let data_index = match &self.column {
            Some(column) => csv_reader
                .headers()?
                .iter()
                .position(|header| header.trim() == column)
                .ok_or_else(|| SourceError::ColumnNotFound(column.to_owned()))?,
            None => 0
        };

        let mut samples = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = index + 1;
            let value = record
                .get(data_index)
                .ok_or(SourceError::MissingValue { row, column: data_index })?;
            let sample = value
                .trim()
                .parse::<f64>()
                .map_err(|_| SourceError::InvalidNumber { row, value: value.to_owned() })?;
            samples.push(sample);
        }

        SampleTable::new(samples).ok_or(SourceError::Empty)
    }
}

impl AccelerationSource for CsvSource {
    fn load(&self) -> Result<SampleTable, SourceError> {
        let path = self.resolved_path()?;
        let file = std::fs::File::open(&path)?;
        let table = self.read_from(file)?;
        log::info!("loaded {} acceleration samples from {}", table.len(), path.display());
        Ok(table)
    }
}
