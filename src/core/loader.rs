//! CSV loader for roster files
//!
//! Expected header:
//! `category,requirement,name,credits,attendance,assignment,midterm,final`

use crate::core::models::{CourseRecord, Field};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a roster file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed into a course.
    #[error("row {row}: {source}")]
    Parse {
        /// 1-based course row
        row: usize,
        /// Underlying CSV or deserialisation error
        #[source]
        source: csv::Error,
    },

    /// A numeric column is outside its allowed range.
    #[error("row {row}: {field} = {value} is outside {min}..={max}")]
    OutOfRange {
        /// 1-based course row
        row: usize,
        /// Offending column
        field: Field,
        /// Value read from the file
        value: u8,
        /// Lowest accepted value
        min: u8,
        /// Highest accepted value
        max: u8,
    },
}

/// Parse a roster CSV file into course records, in file order
///
/// # Errors
/// Returns an error if the file cannot be read, a row does not parse, or a
/// numeric column is out of range
pub fn parse_roster_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>, LoadError> {
    let file = File::open(path.as_ref())?;
    parse_roster_reader(file)
}

/// Parse roster CSV from any reader
///
/// Rows are reported 1-based, counting the first course after the header as row 1.
///
/// # Errors
/// Same as [`parse_roster_csv`]
pub fn parse_roster_reader<R: Read>(reader: R) -> Result<Vec<CourseRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<CourseRecord>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|source| LoadError::Parse { row, source })?;
        check_ranges(&record, row)?;
        records.push(record);
    }

    debug!(courses = records.len(), "parsed roster csv");
    Ok(records)
}

fn check_ranges(record: &CourseRecord, row: usize) -> Result<(), LoadError> {
    for field in Field::NUMERIC {
        let (Some((min, max)), Some(value)) = (field.bounds(), record.numeric(field)) else {
            continue;
        };
        if value < min || value > max {
            return Err(LoadError::OutOfRange {
                row,
                field,
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}
