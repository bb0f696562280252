//! Output format abstraction.

use macroetl_types::Record;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// There were no records to derive a schema from.
    #[error("Cannot write an empty record set")]
    Empty,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow/Parquet error.
    #[error("Parquet error: {0}")]
    Parquet(String),
}

/// Trait for record formatters.
pub trait Formatter: Send + Sync {
    /// Writes records to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if `records` is empty or writing fails.
    fn write_records<W: Write + Send>(&self, records: &[Record], writer: W)
    -> Result<(), FormatError>;

    /// Serializes records into an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `records` is empty or writing fails.
    fn to_bytes(&self, records: &[Record]) -> Result<Vec<u8>, FormatError> {
        let mut buffer = Vec::new();
        self.write_records(records, &mut buffer)?;
        Ok(buffer)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
