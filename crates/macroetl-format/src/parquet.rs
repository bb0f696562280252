//! Apache Parquet output format.

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use macroetl_types::Record;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

use crate::schema::{Column, ColumnType, infer_columns, to_schema};
use crate::{FormatError, Formatter};

/// Parquet formatter.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    fn column_array(column: &Column, records: &[Record]) -> ArrayRef {
        let values = records.iter().map(|record| record.get(&column.name));
        match column.kind {
            ColumnType::Boolean => Arc::new(
                values
                    .map(|v| v.and_then(Value::as_bool))
                    .collect::<BooleanArray>(),
            ),
            ColumnType::Int64 => Arc::new(
                values
                    .map(|v| v.and_then(Value::as_i64))
                    .collect::<Int64Array>(),
            ),
            ColumnType::Float64 => Arc::new(
                values
                    .map(|v| v.and_then(Value::as_f64))
                    .collect::<Float64Array>(),
            ),
            ColumnType::Utf8 => Arc::new(
                values
                    .map(|v| v.and_then(utf8_value))
                    .collect::<StringArray>(),
            ),
        }
    }

    /// Converts records to an Arrow `RecordBatch`.
    fn records_to_batch(columns: &[Column], records: &[Record]) -> Result<RecordBatch, FormatError> {
        let arrays = columns
            .iter()
            .map(|column| Self::column_array(column, records))
            .collect();

        RecordBatch::try_new(Arc::new(to_schema(columns)), arrays)
            .map_err(|e| FormatError::Parquet(e.to_string()))
    }
}

/// Strings are kept verbatim, other values rendered as JSON text.
fn utf8_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl Formatter for ParquetFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[Record],
        writer: W,
    ) -> Result<(), FormatError> {
        if records.is_empty() {
            return Err(FormatError::Empty);
        }

        let columns = infer_columns(records);
        let schema = Arc::new(to_schema(&columns));
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, schema, Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        for chunk in records.chunks(self.row_group_size) {
            let batch = Self::records_to_batch(&columns, chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}
