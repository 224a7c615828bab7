//! CSV import for externally produced benchmark results.
//!
//! Allows comparing participants whose metrics were computed outside the
//! benchmarking platform, without re-shaping them into the dataset JSON
//! by hand. The importer is flexible about column naming: configure the
//! columns explicitly or let it auto-detect from common aliases.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bench_rank::import::{CsvImporter, CsvSchema};
//!
//! let schema = CsvSchema::builder()
//!     .tool_column("participant")
//!     .x_column("precision")
//!     .y_column("recall")
//!     .build();
//!
//! let participants = CsvImporter::new(schema).import("results.csv")?;
//! ```

use std::path::Path;

use crate::dataset::Participant;
use crate::error::{Error, Result};

/// Schema for CSV import.
#[derive(Debug, Clone, Default)]
pub struct CsvSchema {
    /// Column name for the tool identifier.
    pub tool_column: Option<String>,
    /// Column name for the x metric.
    pub x_column: Option<String>,
    /// Column name for the y metric.
    pub y_column: Option<String>,
    /// Column name for the x standard error.
    pub stderr_x_column: Option<String>,
    /// Column name for the y standard error.
    pub stderr_y_column: Option<String>,
}

impl CsvSchema {
    /// Create a schema builder.
    #[must_use]
    pub fn builder() -> CsvSchemaBuilder {
        CsvSchemaBuilder::default()
    }

    /// Create a schema that auto-detects columns from common names.
    #[must_use]
    pub fn auto_detect() -> Self {
        Self::default()
    }

    /// Try to find a column index by name (case-insensitive, with aliases).
    fn find_column(
        &self,
        headers: &[&str],
        primary: Option<&str>,
        aliases: &[&str],
    ) -> Option<usize> {
        if let Some(name) = primary {
            if let Some(idx) = find_header_index(headers, name) {
                return Some(idx);
            }
        }
        for alias in aliases {
            if let Some(idx) = find_header_index(headers, alias) {
                return Some(idx);
            }
        }
        None
    }
}

fn find_header_index(headers: &[&str], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// Builder for [`CsvSchema`].
#[derive(Debug, Default)]
pub struct CsvSchemaBuilder {
    schema: CsvSchema,
}

impl CsvSchemaBuilder {
    /// Set the tool identifier column name.
    #[must_use]
    pub fn tool_column(mut self, name: impl Into<String>) -> Self {
        self.schema.tool_column = Some(name.into());
        self
    }

    /// Set the x metric column name.
    #[must_use]
    pub fn x_column(mut self, name: impl Into<String>) -> Self {
        self.schema.x_column = Some(name.into());
        self
    }

    /// Set the y metric column name.
    #[must_use]
    pub fn y_column(mut self, name: impl Into<String>) -> Self {
        self.schema.y_column = Some(name.into());
        self
    }

    /// Set the x standard error column name.
    #[must_use]
    pub fn stderr_x_column(mut self, name: impl Into<String>) -> Self {
        self.schema.stderr_x_column = Some(name.into());
        self
    }

    /// Set the y standard error column name.
    #[must_use]
    pub fn stderr_y_column(mut self, name: impl Into<String>) -> Self {
        self.schema.stderr_y_column = Some(name.into());
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> CsvSchema {
        self.schema
    }
}

/// CSV importer producing scatter-shaped participants.
#[derive(Debug, Clone, Default)]
pub struct CsvImporter {
    schema: CsvSchema,
}

impl CsvImporter {
    /// Create an importer with the given schema.
    #[must_use]
    pub fn new(schema: CsvSchema) -> Self {
        Self { schema }
    }

    /// Create an importer that auto-detects columns.
    #[must_use]
    pub fn auto_detect() -> Self {
        Self::new(CsvSchema::auto_detect())
    }

    /// Import participants from a CSV file.
    pub fn import(&self, path: impl AsRef<Path>) -> Result<Vec<Participant>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        self.import_reader(&mut reader)
    }

    /// Import participants from a CSV string.
    pub fn import_str(&self, content: &str) -> Result<Vec<Participant>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        self.import_reader(&mut reader)
    }

    fn import_reader<R: std::io::Read>(
        &self,
        reader: &mut csv::Reader<R>,
    ) -> Result<Vec<Participant>> {
        let headers = reader.headers()?.clone();
        let headers: Vec<&str> = headers.iter().collect();

        let tool_idx = self
            .schema
            .find_column(
                &headers,
                self.schema.tool_column.as_deref(),
                &["tool_id", "tool", "participant", "name", "id"],
            )
            .ok_or_else(|| Error::CsvImport {
                line: 1,
                reason: "no tool identifier column found".to_string(),
            })?;
        let x_idx = self
            .schema
            .find_column(
                &headers,
                self.schema.x_column.as_deref(),
                &["metric_x", "x", "x_value"],
            )
            .ok_or_else(|| Error::CsvImport {
                line: 1,
                reason: "no x metric column found".to_string(),
            })?;
        let y_idx = self
            .schema
            .find_column(
                &headers,
                self.schema.y_column.as_deref(),
                &["metric_y", "y", "y_value"],
            )
            .ok_or_else(|| Error::CsvImport {
                line: 1,
                reason: "no y metric column found".to_string(),
            })?;
        let stderr_x_idx = self.schema.find_column(
            &headers,
            self.schema.stderr_x_column.as_deref(),
            &["stderr_x", "x_err"],
        );
        let stderr_y_idx = self.schema.find_column(
            &headers,
            self.schema.stderr_y_column.as_deref(),
            &["stderr_y", "y_err"],
        );

        let mut participants = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let line = row + 2; // 1-based, after the header
            let record = record?;

            participants.push(Participant::Scatter {
                tool_id: get_field(&record, tool_idx, line)?.to_string(),
                metric_x: parse_field(&record, x_idx, line)?,
                metric_y: parse_field(&record, y_idx, line)?,
                stderr_x: parse_optional(&record, stderr_x_idx, line)?,
                stderr_y: parse_optional(&record, stderr_y_idx, line)?,
            });
        }

        Ok(participants)
    }
}

fn get_field<'r>(record: &'r csv::StringRecord, idx: usize, line: usize) -> Result<&'r str> {
    record.get(idx).ok_or_else(|| Error::CsvImport {
        line,
        reason: format!("missing column {idx}"),
    })
}

fn parse_field(record: &csv::StringRecord, idx: usize, line: usize) -> Result<f64> {
    let raw = get_field(record, idx, line)?;
    raw.parse::<f64>().map_err(|_| Error::CsvImport {
        line,
        reason: format!("not a number: {raw:?}"),
    })
}

fn parse_optional(
    record: &csv::StringRecord,
    idx: Option<usize>,
    line: usize,
) -> Result<Option<f64>> {
    let Some(idx) = idx else { return Ok(None) };
    if get_field(record, idx, line)?.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parse_field(record, idx, line)?))
    }
}
