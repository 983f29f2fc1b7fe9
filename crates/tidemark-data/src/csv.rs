#![forbid(unsafe_code)]

//! Hand-rolled delimited-text ingest.
//!
//! The source files are small, regular, and slightly off-standard:
//! semicolon delimiters, decimal commas, and the odd preamble row
//! before the data starts. A [`Dialect`] names those quirks, a
//! [`Table`] holds the split fields, and [`decode_records`] turns rows
//! into [`TemporalRecord`]s by header name.
//!
//! # Usage
//!
//! ```ignore
//! use tidemark_data::csv::{ColumnMap, Dialect, Table, decode_records};
//!
//! let table = Table::parse(text, Dialect::semicolon())?;
//! let (records, skips) = decode_records(&table, &ColumnMap::disasters())?;
//! ```
//!
//! # Invariants
//!
//! 1. A row with an unparseable year is counted and skipped, never
//!    fatal. Decoding always returns every parseable row.
//! 2. Missing *named* columns fail before any row is decoded.
//! 3. Blank lines never become rows.
//!
//! # Failure Modes
//!
//! [`IngestError::Empty`] for input with no usable lines,
//! [`IngestError::MissingColumn`] when the mapping names a header the
//! table does not have.

use std::fmt;

use serde::{Deserialize, Serialize};
use tidemark_core::TemporalRecord;

// ---------------------------------------------------------------------------
// IngestError
// ---------------------------------------------------------------------------

/// Problems that stop ingest before row decoding starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The input had no non-blank lines.
    Empty,
    /// The mapping names a header the table does not carry.
    MissingColumn { name: String },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no usable lines in input"),
            Self::MissingColumn { name } => write!(f, "missing column: {name:?}"),
        }
    }
}

impl std::error::Error for IngestError {}

// ---------------------------------------------------------------------------
// Dialect
// ---------------------------------------------------------------------------

/// The shape of one source file family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Field separator.
    pub delimiter: char,
    /// Lines consumed before the data starts. The first non-blank line
    /// is always read as the header row; further preamble is discarded.
    pub header_rows: usize,
    /// Treat `,` as the decimal separator when parsing numbers.
    pub decimal_comma: bool,
}

impl Dialect {
    /// The common case here: `;` fields, one header row, decimal commas.
    #[must_use]
    pub const fn semicolon() -> Self {
        Self {
            delimiter: ';',
            header_rows: 1,
            decimal_comma: true,
        }
    }

    /// Plain comma-separated input with `.` decimals.
    #[must_use]
    pub const fn comma() -> Self {
        Self {
            delimiter: ',',
            header_rows: 1,
            decimal_comma: false,
        }
    }

    /// Set the preamble size (builder pattern). Some sources carry
    /// several lines of provenance notes before the data.
    #[must_use]
    pub const fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::semicolon()
    }
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Parse a number, normalizing a decimal comma first when asked.
/// Non-finite results are treated as unparseable.
#[must_use]
pub fn parse_number(raw: &str, decimal_comma: bool) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = if decimal_comma && raw.contains(',') {
        raw.replace(',', ".").parse::<f64>()
    } else {
        raw.parse::<f64>()
    };
    parsed.ok().filter(|v| v.is_finite())
}

/// Parse a calendar year. Accepts plain integers and fractional forms
/// like `1950.0` or `1950,0`, truncating toward zero.
#[must_use]
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    parse_number(raw, true)
        .filter(|v| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v))
        .map(|v| v.trunc() as i32)
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A parsed delimited file: header names plus raw field rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    dialect: Dialect,
}

impl Table {
    /// Split text into a table under the given dialect.
    ///
    /// The first non-blank line becomes the header row; the next
    /// `header_rows - 1` lines are discarded as preamble; blank lines
    /// anywhere are dropped.
    pub fn parse(text: &str, dialect: Dialect) -> Result<Self, IngestError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .ok_or(IngestError::Empty)?;

        let headers = split_fields(lines[first], dialect.delimiter);
        let data_start = (first + dialect.header_rows.max(1)).min(lines.len());
        let rows = lines[data_start..]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| split_fields(line, dialect.delimiter))
            .collect();

        Ok(Self {
            headers,
            rows,
            dialect,
        })
    }

    /// Header names, in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Resolve a header name to a column index.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw field at `(row, col)`. Short rows simply miss trailing fields.
    #[must_use]
    pub fn field(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Numeric field at `(row, col)`, under this table's dialect.
    #[must_use]
    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        self.field(row, col)
            .and_then(|raw| parse_number(raw, self.dialect.decimal_comma))
    }

    /// Year field at `(row, col)`.
    #[must_use]
    pub fn year(&self, row: usize, col: usize) -> Option<i32> {
        self.field(row, col).and_then(parse_year)
    }
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_owned())
        .collect()
}

// ---------------------------------------------------------------------------
// Record decoding
// ---------------------------------------------------------------------------

/// Header names for the record fields. Only `year` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub year: String,
    pub magnitude: Option<String>,
    pub category: Option<String>,
    pub label: Option<String>,
    pub detail: Option<String>,
}

impl ColumnMap {
    /// Map with just a year column.
    #[must_use]
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            magnitude: None,
            category: None,
            label: None,
            detail: None,
        }
    }

    /// Name the magnitude column (builder pattern).
    #[must_use]
    pub fn with_magnitude(mut self, name: impl Into<String>) -> Self {
        self.magnitude = Some(name.into());
        self
    }

    /// Name the category column (builder pattern).
    #[must_use]
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    /// Name the label column (builder pattern).
    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.label = Some(name.into());
        self
    }

    /// Name the detail column (builder pattern).
    #[must_use]
    pub fn with_detail(mut self, name: impl Into<String>) -> Self {
        self.detail = Some(name.into());
        self
    }

    /// The disaster-impact file headers.
    #[must_use]
    pub fn disasters() -> Self {
        Self::new("start_year")
            .with_magnitude("total_affected")
            .with_category("disaster_type")
            .with_label("country")
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::disasters()
    }
}

/// How many skip reasons a [`SkipReport`] retains verbatim.
const SKIP_SAMPLE_LIMIT: usize = 5;

/// Count of dropped rows, with the first few reasons kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkipReport {
    /// Rows dropped for an unparseable year.
    pub skipped: usize,
    /// Up to [`SKIP_SAMPLE_LIMIT`] human-readable reasons.
    pub samples: Vec<String>,
}

impl SkipReport {
    fn note(&mut self, row: usize, raw: &str) {
        self.skipped += 1;
        if self.samples.len() < SKIP_SAMPLE_LIMIT {
            self.samples.push(format!("row {row}: bad year {raw:?}"));
        }
    }
}

/// Decode every row of a table into records.
///
/// Rows with an unparseable year are counted in the report and dropped;
/// everything else degrades field by field (a bad magnitude is just a
/// missing magnitude).
pub fn decode_records(
    table: &Table,
    map: &ColumnMap,
) -> Result<(Vec<TemporalRecord>, SkipReport), IngestError> {
    let year_col = require_column(table, &map.year)?;
    let magnitude_col = optional_column(table, map.magnitude.as_deref())?;
    let category_col = optional_column(table, map.category.as_deref())?;
    let label_col = optional_column(table, map.label.as_deref())?;
    let detail_col = optional_column(table, map.detail.as_deref())?;

    let mut records = Vec::with_capacity(table.len());
    let mut report = SkipReport::default();

    for row in 0..table.len() {
        let raw_year = table.field(row, year_col).unwrap_or("");
        let Some(year) = parse_year(raw_year) else {
            report.note(row, raw_year);
            continue;
        };
        let text_at = |col: Option<usize>| {
            col.and_then(|c| table.field(row, c))
                .unwrap_or("")
                .to_owned()
        };
        records.push(TemporalRecord {
            year: Some(year),
            magnitude: magnitude_col.and_then(|c| table.number(row, c)),
            category: text_at(category_col),
            label: text_at(label_col),
            detail: detail_col
                .and_then(|c| table.field(row, c))
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            horizontal_seed: None,
        });
    }

    if report.skipped > 0 {
        tracing::warn!(
            skipped = report.skipped,
            decoded = records.len(),
            "dropped rows with unparseable years"
        );
    } else {
        tracing::debug!(decoded = records.len(), "decoded table");
    }

    Ok((records, report))
}

fn require_column(table: &Table, name: &str) -> Result<usize, IngestError> {
    table.column(name).ok_or_else(|| IngestError::MissingColumn {
        name: name.to_owned(),
    })
}

fn optional_column(table: &Table, name: Option<&str>) -> Result<Option<usize>, IngestError> {
    match name {
        Some(name) => require_column(table, name).map(Some),
        None => Ok(None),
    }
}
