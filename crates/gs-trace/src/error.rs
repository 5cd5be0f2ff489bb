//! Error types for gs-trace.

use thiserror::Error;

use gs_core::GeoError;

/// Errors raised while building, enriching, or (de)serializing a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("column length mismatch: {timestamps} timestamps, {lats} latitudes, {lons} longitudes")]
    LengthMismatch { timestamps: usize, lats: usize, lons: usize },

    #[error("row {row}: {source}")]
    InvalidCoordinate { row: usize, source: GeoError },

    #[error("row {row}: timestamp must be finite, got {value}")]
    InvalidTimestamp { row: usize, value: f64 },

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("missing column {0:?}")]
    MissingColumn(String),

    #[error("row {row}, column {column:?}: cannot parse {value:?} as a number")]
    Parse { row: usize, column: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, TraceError>`.
pub type TraceResult<T> = Result<T, TraceError>;
