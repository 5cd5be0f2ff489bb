//! Coordinate and distance error type.
//!
//! Sub-crates define their own error enums and map `GeoError` into the
//! variant that fits the call site (construction input vs. query argument).

use thiserror::Error;

/// Errors raised while validating coordinates or combining coordinate columns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude must be finite, got {0}")]
    NonFiniteLatitude(f64),

    #[error("longitude must be finite, got {0}")]
    NonFiniteLongitude(f64),

    #[error("latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("column length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Shorthand result type for `gs-core`.
pub type GeoResult<T> = Result<T, GeoError>;
