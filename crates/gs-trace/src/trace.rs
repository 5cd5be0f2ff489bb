//! Columnar vehicle trace.

use gs_core::validate_coordinates;

use crate::{TraceError, TraceResult};

/// A time-ordered sequence of position samples stored column-wise.
///
/// The three base columns are fixed at construction.  Derived columns start
/// out as `None` and are filled in by [`TraceEnhancer`](crate::TraceEnhancer);
/// each one, once present, has the same length as the base columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    timestamps: Vec<f64>,
    lats:       Vec<f64>,
    lons:       Vec<f64>,

    pub(crate) dt:    Option<Vec<f64>>,
    pub(crate) dx:    Option<Vec<f64>>,
    pub(crate) speed: Option<Vec<f64>>,
}

impl Trace {
    /// Build a trace from equal-length columns.
    ///
    /// # Errors
    ///
    /// - [`TraceError::LengthMismatch`] if the columns differ in length.
    /// - [`TraceError::InvalidTimestamp`] for a non-finite timestamp.
    /// - [`TraceError::InvalidCoordinate`] for a non-finite or out-of-range
    ///   coordinate.
    pub fn new(timestamps: Vec<f64>, lats: Vec<f64>, lons: Vec<f64>) -> TraceResult<Self> {
        if timestamps.len() != lats.len() || lats.len() != lons.len() {
            return Err(TraceError::LengthMismatch {
                timestamps: timestamps.len(),
                lats: lats.len(),
                lons: lons.len(),
            });
        }
        for (row, &ts) in timestamps.iter().enumerate() {
            if !ts.is_finite() {
                return Err(TraceError::InvalidTimestamp { row, value: ts });
            }
            validate_coordinates(lats[row], lons[row])
                .map_err(|source| TraceError::InvalidCoordinate { row, source })?;
        }
        Ok(Self { timestamps, lats, lons, dt: None, dx: None, speed: None })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Seconds since the previous sample, if computed.
    pub fn dt(&self) -> Option<&[f64]> {
        self.dt.as_deref()
    }

    /// Metres from the previous sample, if computed.
    pub fn dx(&self) -> Option<&[f64]> {
        self.dx.as_deref()
    }

    /// Average speed since the previous sample in km/h, if computed.
    pub fn speed(&self) -> Option<&[f64]> {
        self.speed.as_deref()
    }
}
