//! Column naming and timestamp unit.

use serde::{Deserialize, Serialize};

/// Names of the trace columns and the timestamp resolution.
///
/// Typically loaded from a TOML/JSON file by the application and shared by
/// the CSV reader, the writer, and [`TraceEnhancer`](crate::TraceEnhancer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub ts_col: String,
    pub lat_col: String,
    pub lon_col: String,
    pub dx_col: String,
    pub dt_col: String,
    pub speed_col: String,

    /// Timestamp units per second.  1000 for millisecond timestamps.
    pub one_second: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            ts_col:    "Timestamp(ms)".to_owned(),
            lat_col:   "Latitude[deg]".to_owned(),
            lon_col:   "Longitude[deg]".to_owned(),
            dx_col:    "dx".to_owned(),
            dt_col:    "dt".to_owned(),
            speed_col: "v".to_owned(),
            one_second: 1000.0,
        }
    }
}
