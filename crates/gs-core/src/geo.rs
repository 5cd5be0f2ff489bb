//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Every distance in the
//! workspace goes through [`haversine_m`]; the vector forms are element-wise
//! applications of it, so a distance computed one way is bit-identical to the
//! same distance computed the other way.  Index code relies on that to give
//! exactly the same answers as a linear scan.

use crate::{GeoError, GeoResult};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        haversine_m(self.lat, self.lon, other.lat, other.lon)
    }

    /// Check that both coordinates are finite and inside the WGS-84 ranges.
    #[inline]
    pub fn validate(self) -> GeoResult<()> {
        validate_coordinates(self.lat, self.lon)
    }
}

impl From<[f64; 2]> for GeoPoint {
    /// `[lat, lon]` order.
    #[inline]
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Haversine distance in metres between `(lat0, lon0)` and `(lat1, lon1)`.
///
/// Inputs are degrees and are expected to be normalized (see
/// [`validate_coordinates`]).  Returns exactly `0.0` for identical inputs.
pub fn haversine_m(lat0: f64, lon0: f64, lat1: f64, lon1: f64) -> f64 {
    let d_lat = (lat1 - lat0).to_radians();
    let d_lon = (lon1 - lon0).to_radians();

    let phi0 = lat0.to_radians();
    let phi1 = lat1.to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + phi0.cos() * phi1.cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal pairs.
    let a = a.min(1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Distance from `origin` to every `(lats[i], lons[i])`, one value per element.
///
/// # Errors
///
/// [`GeoError::LengthMismatch`] if the two columns differ in length.
pub fn haversine_to_many(origin: GeoPoint, lats: &[f64], lons: &[f64]) -> GeoResult<Vec<f64>> {
    check_lengths(lats.len(), lons.len())?;
    Ok(lats
        .iter()
        .zip(lons)
        .map(|(&lat, &lon)| haversine_m(origin.lat, origin.lon, lat, lon))
        .collect())
}

/// Element-wise distance between two equal-length coordinate arrays:
/// `out[i] = haversine_m(lats0[i], lons0[i], lats1[i], lons1[i])`.
pub fn haversine_pairwise(
    lats0: &[f64],
    lons0: &[f64],
    lats1: &[f64],
    lons1: &[f64],
) -> GeoResult<Vec<f64>> {
    check_lengths(lats0.len(), lons0.len())?;
    check_lengths(lats1.len(), lons1.len())?;
    check_lengths(lats0.len(), lats1.len())?;
    Ok((0..lats0.len())
        .map(|i| haversine_m(lats0[i], lons0[i], lats1[i], lons1[i]))
        .collect())
}

#[inline]
fn check_lengths(left: usize, right: usize) -> GeoResult<()> {
    if left != right {
        return Err(GeoError::LengthMismatch { left, right });
    }
    Ok(())
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Validate a `(lat, lon)` pair in degrees.
///
/// Latitude must lie in `[-90, 90]`, longitude in `[-180, 180]`, and both must
/// be finite.
pub fn validate_coordinates(lat: f64, lon: f64) -> GeoResult<()> {
    if !lat.is_finite() {
        return Err(GeoError::NonFiniteLatitude(lat));
    }
    if !lon.is_finite() {
        return Err(GeoError::NonFiniteLongitude(lon));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeoError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeoError::LongitudeOutOfRange(lon));
    }
    Ok(())
}
