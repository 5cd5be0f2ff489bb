//! Radius-query trait and shared input validation.
//!
//! # Pluggability
//!
//! Collaborators (e.g. the road-network node locator) are generic over
//! [`RadiusQuery`], so they can run against the linear-scan [`GeoBrute`] for
//! tiny inputs or as a correctness baseline, and against [`GeoSpoke`]
//! everywhere else.
//!
//! [`GeoBrute`]: crate::GeoBrute
//! [`GeoSpoke`]: crate::GeoSpoke

use gs_core::GeoPoint;

use crate::{IndexError, IndexResult};

/// A static point index answering great-circle radius queries.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: queries take `&self` and never
/// mutate, so one index can serve any number of threads concurrently.
pub trait RadiusQuery: Send + Sync {
    /// Build an index over `points`.  The position of each point in the slice
    /// is the index reported by queries.
    ///
    /// Fails with [`IndexError::InvalidInput`] if any point is invalid.
    fn build(points: &[GeoPoint]) -> IndexResult<Self>
    where
        Self: Sized;

    /// Indices of all points whose great-circle distance from `location` is
    /// `<= radius_m` (closed ball).  Each index appears at most once; callers
    /// must not depend on the order.
    ///
    /// Fails with [`IndexError::InvalidArgument`] for a negative or NaN radius
    /// or an invalid `location`.
    fn query_radius(&self, location: GeoPoint, radius_m: f64) -> IndexResult<Vec<usize>>;

    /// Number of indexed points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

/// Split a point set into latitude and longitude columns, rejecting the whole
/// set on the first invalid point.
pub(crate) fn point_columns(points: &[GeoPoint]) -> IndexResult<(Vec<f64>, Vec<f64>)> {
    let mut lats = Vec::with_capacity(points.len());
    let mut lons = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        p.validate()
            .map_err(|e| IndexError::InvalidInput(format!("point {i} {p}: {e}")))?;
        lats.push(p.lat);
        lons.push(p.lon);
    }
    Ok((lats, lons))
}

/// Convert `[lat, lon]` pairs into points.
pub(crate) fn pairs_to_points(pairs: &[[f64; 2]]) -> Vec<GeoPoint> {
    pairs.iter().copied().map(GeoPoint::from).collect()
}

/// Zip separate latitude/longitude columns into points; a length mismatch is a
/// malformed (wrongly shaped) point set.
pub(crate) fn columns_to_points(lats: &[f64], lons: &[f64]) -> IndexResult<Vec<GeoPoint>> {
    if lats.len() != lons.len() {
        return Err(IndexError::InvalidInput(format!(
            "latitude column has {} values but longitude column has {}",
            lats.len(),
            lons.len()
        )));
    }
    Ok(lats
        .iter()
        .zip(lons)
        .map(|(&lat, &lon)| GeoPoint::new(lat, lon))
        .collect())
}

pub(crate) fn check_query(location: GeoPoint, radius_m: f64) -> IndexResult<()> {
    location
        .validate()
        .map_err(|e| IndexError::InvalidArgument(format!("query location {location}: {e}")))?;
    if radius_m.is_nan() || radius_m < 0.0 {
        return Err(IndexError::InvalidArgument(format!(
            "radius must be a non-negative number of metres, got {radius_m}"
        )));
    }
    Ok(())
}
