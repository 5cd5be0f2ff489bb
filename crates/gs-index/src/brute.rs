//! Linear-scan reference index.

use gs_core::{GeoPoint, haversine_to_many};

use crate::query::{check_query, columns_to_points, pairs_to_points, point_columns};
use crate::{IndexError, IndexResult, RadiusQuery};

/// Answers radius queries by measuring the distance to every stored point.
///
/// O(N) per query with no precomputation.  This is the correctness oracle for
/// [`GeoSpoke`](crate::GeoSpoke) and a reasonable choice for a few hundred
/// points.
#[derive(Clone, Debug)]
pub struct GeoBrute {
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl GeoBrute {
    pub fn new(points: &[GeoPoint]) -> IndexResult<Self> {
        let (lats, lons) = point_columns(points)?;
        Ok(Self { lats, lons })
    }

    /// Build from `[lat, lon]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> IndexResult<Self> {
        Self::new(&pairs_to_points(pairs))
    }

    /// Build from separate latitude and longitude columns of equal length.
    pub fn from_columns(lats: &[f64], lons: &[f64]) -> IndexResult<Self> {
        Self::new(&columns_to_points(lats, lons)?)
    }

    /// Position of the point stored at `idx`.
    pub fn point(&self, idx: usize) -> Option<GeoPoint> {
        Some(GeoPoint::new(*self.lats.get(idx)?, self.lons[idx]))
    }

    /// Indices within `radius_m` of `location`, in ascending order.
    pub fn query_radius(&self, location: GeoPoint, radius_m: f64) -> IndexResult<Vec<usize>> {
        check_query(location, radius_m)?;
        let dists = haversine_to_many(location, &self.lats, &self.lons)
            .map_err(|e| IndexError::InvalidInput(e.to_string()))?;
        Ok(dists
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d <= radius_m)
            .map(|(i, _)| i)
            .collect())
    }

    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }
}

impl RadiusQuery for GeoBrute {
    fn build(points: &[GeoPoint]) -> IndexResult<Self> {
        GeoBrute::new(points)
    }

    fn query_radius(&self, location: GeoPoint, radius_m: f64) -> IndexResult<Vec<usize>> {
        GeoBrute::query_radius(self, location, radius_m)
    }

    fn len(&self) -> usize {
        GeoBrute::len(self)
    }
}
