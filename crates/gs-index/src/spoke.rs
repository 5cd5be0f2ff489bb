//! Pole-pruned radius index.
//!
//! # Algorithm
//!
//! At build time the distance from each of two fixed reference points
//! ("poles") to every indexed point is computed and sorted, keeping the
//! permutation back to original indices:
//!
//! ```text
//! distances[k]   = dist(pole, point[permutation[k]])     (non-decreasing)
//! ```
//!
//! For a query `(q, r)` the triangle inequality gives, for every true match
//! `p` and every pole,
//!
//! ```text
//! |dist(p, pole) - dist(q, pole)| <= dist(p, q) <= r
//! ```
//!
//! so the matches of each pole lie in one contiguous slice of its sorted
//! distances, found with two binary searches.  The two candidate slices are
//! intersected and each survivor is checked with the exact distance.  The
//! pole bound is necessary but not sufficient; the exact pass is what makes
//! the answer exact.
//!
//! # Floating point
//!
//! The three distances in the bound are computed independently and each
//! carries rounding error (largest near antipodal pairs, well under a metre).
//! The search interval is widened by [`PRUNE_SLACK_M`] so rounding can only
//! add candidates, never drop a true match.  The exact pass uses the same
//! function and argument order as [`GeoBrute`](crate::GeoBrute), so both
//! indexes agree on every boundary case.
//!
//! # Performance
//!
//! Build is O(N log N).  A query costs two binary searches plus work linear
//! in the candidate slices.  Point sets where most points sit at nearly the
//! same distance from both poles produce wide slices and degrade towards a
//! linear scan.

use std::cmp::Ordering;

use gs_core::{GeoPoint, haversine_m, haversine_to_many};
use log::{debug, trace};

use crate::query::{check_query, columns_to_points, pairs_to_points, point_columns};
use crate::{IndexError, IndexResult, RadiusQuery, SpokeConfig};

/// Widening of the per-pole search interval, in metres.
pub const PRUNE_SLACK_M: f64 = 1.0;

// ── PoleProjection ────────────────────────────────────────────────────────────

/// Distances from one pole to every indexed point, sorted ascending, with the
/// permutation from sorted position to original index.
#[derive(Clone, Debug)]
pub struct PoleProjection {
    pole: GeoPoint,
    distances: Vec<f64>,
    permutation: Vec<u32>,
}

impl PoleProjection {
    fn new(pole: GeoPoint, lats: &[f64], lons: &[f64]) -> IndexResult<Self> {
        let raw = haversine_to_many(pole, lats, lons)
            .map_err(|e| IndexError::InvalidInput(e.to_string()))?;

        // Point count was checked against u32::MAX by the caller.
        let mut permutation: Vec<u32> = (0..raw.len() as u32).collect();
        permutation.sort_unstable_by(|&a, &b| raw[a as usize].total_cmp(&raw[b as usize]));

        let distances = permutation.iter().map(|&i| raw[i as usize]).collect();

        Ok(Self { pole, distances, permutation })
    }

    pub fn pole(&self) -> GeoPoint {
        self.pole
    }

    /// Sorted pole distances in metres.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// `permutation()[k]` is the original index of the point at sorted
    /// position `k`.
    pub fn permutation(&self) -> &[u32] {
        &self.permutation
    }

    /// Original indices whose pole distance lies in the closed interval
    /// `[lo, hi]`, sorted ascending.
    fn candidates(&self, lo: f64, hi: f64) -> Vec<u32> {
        let start = self.distances.partition_point(|&d| d < lo);
        let end = self.distances.partition_point(|&d| d <= hi);
        if start >= end {
            return Vec::new();
        }
        let mut out = self.permutation[start..end].to_vec();
        out.sort_unstable();
        out
    }

    /// Candidate set for a query at `location` with radius `radius_m`.
    fn candidates_for(&self, location: GeoPoint, radius_m: f64) -> Vec<u32> {
        let d = location.distance_m(self.pole);
        let reach = radius_m + PRUNE_SLACK_M;
        self.candidates(d - reach, d + reach)
    }
}

// ── GeoSpoke ──────────────────────────────────────────────────────────────────

/// Static radius index pruned by distances to two reference poles.
///
/// Built once; immutable afterwards.  Construction either returns a fully
/// populated index or an error, never a half-built value.
///
/// # Example
///
/// ```
/// use gs_core::GeoPoint;
/// use gs_index::GeoSpoke;
///
/// let index = GeoSpoke::from_pairs(&[[0.0, 0.0], [0.0, 1.0], [45.0, 45.0]]).unwrap();
/// let hits = index.query_radius(GeoPoint::new(0.0, 0.0), 120_000.0).unwrap();
/// assert_eq!(hits, vec![0, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct GeoSpoke {
    lats: Vec<f64>,
    lons: Vec<f64>,
    projections: [PoleProjection; 2],
}

impl GeoSpoke {
    /// Build with the default poles (see [`SpokeConfig::default`]).
    pub fn new(points: &[GeoPoint]) -> IndexResult<Self> {
        Self::with_config(points, &SpokeConfig::default())
    }

    /// Build with caller-chosen poles.
    ///
    /// Time complexity: O(N log N) for the two sorts.
    pub fn with_config(points: &[GeoPoint], config: &SpokeConfig) -> IndexResult<Self> {
        config.validate()?;
        if points.len() > u32::MAX as usize {
            return Err(IndexError::InvalidInput(format!(
                "{} points exceed the index capacity of {}",
                points.len(),
                u32::MAX
            )));
        }
        let (lats, lons) = point_columns(points)?;

        let [pole0, pole1] = config.poles;
        let projections = [
            PoleProjection::new(pole0, &lats, &lons)?,
            PoleProjection::new(pole1, &lats, &lons)?,
        ];

        debug!(
            "built GeoSpoke over {} points (poles {} and {})",
            lats.len(),
            pole0,
            pole1
        );

        Ok(Self { lats, lons, projections })
    }

    /// Build from `[lat, lon]` pairs with the default poles.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> IndexResult<Self> {
        Self::new(&pairs_to_points(pairs))
    }

    /// Build from separate latitude and longitude columns of equal length.
    pub fn from_columns(lats: &[f64], lons: &[f64]) -> IndexResult<Self> {
        Self::new(&columns_to_points(lats, lons)?)
    }

    pub fn projections(&self) -> &[PoleProjection; 2] {
        &self.projections
    }

    /// Position of the point stored at `idx`.
    pub fn point(&self, idx: usize) -> Option<GeoPoint> {
        Some(GeoPoint::new(*self.lats.get(idx)?, self.lons[idx]))
    }

    /// Indices within `radius_m` of `location`.
    ///
    /// This implementation returns them in ascending order.
    pub fn query_radius(&self, location: GeoPoint, radius_m: f64) -> IndexResult<Vec<usize>> {
        check_query(location, radius_m)?;
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let [p0, p1] = &self.projections;
        let c0 = p0.candidates_for(location, radius_m);
        if c0.is_empty() {
            return Ok(Vec::new());
        }
        let c1 = p1.candidates_for(location, radius_m);
        let candidates = intersect_sorted(&c0, &c1);

        let hits: Vec<usize> = candidates
            .iter()
            .map(|&i| i as usize)
            .filter(|&i| haversine_m(location.lat, location.lon, self.lats[i], self.lons[i]) <= radius_m)
            .collect();

        trace!(
            "query {} r={}m: {}/{} pole candidates, {} intersected, {} hits",
            location,
            radius_m,
            c0.len(),
            c1.len(),
            candidates.len(),
            hits.len()
        );

        Ok(hits)
    }

    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }
}

impl RadiusQuery for GeoSpoke {
    fn build(points: &[GeoPoint]) -> IndexResult<Self> {
        GeoSpoke::new(points)
    }

    fn query_radius(&self, location: GeoPoint, radius_m: f64) -> IndexResult<Vec<usize>> {
        GeoSpoke::query_radius(self, location, radius_m)
    }

    fn len(&self) -> usize {
        GeoSpoke::len(self)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Intersection of two ascending, duplicate-free slices (linear merge).
pub(crate) fn intersect_sorted(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
