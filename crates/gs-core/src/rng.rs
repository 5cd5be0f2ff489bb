//! Deterministic RNG wrapper for generating reproducible point sets.
//!
//! Benchmarks and randomized index tests need the same "random" points on
//! every run, so everything goes through a `SmallRng` seeded from a `u64`.
//! Child generators are derived by mixing an offset into a draw from the
//! parent:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GeoPoint;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG with helpers for sampling geographic points.
///
/// Not `Sync`: give each worker thread its own generator via [`child`](Self::child).
pub struct SeededRng(SmallRng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent generator for a sub-task (one per query batch,
    /// one per thread, ...).
    pub fn child(&mut self, offset: u64) -> SeededRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SeededRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    // ── Point sampling ────────────────────────────────────────────────────

    /// A point uniformly distributed over the sphere's surface.
    ///
    /// Latitude is drawn as `asin(u)` for uniform `u ∈ [-1, 1]` so that
    /// density does not pile up at the poles.
    pub fn point(&mut self) -> GeoPoint {
        let u: f64 = self.0.gen_range(-1.0..=1.0);
        let lat = u.asin().to_degrees().clamp(-90.0, 90.0);
        let lon = self.0.gen_range(-180.0..=180.0);
        GeoPoint::new(lat, lon)
    }

    /// A point inside the lat/lon box `center ± half_deg`, clamped to the
    /// valid coordinate ranges.
    pub fn point_near(&mut self, center: GeoPoint, half_deg: f64) -> GeoPoint {
        let lat = center.lat + self.0.gen_range(-half_deg..=half_deg);
        let lon = center.lon + self.0.gen_range(-half_deg..=half_deg);
        GeoPoint::new(lat.clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0))
    }

    /// `n` points uniformly distributed over the sphere.
    pub fn points(&mut self, n: usize) -> Vec<GeoPoint> {
        (0..n).map(|_| self.point()).collect()
    }

    /// `n` points clustered around `center` (see [`point_near`](Self::point_near)).
    pub fn points_near(&mut self, n: usize, center: GeoPoint, half_deg: f64) -> Vec<GeoPoint> {
        (0..n).map(|_| self.point_near(center, half_deg)).collect()
    }
}
