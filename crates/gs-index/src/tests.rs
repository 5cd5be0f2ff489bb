//! Unit tests for gs-index.
//!
//! Randomized tests use fixed seeds so failures reproduce.

#[cfg(test)]
mod helpers {
    use gs_core::{GeoPoint, SeededRng};

    use crate::RadiusQuery;

    /// Query `index` and return its answer sorted.
    pub fn sorted_hits<I: RadiusQuery>(index: &I, q: GeoPoint, r: f64) -> Vec<usize> {
        let mut hits = index.query_radius(q, r).unwrap();
        hits.sort_unstable();
        hits
    }

    /// A mix of uniform points, a dense city cluster, and points near the
    /// antipodes of the default poles (where haversine rounding is worst).
    pub fn mixed_points(rng: &mut SeededRng, n: usize) -> Vec<GeoPoint> {
        let mut pts = rng.points(n / 2);
        pts.extend(rng.points_near(n / 4, GeoPoint::new(30.69, -88.04), 0.2));
        pts.extend(rng.points_near(n / 8, GeoPoint::new(0.0, 180.0), 0.01));
        pts.extend(rng.points_near(n - pts.len(), GeoPoint::new(-90.0, 0.0), 0.01));
        pts
    }

    pub const RADII: [f64; 8] = [0.0, 1.0, 250.0, 5_000.0, 111_200.0, 1_000_000.0, 7_500_000.0, 25_000_000.0];
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use gs_core::GeoPoint;

    use crate::{GeoBrute, GeoSpoke};

    #[test]
    fn first_two_points_within_one_degree() {
        let pairs = [[0.0, 0.0], [0.0, 1.0], [2.0, 0.0], [45.0, 45.0]];
        let origin = GeoPoint::new(0.0, 0.0);
        let r = origin.distance_m(GeoPoint::new(0.0, 1.0));
        assert!((r - 111_195.0).abs() < 5.0);

        let spoke = GeoSpoke::from_pairs(&pairs).unwrap();
        let brute = GeoBrute::from_pairs(&pairs).unwrap();
        assert_eq!(spoke.query_radius(origin, r).unwrap(), vec![0, 1]);
        assert_eq!(brute.query_radius(origin, r).unwrap(), vec![0, 1]);
    }

    #[test]
    fn one_degree_north_and_east_tie() {
        // (0,1) and (1,0) are the same haversine distance from the origin, so
        // any radius covering one covers the other.
        let pairs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [45.0, 45.0]];
        let spoke = GeoSpoke::from_pairs(&pairs).unwrap();
        let hits = spoke.query_radius(GeoPoint::new(0.0, 0.0), 111_200.0).unwrap();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn empty_point_set_answers_empty() {
        let spoke = GeoSpoke::new(&[]).unwrap();
        let brute = GeoBrute::new(&[]).unwrap();
        assert!(spoke.is_empty());
        for r in [0.0, 10.0, 1e9] {
            assert!(spoke.query_radius(GeoPoint::new(12.0, 34.0), r).unwrap().is_empty());
            assert!(brute.query_radius(GeoPoint::new(12.0, 34.0), r).unwrap().is_empty());
        }
    }

    #[test]
    fn zero_radius_off_set_is_empty() {
        let spoke = GeoSpoke::from_pairs(&[[0.0, 0.0], [0.0, 1.0]]).unwrap();
        assert!(spoke.query_radius(GeoPoint::new(0.5, 0.5), 0.0).unwrap().is_empty());
    }

    #[test]
    fn zero_radius_on_set_finds_itself_and_duplicates() {
        let pairs = [[10.0, 10.0], [20.0, 20.0], [10.0, 10.0], [10.000_001, 10.0]];
        let spoke = GeoSpoke::from_pairs(&pairs).unwrap();
        let hits = spoke.query_radius(GeoPoint::new(10.0, 10.0), 0.0).unwrap();
        assert_eq!(hits, vec![0, 2]);
        let hits = spoke.query_radius(GeoPoint::new(20.0, 20.0), 0.0).unwrap();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn boundary_point_is_included() {
        let q = GeoPoint::new(48.8566, 2.3522);
        let p = GeoPoint::new(52.52, 13.405);
        let r = q.distance_m(p);
        let spoke = GeoSpoke::new(&[p]).unwrap();
        let brute = GeoBrute::new(&[p]).unwrap();
        assert_eq!(spoke.query_radius(q, r).unwrap(), vec![0]);
        assert_eq!(brute.query_radius(q, r).unwrap(), vec![0]);
        // A hair smaller and the point falls outside.
        let inside = r - r * 1e-9;
        assert!(spoke.query_radius(q, inside).unwrap().is_empty());
    }

    #[test]
    fn query_at_the_poles() {
        let pairs = [[90.0, 0.0], [89.9, 45.0], [0.0, 0.0], [0.05, -0.05], [-90.0, 0.0]];
        let spoke = GeoSpoke::from_pairs(&pairs).unwrap();
        assert_eq!(spoke.query_radius(GeoPoint::new(90.0, 0.0), 20_000.0).unwrap(), vec![0, 1]);
        assert_eq!(spoke.query_radius(GeoPoint::new(0.0, 0.0), 10_000.0).unwrap(), vec![2, 3]);
        assert_eq!(spoke.query_radius(GeoPoint::new(-90.0, 0.0), 0.0).unwrap(), vec![4]);
    }

    #[test]
    fn unbounded_radius_returns_everything() {
        let pairs = [[0.0, 0.0], [0.0, 180.0], [-90.0, 0.0], [33.0, -117.0]];
        let spoke = GeoSpoke::from_pairs(&pairs).unwrap();
        let hits = spoke.query_radius(GeoPoint::new(1.0, 1.0), f64::INFINITY).unwrap();
        assert_eq!(hits, vec![0, 1, 2, 3]);
    }
}

// ── Construction & projections ────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use gs_core::{GeoPoint, SeededRng, haversine_m};

    use crate::{GeoBrute, GeoSpoke, SpokeConfig};

    #[test]
    fn projections_are_sorted_and_bijective() {
        let mut rng = SeededRng::new(3);
        let pts = super::helpers::mixed_points(&mut rng, 2_000);
        let spoke = GeoSpoke::new(&pts).unwrap();
        assert_eq!(spoke.len(), pts.len());

        for proj in spoke.projections() {
            let d = proj.distances();
            assert_eq!(d.len(), pts.len());
            assert!(d.windows(2).all(|w| w[0] <= w[1]), "distances not sorted");

            let mut perm: Vec<u32> = proj.permutation().to_vec();
            perm.sort_unstable();
            let expected: Vec<u32> = (0..pts.len() as u32).collect();
            assert_eq!(perm, expected, "permutation is not a bijection");

            let pole = proj.pole();
            for (k, &i) in proj.permutation().iter().enumerate() {
                let p = pts[i as usize];
                assert_eq!(d[k], haversine_m(pole.lat, pole.lon, p.lat, p.lon));
            }
        }
    }

    #[test]
    fn default_poles() {
        let spoke = GeoSpoke::new(&[GeoPoint::new(1.0, 2.0)]).unwrap();
        let [p0, p1] = spoke.projections();
        assert_eq!(p0.pole(), GeoPoint::new(0.0, 0.0));
        assert_eq!(p1.pole(), GeoPoint::new(90.0, 0.0));
    }

    #[test]
    fn from_columns_matches_from_points() {
        let lats = [10.0, -20.0, 30.0];
        let lons = [100.0, 0.0, -45.0];
        let a = GeoSpoke::from_columns(&lats, &lons).unwrap();
        let b = GeoBrute::from_columns(&lats, &lons).unwrap();
        for i in 0..3 {
            assert_eq!(a.point(i), Some(GeoPoint::new(lats[i], lons[i])));
            assert_eq!(b.point(i), a.point(i));
        }
        assert_eq!(a.point(3), None);
    }

    #[test]
    fn config_validation() {
        assert!(SpokeConfig::default().validate().is_ok());
        let same = SpokeConfig::with_poles(GeoPoint::new(5.0, 5.0), GeoPoint::new(5.0, 5.0));
        assert!(same.validate().is_err());
        let bad = SpokeConfig::with_poles(GeoPoint::new(95.0, 5.0), GeoPoint::new(5.0, 5.0));
        assert!(bad.validate().is_err());
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use gs_core::GeoPoint;

    use crate::{GeoBrute, GeoSpoke, IndexError, SpokeConfig};

    #[test]
    fn non_finite_point_rejects_whole_set() {
        let pts = [GeoPoint::new(0.0, 0.0), GeoPoint::new(f64::NAN, 1.0)];
        match GeoSpoke::new(&pts) {
            Err(IndexError::InvalidInput(msg)) => assert!(msg.contains("point 1"), "{msg}"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert!(matches!(GeoBrute::new(&pts), Err(IndexError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_point_rejected() {
        let err = GeoSpoke::from_pairs(&[[0.0, 200.0]]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidInput(_)));
    }

    #[test]
    fn mismatched_columns_rejected() {
        let err = GeoSpoke::from_columns(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidInput(_)));
        let err = GeoBrute::from_columns(&[1.0], &[]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidInput(_)));
    }

    #[test]
    fn coincident_poles_rejected() {
        let cfg = SpokeConfig::with_poles(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0));
        let err = GeoSpoke::with_config(&[GeoPoint::new(1.0, 1.0)], &cfg).unwrap_err();
        assert!(matches!(err, IndexError::InvalidInput(_)));
    }

    #[test]
    fn bad_radius_is_invalid_argument() {
        let spoke = GeoSpoke::from_pairs(&[[0.0, 0.0]]).unwrap();
        let brute = GeoBrute::from_pairs(&[[0.0, 0.0]]).unwrap();
        let q = GeoPoint::new(0.0, 0.0);
        for r in [-1.0, -0.0001, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(spoke.query_radius(q, r), Err(IndexError::InvalidArgument(_))), "r={r}");
            assert!(matches!(brute.query_radius(q, r), Err(IndexError::InvalidArgument(_))), "r={r}");
        }
    }

    #[test]
    fn bad_location_is_invalid_argument() {
        let spoke = GeoSpoke::from_pairs(&[[0.0, 0.0]]).unwrap();
        for q in [
            GeoPoint::new(f64::NAN, 0.0),
            GeoPoint::new(0.0, f64::INFINITY),
            GeoPoint::new(91.0, 0.0),
        ] {
            assert!(matches!(spoke.query_radius(q, 10.0), Err(IndexError::InvalidArgument(_))));
        }
    }

    #[test]
    fn empty_index_still_validates_arguments() {
        let spoke = GeoSpoke::new(&[]).unwrap();
        assert!(spoke.query_radius(GeoPoint::new(0.0, 0.0), -5.0).is_err());
    }
}

// ── Equivalence with the brute-force oracle ──────────────────────────────────

#[cfg(test)]
mod equivalence {
    use gs_core::{GeoPoint, SeededRng};

    use super::helpers::{RADII, mixed_points, sorted_hits};
    use crate::{GeoBrute, GeoSpoke, RadiusQuery, SpokeConfig};

    fn check(spoke: &GeoSpoke, brute: &GeoBrute, rng: &mut SeededRng, pts: &[GeoPoint]) {
        for _ in 0..60 {
            // Half the queries land on indexed points, half anywhere.
            let q = if !pts.is_empty() && rng.gen_range(0..2) == 0 {
                pts[rng.gen_range(0..pts.len())]
            } else {
                rng.point()
            };
            for r in RADII {
                assert_eq!(sorted_hits(spoke, q, r), sorted_hits(brute, q, r), "q={q} r={r}");
            }
            let r = rng.gen_range(0.0..3_000_000.0);
            assert_eq!(sorted_hits(spoke, q, r), sorted_hits(brute, q, r), "q={q} r={r}");
        }
    }

    #[test]
    fn random_sets_match_brute() {
        let mut root = SeededRng::new(20_240_601);
        for (seed, n) in [(0, 1), (1, 7), (2, 100), (3, 1_000), (4, 4_000)] {
            let mut rng = root.child(seed);
            let pts = mixed_points(&mut rng, n);
            let spoke = GeoSpoke::new(&pts).unwrap();
            let brute = GeoBrute::new(&pts).unwrap();
            check(&spoke, &brute, &mut rng, &pts);
        }
    }

    #[test]
    fn custom_poles_match_brute() {
        let mut rng = SeededRng::new(99);
        let pts = mixed_points(&mut rng, 1_500);
        let brute = GeoBrute::new(&pts).unwrap();
        for poles in [
            (GeoPoint::new(10.0, 20.0), GeoPoint::new(-30.0, 100.0)),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0)),
            (GeoPoint::new(30.7, -88.0), GeoPoint::new(30.8, -88.0)),
        ] {
            let cfg = SpokeConfig::with_poles(poles.0, poles.1);
            let spoke = GeoSpoke::with_config(&pts, &cfg).unwrap();
            check(&spoke, &brute, &mut rng, &pts);
        }
    }

    #[test]
    fn dense_cluster_small_radii() {
        let mut rng = SeededRng::new(5);
        let center = GeoPoint::new(51.5, -0.12);
        let pts = rng.points_near(3_000, center, 0.02);
        let spoke = GeoSpoke::new(&pts).unwrap();
        let brute = GeoBrute::new(&pts).unwrap();
        for _ in 0..200 {
            let q = rng.point_near(center, 0.02);
            let r = rng.gen_range(0.0..500.0);
            assert_eq!(sorted_hits(&spoke, q, r), sorted_hits(&brute, q, r));
        }
    }

    #[test]
    fn generic_build_through_trait() {
        fn count_near<I: RadiusQuery>(pts: &[GeoPoint], q: GeoPoint, r: f64) -> usize {
            I::build(pts).unwrap().query_radius(q, r).unwrap().len()
        }
        let mut rng = SeededRng::new(8);
        let pts = rng.points(500);
        let q = GeoPoint::new(10.0, 10.0);
        assert_eq!(
            count_near::<GeoSpoke>(&pts, q, 2_000_000.0),
            count_near::<GeoBrute>(&pts, q, 2_000_000.0)
        );
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod internals {
    use crate::spoke::intersect_sorted;

    #[test]
    fn intersect_merges() {
        assert_eq!(intersect_sorted(&[1, 3, 5, 7], &[0, 3, 4, 7, 9]), vec![3, 7]);
        assert_eq!(intersect_sorted(&[], &[1, 2]), Vec::<u32>::new());
        assert_eq!(intersect_sorted(&[1, 2], &[3, 4]), Vec::<u32>::new());
        assert_eq!(intersect_sorted(&[2], &[2]), vec![2]);
    }
}

// ── Concurrent reads ──────────────────────────────────────────────────────────

#[cfg(test)]
mod concurrency {
    use std::sync::Arc;
    use std::thread;

    use gs_core::SeededRng;

    use crate::{GeoBrute, GeoSpoke};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn indexes_are_send_sync() {
        assert_send_sync::<GeoSpoke>();
        assert_send_sync::<GeoBrute>();
    }

    #[test]
    fn shared_index_across_threads() {
        let mut rng = SeededRng::new(17);
        let pts = rng.points(2_000);
        let spoke = Arc::new(GeoSpoke::new(&pts).unwrap());
        let brute = Arc::new(GeoBrute::new(&pts).unwrap());

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let spoke = Arc::clone(&spoke);
                let brute = Arc::clone(&brute);
                let mut rng = rng.child(t);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let q = rng.point();
                        let r = rng.gen_range(0.0..2_000_000.0);
                        assert_eq!(spoke.query_radius(q, r).unwrap(), brute.query_radius(q, r).unwrap());
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
    }
}
