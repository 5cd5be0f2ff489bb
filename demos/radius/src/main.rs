//! radius — GeoSpoke vs. GeoBrute on a synthetic point cloud.
//!
//! Builds both indexes over the same seeded point set, runs a batch of radius
//! queries against each, checks that they agree, and reports timings.  Ends
//! with a node lookup on a tiny street network.
//!
//! Set `RUST_LOG=debug` (or `trace` for per-query candidate counts) to see
//! index internals.

mod network;

use std::time::Instant;

use anyhow::{Result, ensure};

use gs_core::{GeoPoint, SeededRng};
use gs_index::{GeoBrute, GeoSpoke, RadiusQuery};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const POINT_COUNT:  usize = 200_000;
const QUERY_COUNT:  usize = 500;
const SEED:         u64   = 42;
const RADII_M:      [f64; 4] = [100.0, 1_000.0, 10_000.0, 100_000.0];

/// City centres the clustered points are drawn around.
const CITIES: [GeoPoint; 4] = [
    GeoPoint::new(30.694, -88.043),  // Mobile
    GeoPoint::new(42.280, -83.743),  // Ann Arbor
    GeoPoint::new(53.349, -6.260),   // Dublin
    GeoPoint::new(-33.869, 151.209), // Sydney
];

// ── Workload ──────────────────────────────────────────────────────────────────

/// Half the points spread over the globe, half clustered around [`CITIES`].
fn sample_points(rng: &mut SeededRng) -> Vec<GeoPoint> {
    let mut pts = rng.points(POINT_COUNT / 2);
    let per_city = (POINT_COUNT - pts.len()) / CITIES.len();
    for city in CITIES {
        pts.extend(rng.points_near(per_city, city, 0.5));
    }
    pts
}

/// Queries land next to a city half the time and anywhere otherwise.
fn sample_queries(rng: &mut SeededRng) -> Vec<GeoPoint> {
    (0..QUERY_COUNT)
        .map(|i| {
            if i % 2 == 0 {
                rng.point_near(CITIES[i / 2 % CITIES.len()], 0.5)
            } else {
                rng.point()
            }
        })
        .collect()
}

/// Run every query at `radius_m`; returns the sorted hits per query and the
/// elapsed seconds.
fn run<I: RadiusQuery>(index: &I, queries: &[GeoPoint], radius_m: f64) -> Result<(Vec<Vec<usize>>, f64)> {
    let t0 = Instant::now();
    let mut out = Vec::with_capacity(queries.len());
    for &q in queries {
        let mut hits = index.query_radius(q, radius_m)?;
        hits.sort_unstable();
        out.push(hits);
    }
    Ok((out, t0.elapsed().as_secs_f64()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== radius — GeoSpoke vs GeoBrute ===");
    println!("Points: {POINT_COUNT}  |  Queries: {QUERY_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Workload.
    let mut rng = SeededRng::new(SEED);
    let points = sample_points(&mut rng.child(0));
    let queries = sample_queries(&mut rng.child(1));

    // 2. Build.
    let t0 = Instant::now();
    let spoke = GeoSpoke::new(&points)?;
    let spoke_build = t0.elapsed().as_secs_f64();

    let t0 = Instant::now();
    let brute = GeoBrute::new(&points)?;
    let brute_build = t0.elapsed().as_secs_f64();

    println!("Build: spoke {:.3} s, brute {:.3} s", spoke_build, brute_build);
    println!();

    // 3. Query + verify.
    println!("{:>10} {:>10} {:>12} {:>12} {:>9}", "radius_m", "hits", "spoke_ms", "brute_ms", "speedup");
    println!("{}", "-".repeat(57));
    for radius in RADII_M {
        let (spoke_hits, spoke_secs) = run(&spoke, &queries, radius)?;
        let (brute_hits, brute_secs) = run(&brute, &queries, radius)?;
        ensure!(spoke_hits == brute_hits, "GeoSpoke and GeoBrute disagree at r = {radius} m");

        let total: usize = spoke_hits.iter().map(Vec::len).sum();
        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>8.1}x",
            radius,
            total,
            spoke_secs * 1e3,
            brute_secs * 1e3,
            brute_secs / spoke_secs.max(f64::EPSILON)
        );
    }
    println!();

    // 4. Street network lookup.
    let net = build_network()?;
    let locator = net.locator()?;
    let here = GeoPoint::new(30.692, -88.048);
    let near = locator.nodes_near(here, 2_000.0)?;
    println!("Nodes within 2 km of {here}:");
    for id in near {
        if let Some(node) = net.node(id) {
            let roads: Vec<String> = net
                .highways()
                .filter(|w| w.has_node(id))
                .map(|w| w.to_string())
                .collect();
            println!("  {node}  on {}", roads.join(", "));
        }
    }

    Ok(())
}
