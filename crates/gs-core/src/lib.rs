//! `gs-core` — foundational types for the `geospoke` workspace.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, scalar and vector haversine distance      |
//! | [`ids`]         | `NodeId`, `WayId` (OSM identifiers)                   |
//! | [`rng`]         | `SeededRng` for reproducible point sets               |
//! | [`error`]       | `GeoError`, `GeoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use geo::{
    EARTH_RADIUS_M, GeoPoint, haversine_m, haversine_pairwise, haversine_to_many,
    validate_coordinates,
};
pub use ids::{NodeId, WayId};
pub use rng::SeededRng;
