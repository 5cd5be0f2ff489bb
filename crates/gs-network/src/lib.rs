//! `gs-network` — OSM nodes, ways, and "which nodes are near here?".
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`model`]   | `OsmNode`, `OsmWay`, `Tags`                                 |
//! | [`network`] | `OsmNet` container                                          |
//! | [`locator`] | `NodeLocator` (radius lookups via `gs-index`)               |
//! | [`osm`]     | `load_from_pbf` (feature = `"osm"` only)                   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod locator;
pub mod model;
pub mod network;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{NetworkError, NetworkResult};
pub use locator::NodeLocator;
pub use model::{OsmNode, OsmWay, Tags};
pub use network::OsmNet;
