//! `gs-index` — "which points lie within `r` metres of here?"
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`query`]  | `RadiusQuery` trait shared by every index                   |
//! | [`brute`]  | `GeoBrute`, the linear-scan reference                       |
//! | [`spoke`]  | `GeoSpoke`, `PoleProjection` (pole-pruned index)            |
//! | [`config`] | `SpokeConfig` (pole placement)                              |
//! | [`error`]  | `IndexError`, `IndexResult<T>`                              |
//!
//! Both indexes are built once from an immutable point set and answer queries
//! with indices into that set.  They are `Send + Sync` and never mutate on
//! read, so a single instance can be shared across threads behind an `Arc`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `SpokeConfig`.          |

pub mod brute;
pub mod config;
pub mod error;
pub mod query;
pub mod spoke;

#[cfg(test)]
mod tests;

pub use brute::GeoBrute;
pub use config::SpokeConfig;
pub use error::{IndexError, IndexResult};
pub use query::RadiusQuery;
pub use spoke::{GeoSpoke, PoleProjection};
