//! Network error type.

use thiserror::Error;

use gs_core::{NodeId, WayId};
use gs_index::IndexError;

/// Errors produced by `gs-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("way {way} references node {node}, which is not in the network")]
    NodeNotFound { way: WayId, node: NodeId },

    #[error(transparent)]
    Index(#[from] IndexError),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
