//! Radius lookups over network nodes.
//!
//! A `NodeLocator` is a snapshot: it copies node ids and positions out of an
//! [`OsmNet`] at build time, so later edits to the network are not visible
//! until a new locator is built.

use gs_core::{GeoPoint, NodeId};
use gs_index::{GeoSpoke, RadiusQuery};

use crate::network::OsmNet;
use crate::NetworkResult;

/// Answers "which nodes lie within `r` metres of here?" for a network.
///
/// Generic over the index so small networks (or tests) can use
/// [`GeoBrute`](gs_index::GeoBrute); the default is [`GeoSpoke`].
pub struct NodeLocator<I: RadiusQuery = GeoSpoke> {
    ids:   Vec<NodeId>,
    index: I,
}

impl<I: RadiusQuery> NodeLocator<I> {
    pub fn new(net: &OsmNet) -> NetworkResult<Self> {
        let (ids, points): (Vec<NodeId>, Vec<GeoPoint>) =
            net.nodes().iter().map(|n| (n.id, n.pos)).unzip();
        let index = I::build(&points)?;
        log::debug!("node locator over {} nodes", ids.len());
        Ok(Self { ids, index })
    }

    /// Ids of nodes within `radius_m` of `pos`, in network insertion order.
    pub fn nodes_near(&self, pos: GeoPoint, radius_m: f64) -> NetworkResult<Vec<NodeId>> {
        let mut hits = self.index.query_radius(pos, radius_m)?;
        hits.sort_unstable();
        Ok(hits.into_iter().map(|i| self.ids[i]).collect())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
