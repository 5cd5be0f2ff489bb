//! OSM network container.
//!
//! # Data layout
//!
//! Nodes and ways live in insertion-ordered `Vec`s with `FxHashMap` indexes
//! from OSM id to position:
//!
//! ```text
//! nodes[ node_idx[NodeId] ]      ways[ way_idx[WayId] ]
//! ```
//!
//! Re-adding an id replaces the record in place, so insertion order is stable
//! across updates.

use rustc_hash::FxHashMap;

use gs_core::{NodeId, WayId};
use gs_index::{GeoSpoke, RadiusQuery};

use crate::locator::NodeLocator;
use crate::model::{OsmNode, OsmWay};
use crate::{NetworkError, NetworkResult};

/// Nodes and ways of an OSM extract.
///
/// # Example
///
/// ```
/// use gs_core::{NodeId, WayId};
/// use gs_network::{OsmNet, OsmNode, OsmWay, Tags};
///
/// let mut net = OsmNet::new();
/// net.add_nodes([
///     OsmNode::new(NodeId(1), 30.69, -88.04),
///     OsmNode::new(NodeId(2), 30.70, -88.03),
/// ]);
/// let mut tags = Tags::default();
/// tags.insert("highway".into(), "residential".into());
/// net.add_way(OsmWay::new(WayId(10), vec![NodeId(1), NodeId(2)], tags)).unwrap();
/// assert_eq!(net.way_nodes(WayId(10)).unwrap().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OsmNet {
    nodes:    Vec<OsmNode>,
    node_idx: FxHashMap<NodeId, usize>,
    ways:     Vec<OsmWay>,
    way_idx:  FxHashMap<WayId, usize>,
}

impl OsmNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and ways.
    pub fn with_capacity(nodes: usize, ways: usize) -> Self {
        let mut node_idx = FxHashMap::default();
        node_idx.reserve(nodes);
        let mut way_idx = FxHashMap::default();
        way_idx.reserve(ways);
        Self {
            nodes: Vec::with_capacity(nodes),
            node_idx,
            ways: Vec::with_capacity(ways),
            way_idx,
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Add a node, replacing any existing node with the same id.
    pub fn add_node(&mut self, node: OsmNode) {
        match self.node_idx.get(&node.id) {
            Some(&slot) => self.nodes[slot] = node,
            None => {
                self.node_idx.insert(node.id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn add_nodes<I: IntoIterator<Item = OsmNode>>(&mut self, nodes: I) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Add a way, replacing any existing way with the same id.
    ///
    /// # Errors
    ///
    /// [`NetworkError::NodeNotFound`] if the way references a node that has
    /// not been added; the network is left unchanged.
    pub fn add_way(&mut self, way: OsmWay) -> NetworkResult<()> {
        if let Some(&missing) = way.refs.iter().find(|n| !self.node_idx.contains_key(*n)) {
            return Err(NetworkError::NodeNotFound { way: way.id, node: missing });
        }
        match self.way_idx.get(&way.id) {
            Some(&slot) => self.ways[slot] = way,
            None => {
                self.way_idx.insert(way.id, self.ways.len());
                self.ways.push(way);
            }
        }
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> Option<&OsmNode> {
        self.node_idx.get(&id).map(|&slot| &self.nodes[slot])
    }

    pub fn way(&self, id: WayId) -> Option<&OsmWay> {
        self.way_idx.get(&id).map(|&slot| &self.ways[slot])
    }

    /// The nodes of way `id`, in way order.
    pub fn way_nodes(&self, id: WayId) -> Option<Vec<&OsmNode>> {
        let way = self.way(id)?;
        // add_way guarantees every ref resolves, and nodes are never removed.
        way.refs.iter().map(|n| self.node(*n)).collect()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[OsmNode] {
        &self.nodes
    }

    /// All ways in insertion order.
    pub fn ways(&self) -> &[OsmWay] {
        &self.ways
    }

    /// Ways tagged `highway=*`.
    pub fn highways(&self) -> impl Iterator<Item = &OsmWay> + '_ {
        self.ways.iter().filter(|w| w.is_highway())
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn way_count(&self) -> usize { self.ways.len() }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Spatial ───────────────────────────────────────────────────────────

    /// Build a [`GeoSpoke`]-backed locator over the current nodes.
    pub fn locator(&self) -> NetworkResult<NodeLocator<GeoSpoke>> {
        NodeLocator::new(self)
    }

    /// Build a locator over the current nodes with any index type.
    pub fn locator_with<I: RadiusQuery>(&self) -> NetworkResult<NodeLocator<I>> {
        NodeLocator::new(self)
    }
}
