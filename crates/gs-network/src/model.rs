//! OSM node and way records.

use std::fmt;

use rustc_hash::FxHashMap;

use gs_core::{GeoPoint, NodeId, WayId};

/// OSM tag map (`key -> value`).
pub type Tags = FxHashMap<String, String>;

// ── OsmNode ───────────────────────────────────────────────────────────────────

/// A located OSM node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsmNode {
    pub id: NodeId,
    pub pos: GeoPoint,
}

impl OsmNode {
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Self { id, pos: GeoPoint::new(lat, lon) }
    }
}

impl fmt::Display for OsmNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OsmNode(nid={}, lat={}, lon={})", self.id, self.pos.lat, self.pos.lon)
    }
}

// ── OsmWay ────────────────────────────────────────────────────────────────────

/// An OSM way: an ordered list of node references plus tags.
///
/// Closed ways repeat their first node at the end, so `refs` may contain
/// duplicates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsmWay {
    pub id: WayId,
    pub refs: Vec<NodeId>,
    pub tags: Tags,
}

impl OsmWay {
    pub fn new(id: WayId, refs: Vec<NodeId>, tags: Tags) -> Self {
        Self { id, refs, tags }
    }

    pub fn has_node(&self, node: NodeId) -> bool {
        self.refs.contains(&node)
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// `true` if the way carries any `highway=*` tag.
    pub fn is_highway(&self) -> bool {
        self.tags.contains_key("highway")
    }

    pub fn has_name(&self) -> bool {
        self.tags.contains_key("name")
    }

    pub fn name(&self) -> Option<&str> {
        self.tag("name")
    }
}

impl fmt::Display for OsmWay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) if self.is_highway() => write!(f, "OsmWay(wid={}, name={})", self.id, name),
            _ => write!(f, "OsmWay(wid={})", self.id),
        }
    }
}
