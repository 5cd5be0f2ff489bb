//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use gs_network::osm::load_from_pbf;
//!
//! let net = load_from_pbf(Path::new("mobile_al.osm.pbf"))?;
//! let near = net.locator()?.nodes_near(GeoPoint::new(30.69, -88.04), 250.0)?;
//! ```
//!
//! # What is loaded
//!
//! Every node and every way, with all tags.  Relations are ignored.  Extracts
//! cut along a bounding box often contain ways whose nodes fall outside the
//! box; such ways are skipped with a warning rather than failing the load.

use std::path::Path;

use osmpbf::{Element, ElementReader};

use gs_core::{NodeId, WayId};

use crate::model::{OsmNode, OsmWay, Tags};
use crate::network::OsmNet;
use crate::{NetworkError, NetworkResult};

/// Load nodes and ways from an OSM PBF file.
///
/// # Errors
///
/// Returns [`NetworkError::Osm`] if the file cannot be opened or parsed.
pub fn load_from_pbf(path: &Path) -> NetworkResult<OsmNet> {
    // ── Phase 1: one sequential pass collecting nodes and ways ────────────
    let reader = ElementReader::from_path(path).map_err(|e| NetworkError::Osm(e.to_string()))?;

    let mut nodes: Vec<OsmNode> = Vec::new();
    let mut ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => nodes.push(OsmNode::new(NodeId(n.id()), n.lat(), n.lon())),
            Element::DenseNode(n) => nodes.push(OsmNode::new(NodeId(n.id()), n.lat(), n.lon())),
            Element::Way(w) => {
                let tags: Tags = w
                    .tags()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect();
                let refs: Vec<NodeId> = w.refs().map(NodeId).collect();
                ways.push(OsmWay::new(WayId(w.id()), refs, tags));
            }
            _ => {}
        })
        .map_err(|e| NetworkError::Osm(e.to_string()))?;

    // ── Phase 2: nodes first so ways can resolve their refs ───────────────
    let mut net = OsmNet::with_capacity(nodes.len(), ways.len());
    net.add_nodes(nodes);

    let mut skipped = 0usize;
    for way in ways {
        if let Err(e) = net.add_way(way) {
            log::warn!("skipping way: {e}");
            skipped += 1;
        }
    }

    log::info!(
        "loaded {} nodes and {} ways from {} ({} ways skipped)",
        net.node_count(),
        net.way_count(),
        path.display(),
        skipped
    );

    Ok(net)
}
