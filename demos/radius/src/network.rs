//! Synthetic Mobile, AL street network.
//!
//! Five intersections and three named roads, small enough to eyeball the
//! locator output.

use anyhow::Result;

use gs_core::{NodeId, WayId};
use gs_network::{OsmNet, OsmNode, OsmWay, Tags};

fn road(name: &str, class: &str) -> Tags {
    let mut tags = Tags::default();
    tags.insert("highway".to_owned(), class.to_owned());
    tags.insert("name".to_owned(), name.to_owned());
    tags
}

/// Build the 5-node network.
pub fn build_network() -> Result<OsmNet> {
    let mut net = OsmNet::with_capacity(5, 3);

    net.add_nodes([
        OsmNode::new(NodeId(1001), 30.710, -88.070), // north residential
        OsmNode::new(NodeId(1002), 30.670, -88.030), // south residential
        OsmNode::new(NodeId(1003), 30.695, -88.050), // downtown
        OsmNode::new(NodeId(1004), 30.700, -88.030), // commerce park
        OsmNode::new(NodeId(1005), 30.680, -88.060), // connector
    ]);

    net.add_way(OsmWay::new(
        WayId(1),
        vec![NodeId(1001), NodeId(1005), NodeId(1003)],
        road("Spring Hill Ave", "primary"),
    ))?;
    net.add_way(OsmWay::new(
        WayId(2),
        vec![NodeId(1002), NodeId(1005)],
        road("Dauphin Island Pkwy", "secondary"),
    ))?;
    net.add_way(OsmWay::new(
        WayId(3),
        vec![NodeId(1003), NodeId(1004), NodeId(1002)],
        road("Government St", "primary"),
    ))?;

    Ok(net)
}
