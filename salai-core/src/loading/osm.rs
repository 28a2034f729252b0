//! OSM pbf processing

use std::path::Path;

use geo::Point;
use hashbrown::{HashMap, HashSet};
use log::warn;
use osmpbf::{Element, ElementReader};
use petgraph::graph::UnGraph;

use crate::geometry::haversine_km;
use crate::model::{RoadEdge, RoadNode};
use crate::{Error, Meters};

/// Highway classes that form the drivable network, mirroring the usual
/// "drive" profile of OSM-based routers.
const DRIVE_HIGHWAYS: [&str; 14] = [
    "motorway",
    "motorway_link",
    "trunk",
    "trunk_link",
    "primary",
    "primary_link",
    "secondary",
    "secondary_link",
    "tertiary",
    "tertiary_link",
    "unclassified",
    "residential",
    "living_street",
    "service",
];

fn is_drivable<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>) -> bool {
    let mut highway_ok = false;
    for (key, value) in tags {
        match key {
            // Mapped areas (plazas, parking lots) are not routable segments
            "area" if value == "yes" => return false,
            "highway" => highway_ok = DRIVE_HIGHWAYS.contains(&value),
            _ => {}
        }
    }
    highway_ok
}

/// Builds the street graph from an OSM PBF extract.
///
/// Every node of a drivable way becomes a graph node and every
/// consecutive node pair becomes an undirected edge weighted by its
/// haversine length, so returned routes follow the road geometry.
pub(crate) fn create_road_graph(path: &Path) -> Result<UnGraph<RoadNode, RoadEdge>, Error> {
    // First pass: node chains of drivable ways
    let reader = ElementReader::from_path(path)?;
    let mut ways: Vec<Vec<i64>> = Vec::new();
    let mut used_nodes: HashSet<i64> = HashSet::new();
    reader.for_each(|element| {
        if let Element::Way(way) = element {
            if !is_drivable(way.tags()) {
                return;
            }
            let refs: Vec<i64> = way.refs().collect();
            used_nodes.extend(refs.iter().copied());
            ways.push(refs);
        }
    })?;

    // Second pass: coordinates of the referenced nodes
    let reader = ElementReader::from_path(path)?;
    let mut coords: HashMap<i64, Point<f64>> = HashMap::with_capacity(used_nodes.len());
    reader.for_each(|element| match element {
        Element::Node(node) => {
            if used_nodes.contains(&node.id()) {
                coords.insert(node.id(), Point::new(node.lon(), node.lat()));
            }
        }
        Element::DenseNode(node) => {
            if used_nodes.contains(&node.id()) {
                coords.insert(node.id(), Point::new(node.lon(), node.lat()));
            }
        }
        _ => {}
    })?;

    let mut graph = UnGraph::with_capacity(coords.len(), coords.len());
    let mut node_indices: HashMap<i64, _> = HashMap::with_capacity(coords.len());
    let mut dangling_refs = 0usize;

    for way in &ways {
        for pair in way.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from == to {
                continue;
            }
            let (Some(&from_point), Some(&to_point)) = (coords.get(&from), coords.get(&to))
            else {
                // Ways at the extract boundary reference clipped nodes
                dangling_refs += 1;
                continue;
            };

            let from_idx = *node_indices.entry(from).or_insert_with(|| {
                graph.add_node(RoadNode {
                    osm_id: from,
                    geometry: from_point,
                })
            });
            let to_idx = *node_indices.entry(to).or_insert_with(|| {
                graph.add_node(RoadNode {
                    osm_id: to,
                    geometry: to_point,
                })
            });

            // Duplicate way nodes can collapse to zero length; keep edge
            // weights strictly positive for Dijkstra
            let length = (haversine_km(from_point, to_point) * 1000.0).round() as Meters;
            graph.add_edge(
                from_idx,
                to_idx,
                RoadEdge {
                    length: length.max(1),
                },
            );
        }
    }

    if dangling_refs > 0 {
        warn!("Skipped {dangling_refs} way segments referencing nodes outside the extract");
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drivable(pairs: &[(&str, &str)]) -> bool {
        is_drivable(pairs.iter().copied())
    }

    #[test]
    fn drive_profile_filters_ways() {
        assert!(drivable(&[("highway", "residential")]));
        assert!(drivable(&[("highway", "primary_link")]));
        assert!(drivable(&[("highway", "service"), ("name", "Anna Salai")]));
        assert!(!drivable(&[("highway", "footway")]));
        assert!(!drivable(&[("highway", "cycleway")]));
        assert!(!drivable(&[("building", "yes")]));
        assert!(!drivable(&[("highway", "service"), ("area", "yes")]));
        assert!(!drivable(&[]));
    }
}
