//! Unit tests for route-graph.
//!
//! All tests use hand-crafted graphs so they run without any snapshot file.

#[cfg(test)]
mod helpers {
    use std::collections::HashMap;

    use route_core::{Coordinate, Distance, EdgeId, NodeId};

    use crate::Graph;

    /// Graph G1 from the routing scenarios: 5 nodes, one-way edges, plus a
    /// `"highway": "private"` tag on edge 202.
    pub fn g1() -> Graph {
        let mut g = Graph::new();
        for (id, lat, lon) in [(10, 0.0, 0.0), (20, 0.0, 1.0), (30, 1.0, 0.0), (40, 1.0, 1.0), (50, 2.0, 2.0)] {
            g.add_node(NodeId::new(id), Coordinate::new(lat, lon));
        }

        let edges: &[(i64, i64, i64, f64)] = &[
            (100, 10, 20, 4.0),
            (101, 10, 30, 1.0),
            (102, 20, 40, 2.0),
            (103, 30, 40, 5.0),
            (104, 20, 10, 4.0),
            (105, 30, 10, 1.0),
            (106, 40, 20, 2.0),
            (107, 40, 30, 5.0),
            (200, 20, 50, 1.0),
            (201, 50, 20, 1.0),
            (202, 30, 50, 6.0),
            (203, 50, 30, 6.0),
        ];
        for &(id, from, to, meters) in edges {
            let mut tags = HashMap::new();
            if id == 202 {
                tags.insert("highway".to_string(), "private".to_string());
            }
            g.add_edge(
                EdgeId::new(id),
                NodeId::new(from),
                NodeId::new(to),
                true,
                Distance::new(meters).unwrap(),
                tags,
            )
            .unwrap();
        }
        g
    }
}

#[cfg(test)]
mod graph_mutation {
    use std::collections::HashMap;

    use route_core::{Coordinate, Distance, EdgeId, NodeId, RouteError};

    use crate::Graph;

    #[test]
    fn empty_graph_has_no_nodes_or_edges() {
        let g = Graph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn add_edge_rejects_missing_source() {
        let mut g = Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(0.0, 0.0));
        let err = g
            .add_edge(EdgeId::new(1), NodeId::new(99), NodeId::new(1), false, Distance::zero(), HashMap::new())
            .unwrap_err();
        assert!(matches!(err, RouteError::InvalidArgument(_)));
    }

    #[test]
    fn add_edge_rejects_missing_target() {
        let mut g = Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(0.0, 0.0));
        let err = g
            .add_edge(EdgeId::new(1), NodeId::new(1), NodeId::new(99), false, Distance::zero(), HashMap::new())
            .unwrap_err();
        assert!(matches!(err, RouteError::InvalidArgument(_)));
    }

    #[test]
    fn clear_drops_everything() {
        let mut g = super::helpers::g1();
        g.clear();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.bounds().is_none());
    }

    #[test]
    fn re_adding_a_node_updates_coordinate_not_count() {
        let mut g = Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(0.0, 0.0));
        g.add_node(NodeId::new(1), Coordinate::new(5.0, 5.0));
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node(NodeId::new(1)).unwrap().coordinate, Coordinate::new(5.0, 5.0));
    }
}

#[cfg(test)]
mod adjacency {
    use route_core::NodeId;

    #[test]
    fn outgoing_contains_source_and_non_one_way_target_edges() {
        let g = super::helpers::g1();
        // Node 10 has outgoing edges 100, 101 (all edges in G1 are one-way,
        // so no target-side edges apply).
        let mut out: Vec<i64> = g.outgoing(NodeId::new(10)).iter().map(|e| e.value()).collect();
        out.sort();
        assert_eq!(out, vec![100, 101]);
    }

    #[test]
    fn non_one_way_edge_appears_in_both_adjacency_lists() {
        use route_core::{Coordinate, Distance, EdgeId};
        use std::collections::HashMap;

        let mut g = crate::Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(0.0, 0.0));
        g.add_node(NodeId::new(2), Coordinate::new(0.0, 1.0));
        g.add_edge(EdgeId::new(1), NodeId::new(1), NodeId::new(2), false, Distance::new(10.0).unwrap(), HashMap::new())
            .unwrap();

        assert_eq!(g.outgoing(NodeId::new(1)), vec![EdgeId::new(1)]);
        assert_eq!(g.outgoing(NodeId::new(2)), vec![EdgeId::new(1)]);
    }

    #[test]
    fn unknown_node_has_empty_adjacency() {
        let g = super::helpers::g1();
        assert!(g.outgoing(NodeId::new(999)).is_empty());
    }
}

#[cfg(test)]
mod profile {
    use std::collections::HashMap;

    use crate::VehicleProfileFactory;

    #[test]
    fn car_blocks_footway() {
        let car = VehicleProfileFactory::car();
        assert!(car.is_blocked("footway"));
        assert_eq!(car.speed_factor("motorway"), 1.5);
    }

    #[test]
    fn pedestrian_blocks_motorway() {
        let ped = VehicleProfileFactory::pedestrian();
        assert!(ped.is_blocked("motorway"));
        assert_eq!(ped.speed_factor("footway"), 1.5);
    }

    #[test]
    fn no_highway_tag_is_always_suitable() {
        let car = VehicleProfileFactory::car();
        assert!(car.is_road_suitable(&HashMap::new()));
    }

    #[test]
    fn private_highway_tag_blocked_for_g1_profile() {
        let mut p = crate::VehicleProfile::new("p-car", "car", 80.0);
        p.set_speed_factor("private", 0.0);
        let mut tags = HashMap::new();
        tags.insert("highway".to_string(), "private".to_string());
        assert!(!p.is_road_suitable(&tags));
    }

    #[test]
    fn car_preferred_avoided_blocked_partition() {
        let car = VehicleProfileFactory::car();
        assert!(car.preferred_classes().contains(&"motorway"));
        assert!(car.avoided_classes().contains(&"track"));
        assert!(car.blocked_classes().contains(&"footway"));
    }
}

#[cfg(test)]
mod codec {
    use std::collections::HashMap;
    use std::io::Cursor;

    use route_core::{Coordinate, Distance, EdgeId, NodeId};

    use crate::codec::{read_graph, write_graph};
    use crate::graph::Bounds;
    use crate::Graph;

    #[test]
    fn round_trip_preserves_nodes_edges_tags_and_bounds() {
        let mut g = Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(10.0, 20.0));
        g.add_node(NodeId::new(2), Coordinate::new(11.0, 21.0));
        let mut tags = HashMap::new();
        tags.insert("highway".to_string(), "residential".to_string());
        tags.insert("name".to_string(), "Main St".to_string());
        g.add_edge(EdgeId::new(1), NodeId::new(1), NodeId::new(2), true, Distance::new(150.0).unwrap(), tags)
            .unwrap();
        g.set_bounds(Some(Bounds { min_lat: 10.0, max_lat: 11.0, min_lon: 20.0, max_lon: 21.0 }));

        let mut buf = Vec::new();
        write_graph(&g, &mut buf, "mem").unwrap();

        let loaded = read_graph(&mut Cursor::new(buf), "mem", None, None).unwrap();
        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.edge_count(), 1);
        assert_eq!(loaded.node(NodeId::new(1)).unwrap().coordinate, Coordinate::new(10.0, 20.0));

        let edge = loaded.edge(EdgeId::new(1)).unwrap();
        assert_eq!(edge.source, NodeId::new(1));
        assert_eq!(edge.target, NodeId::new(2));
        assert!(edge.one_way);
        assert_eq!(edge.distance.meters(), 150.0);
        assert_eq!(edge.tags.get("highway").map(String::as_str), Some("residential"));
        assert_eq!(edge.tags.get("name").map(String::as_str), Some("Main St"));

        assert_eq!(loaded.bounds(), g.bounds());
    }

    #[test]
    fn round_trip_preserves_none_bounds() {
        let mut g = Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(10.0, 20.0));
        g.add_node(NodeId::new(2), Coordinate::new(11.0, 21.0));
        g.add_edge(EdgeId::new(1), NodeId::new(1), NodeId::new(2), true, Distance::new(150.0).unwrap(), HashMap::new())
            .unwrap();
        assert!(g.bounds().is_none());

        let mut buf = Vec::new();
        write_graph(&g, &mut buf, "mem").unwrap();

        let loaded = read_graph(&mut Cursor::new(buf), "mem", None, None).unwrap();
        assert!(loaded.bounds().is_none());
    }

    #[test]
    fn rejects_bad_magic() {
        let bytes = vec![0u8; 200];
        let err = read_graph(&mut Cursor::new(bytes), "bad", None, None).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn serializing_twice_is_byte_identical() {
        let g = super::helpers::g1();
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_graph(&g, &mut a, "mem").unwrap();
        write_graph(&g, &mut b, "mem").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_tag_key_is_skipped_on_read() {
        let mut g = Graph::new();
        g.add_node(NodeId::new(1), Coordinate::new(0.0, 0.0));
        g.add_node(NodeId::new(2), Coordinate::new(0.0, 1.0));
        let mut tags = HashMap::new();
        tags.insert(String::new(), "ignored".to_string());
        g.add_edge(EdgeId::new(1), NodeId::new(1), NodeId::new(2), true, Distance::new(1.0).unwrap(), tags)
            .unwrap();

        let mut buf = Vec::new();
        write_graph(&g, &mut buf, "mem").unwrap();
        let loaded = read_graph(&mut Cursor::new(buf), "mem", None, None).unwrap();
        assert!(loaded.edge(EdgeId::new(1)).unwrap().tags.is_empty());
    }
}

#[cfg(test)]
mod street_name {
    use route_core::{Distance, EdgeId, NodeId};
    use std::collections::HashMap;

    use crate::Edge;

    #[test]
    fn prefers_name_tag() {
        let mut tags = HashMap::new();
        tags.insert("highway".to_string(), "residential".to_string());
        tags.insert("name".to_string(), "Elm Street".to_string());
        let e = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), false, Distance::zero(), tags);
        assert_eq!(e.street_name(), "Elm Street");
    }

    #[test]
    fn falls_back_to_highway_class() {
        let mut tags = HashMap::new();
        tags.insert("highway".to_string(), "motorway".to_string());
        let e = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), false, Distance::zero(), tags);
        assert_eq!(e.street_name(), "Highway");
    }

    #[test]
    fn falls_back_when_no_tags_at_all() {
        let e = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), false, Distance::zero(), HashMap::new());
        assert_eq!(e.street_name(), "Unnamed Road");
    }
}
