//! Unit tests for route-pathfinding: scenarios S1-S3, S7, plus Dijkstra/A*
//! optimality agreement.

#[cfg(test)]
mod fixtures {
    use std::collections::HashMap;

    use route_core::{Coordinate, Distance, EdgeId, NodeId};
    use route_graph::{Graph, VehicleProfile};

    /// Graph G1 from the routing scenarios.
    pub fn g1() -> Graph {
        let mut g = Graph::new();
        for (id, lat, lon) in [(10, 0.0, 0.0), (20, 0.0, 1.0), (30, 1.0, 0.0), (40, 1.0, 1.0), (50, 2.0, 2.0)] {
            g.add_node(NodeId::new(id), Coordinate::new(lat, lon));
        }
        let edges: &[(i64, i64, i64, f64, Option<(&str, &str)>)] = &[
            (100, 10, 20, 4.0, None),
            (101, 10, 30, 1.0, None),
            (102, 20, 40, 2.0, None),
            (103, 30, 40, 5.0, None),
            (104, 20, 10, 4.0, None),
            (105, 30, 10, 1.0, None),
            (106, 40, 20, 2.0, None),
            (107, 40, 30, 5.0, None),
            (200, 20, 50, 1.0, None),
            (201, 50, 20, 1.0, None),
            (202, 30, 50, 6.0, Some(("highway", "private"))),
            (203, 50, 30, 6.0, None),
        ];
        for &(id, from, to, meters, tag) in edges {
            let mut tags = HashMap::new();
            if let Some((k, v)) = tag {
                tags.insert(k.to_string(), v.to_string());
            }
            g.add_edge(EdgeId::new(id), NodeId::new(from), NodeId::new(to), true, Distance::new(meters).unwrap(), tags)
                .unwrap();
        }
        g
    }

    pub fn p_car() -> VehicleProfile {
        let mut p = VehicleProfile::new("p-car", "car", 80.0);
        p.set_speed_factor("private", 0.0);
        p
    }
}

#[cfg(test)]
mod scenarios {
    use route_core::{EdgeId, NodeId};

    use crate::{DijkstraAlgorithm, PathfindingAlgorithm};

    #[test]
    fn s1_shortest_path_no_profile() {
        let g = super::fixtures::g1();
        let run = DijkstraAlgorithm.find_path(&g, NodeId::new(10), NodeId::new(40), None);
        assert_eq!(run.edges, vec![EdgeId::new(100), EdgeId::new(102)]);
        let total: f64 = run.edges.iter().map(|&e| g.edge(e).unwrap().distance.meters()).sum();
        assert_eq!(total, 6.0);
    }

    #[test]
    fn s2_direct_edge() {
        let g = super::fixtures::g1();
        let run = DijkstraAlgorithm.find_path(&g, NodeId::new(10), NodeId::new(30), None);
        assert_eq!(run.edges, vec![EdgeId::new(101)]);
    }

    #[test]
    fn s3_profile_blocks_private_road() {
        let g = super::fixtures::g1();
        let profile = super::fixtures::p_car();
        let run = DijkstraAlgorithm.find_path(&g, NodeId::new(10), NodeId::new(50), Some(&profile));
        assert_eq!(run.edges, vec![EdgeId::new(100), EdgeId::new(200)]);
        let total: f64 = run.edges.iter().map(|&e| g.edge(e).unwrap().distance.meters()).sum();
        assert_eq!(total, 5.0);
    }

    #[test]
    fn s7_unreachable_node_returns_empty() {
        use route_core::Coordinate;
        let mut g = super::fixtures::g1();
        g.add_node(NodeId::new(60), Coordinate::new(10.0, 10.0));
        let run = DijkstraAlgorithm.find_path(&g, NodeId::new(10), NodeId::new(60), None);
        assert!(run.edges.is_empty());
    }

    #[test]
    fn same_start_and_end_is_trivial_empty() {
        let g = super::fixtures::g1();
        let run = DijkstraAlgorithm.find_path(&g, NodeId::new(10), NodeId::new(10), None);
        assert!(run.edges.is_empty());
    }
}

#[cfg(test)]
mod optimality {
    use route_core::NodeId;

    use crate::{AStarAlgorithm, DijkstraAlgorithm, PathfindingAlgorithm};

    fn total_distance(g: &route_graph::Graph, edges: &[route_core::EdgeId]) -> f64 {
        edges.iter().map(|&e| g.edge(e).unwrap().distance.meters()).sum()
    }

    #[test]
    fn astar_matches_dijkstra_on_every_pair() {
        let g = super::fixtures::g1();
        let ids = [10, 20, 30, 40, 50];
        for &a in &ids {
            for &b in &ids {
                if a == b {
                    continue;
                }
                let d = DijkstraAlgorithm.find_path(&g, NodeId::new(a), NodeId::new(b), None);
                let s = AStarAlgorithm.find_path(&g, NodeId::new(a), NodeId::new(b), None);
                assert!(
                    (total_distance(&g, &d.edges) - total_distance(&g, &s.edges)).abs() < 1e-6,
                    "mismatch for {a}->{b}"
                );
            }
        }
    }

    #[test]
    fn connectivity_invariant_holds() {
        let g = super::fixtures::g1();
        let run = DijkstraAlgorithm.find_path(&g, NodeId::new(10), NodeId::new(40), None);
        for window in run.edges.windows(2) {
            let a = g.edge(window[0]).unwrap();
            let b = g.edge(window[1]).unwrap();
            assert_eq!(a.target, b.source);
        }
        assert_eq!(g.edge(*run.edges.first().unwrap()).unwrap().source, NodeId::new(10));
        assert_eq!(g.edge(*run.edges.last().unwrap()).unwrap().target, NodeId::new(40));
    }
}
