//! Unit tests for route-tsp: Matrix M1 scenarios S4-S6 plus solver
//! invariants shared by IG, IGN and ILS-B.

#[cfg(test)]
mod fixtures {
    use route_core::NodeId;

    use crate::TspMatrix;

    /// Matrix M1: waypoint ids {100, 200, 300, 400}, symmetric distances.
    pub fn m1() -> TspMatrix {
        let waypoints = vec![NodeId::new(100), NodeId::new(200), NodeId::new(300), NodeId::new(400)];
        #[rustfmt::skip]
        let distances = vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ];
        TspMatrix::from_distances(waypoints, distances)
    }
}

#[cfg(test)]
mod matrix_scenarios {
    #[test]
    fn s4_closed_tour_cost() {
        let m = super::fixtures::m1();
        assert_eq!(m.tour_cost(&[0, 1, 3, 2], true), 80.0);
    }

    #[test]
    fn s5_open_tour_cost() {
        let m = super::fixtures::m1();
        assert_eq!(m.tour_cost(&[0, 1, 3, 2], false), 65.0);
    }

    #[test]
    fn s6_nearest_neighbor_route() {
        let m = super::fixtures::m1();
        assert_eq!(m.nearest_neighbor_route(0), vec![0, 1, 3, 2]);
    }

    #[test]
    fn tour_cost_is_idempotent() {
        let m = super::fixtures::m1();
        let a = m.tour_cost(&[0, 1, 3, 2], true);
        let b = m.tour_cost(&[0, 1, 3, 2], true);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn has_valid_solution_true_when_all_finite() {
        let m = super::fixtures::m1();
        assert!(m.has_valid_solution());
        assert!(m.unreachable_pairs().is_empty());
    }

    #[test]
    fn unreachable_pair_is_detected() {
        use route_core::NodeId;
        let waypoints = vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)];
        let distances = vec![
            vec![0.0, 5.0, f64::INFINITY],
            vec![5.0, 0.0, f64::INFINITY],
            vec![f64::INFINITY, f64::INFINITY, 0.0],
        ];
        let m = crate::TspMatrix::from_distances(waypoints, distances);
        assert!(!m.has_valid_solution());
        let pairs = m.unreachable_pairs();
        assert!(pairs.contains(&(0, 2)));
        assert!(pairs.contains(&(2, 0)));
        assert!(pairs.contains(&(1, 2)));
        assert!(pairs.contains(&(2, 1)));
    }
}

#[cfg(test)]
mod solver_invariants {
    use route_core::SolverRng;

    use crate::{IgSolver, IgnSolver, IlsBSolver, TspSolver};

    fn assert_is_permutation(route: &[usize], n: usize) {
        assert_eq!(route.len(), n);
        let mut seen: Vec<usize> = route.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), n);
        assert!(seen.iter().zip(0..n).all(|(&a, b)| a == b));
    }

    #[test]
    fn ig_returns_valid_permutation_starting_at_zero() {
        let m = super::fixtures::m1();
        let mut rng = SolverRng::seeded(42);
        let solver = IgSolver { iterations: 20 };
        let route = solver.solve(&m, 0, &mut rng);
        assert_is_permutation(&route, m.len());
        assert_eq!(route[0], 0);
    }

    #[test]
    fn ign_returns_valid_permutation_starting_at_zero() {
        let m = super::fixtures::m1();
        let mut rng = SolverRng::seeded(7);
        let solver = IgnSolver { iterations: 20 };
        let route = solver.solve(&m, 0, &mut rng);
        assert_is_permutation(&route, m.len());
        assert_eq!(route[0], 0);
    }

    #[test]
    fn ilsb_returns_valid_permutation_starting_at_zero() {
        let m = super::fixtures::m1();
        let mut rng = SolverRng::seeded(99);
        let solver = IlsBSolver { iterations: 20 };
        let route = solver.solve(&m, 0, &mut rng);
        assert_is_permutation(&route, m.len());
        assert_eq!(route[0], 0);
    }

    #[test]
    fn ensure_start_honors_a_nonzero_start_index() {
        let m = super::fixtures::m1();
        let mut rng = SolverRng::seeded(3);
        let solver = IgSolver { iterations: 10 };
        let route = solver.solve(&m, 2, &mut rng);
        assert_is_permutation(&route, m.len());
        assert_eq!(route[0], 2);
    }

    #[test]
    fn solver_names_are_distinct() {
        assert_eq!(IgSolver::default().name(), "ig");
        assert_eq!(IgnSolver::default().name(), "ign");
        assert_eq!(IlsBSolver::default().name(), "ilsb");
    }
}
