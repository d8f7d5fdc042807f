#[cfg(test)]
mod tests {
    use seeker_core::fixed::int_to_fixed;
    use seeker_core::types::{FixedVec3, WaypointId};

    use crate::graph::WaypointGraph;
    use crate::layout::{GraphError, TrackLayout, WaypointSpec};
    use crate::pathfind::{next_waypoint_toward, PathStep};

    fn spec(id: u32, x: i32, y: i32, next: &[u32]) -> WaypointSpec {
        WaypointSpec {
            id,
            position: [x, y, 0],
            radius: 64,
            shortcut: false,
            enabled: true,
            next: next.to_vec(),
        }
    }

    /// Square loop 0 -> 1 -> 2 -> 3 -> 0 with a diagonal shortcut 0 -> 4 -> 2.
    fn loop_with_shortcut() -> WaypointGraph {
        let mut shortcut = spec(4, 500, 500, &[2]);
        shortcut.shortcut = true;
        let layout = TrackLayout {
            waypoints: vec![
                spec(0, 0, 0, &[1, 4]),
                spec(1, 1000, 0, &[2]),
                spec(2, 1000, 1000, &[3]),
                spec(3, 0, 1000, &[0]),
                shortcut,
            ],
        };
        WaypointGraph::from_layout(&layout).unwrap()
    }

    /// Straight line 0 -> 1 -> 2 ending in a dead end.
    fn dead_end_line() -> WaypointGraph {
        let layout = TrackLayout {
            waypoints: vec![
                spec(0, 0, 0, &[1]),
                spec(1, 1000, 0, &[2]),
                spec(2, 2000, 0, &[]),
            ],
        };
        WaypointGraph::from_layout(&layout).unwrap()
    }

    // ---- Construction ----

    #[test]
    fn test_layout_rejects_empty() {
        let err = WaypointGraph::from_layout(&TrackLayout::default()).unwrap_err();
        assert!(matches!(err, GraphError::Empty));
    }

    #[test]
    fn test_layout_rejects_sparse_ids() {
        let layout = TrackLayout {
            waypoints: vec![spec(0, 0, 0, &[]), spec(5, 10, 0, &[])],
        };
        let err = WaypointGraph::from_layout(&layout).unwrap_err();
        assert!(matches!(err, GraphError::IdMismatch { index: 1, id: 5 }));
    }

    #[test]
    fn test_layout_rejects_unknown_successor() {
        let layout = TrackLayout {
            waypoints: vec![spec(0, 0, 0, &[9])],
        };
        let err = WaypointGraph::from_layout(&layout).unwrap_err();
        assert!(matches!(err, GraphError::UnknownSuccessor { from: 0, to: 9 }));
    }

    #[test]
    fn test_layout_rejects_negative_radius() {
        let mut bad = spec(0, 0, 0, &[]);
        bad.radius = -1;
        let err = WaypointGraph::from_layout(&TrackLayout {
            waypoints: vec![bad],
        })
        .unwrap_err();
        assert!(matches!(err, GraphError::NegativeRadius { id: 0, radius: -1 }));
    }

    #[test]
    fn test_out_of_range_units_rejected() {
        // 40,000 units would wrap when shifted into 16.16
        let err = WaypointGraph::from_layout(&TrackLayout {
            waypoints: vec![spec(0, 40_000, 0, &[])],
        })
        .unwrap_err();
        assert!(matches!(
            err,
            GraphError::OutOfRange { id: 0, field: "x", value: 40_000 }
        ));

        let mut wide = spec(0, 0, 0, &[]);
        wide.radius = 32_768;
        let err = WaypointGraph::from_layout(&TrackLayout { waypoints: vec![wide] }).unwrap_err();
        assert!(matches!(err, GraphError::OutOfRange { field: "radius", .. }));

        let edge = WaypointGraph::from_layout(&TrackLayout {
            waypoints: vec![spec(0, 32_767, -32_767, &[])],
        })
        .unwrap();
        let node = edge.get(WaypointId(0)).unwrap();
        assert_eq!(node.position.x, int_to_fixed(32_767));
        assert_eq!(node.position.y, int_to_fixed(-32_767));
    }

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "waypoints": [
                { "id": 0, "position": [0, 0, 0], "radius": 128, "next": [1] },
                { "id": 1, "position": [512, 0, 32], "radius": 128, "shortcut": true, "next": [0] }
            ]
        }"#;
        let graph = WaypointGraph::from_json_str(json).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(graph.is_shortcut(WaypointId(1)));
        assert!(!graph.is_shortcut(WaypointId(0)));
        let node = graph.get(WaypointId(1)).unwrap();
        assert!(node.enabled, "enabled defaults to true");
        assert_eq!(node.position, FixedVec3::from_units(512, 0, 32));
        assert_eq!(node.radius, int_to_fixed(128));

        let err = WaypointGraph::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn test_predecessors_derived() {
        let graph = loop_with_shortcut();
        let node = graph.get(WaypointId(2)).unwrap();
        assert_eq!(node.predecessors(), &[WaypointId(1), WaypointId(4)]);
        assert_eq!(graph.successors(WaypointId(0)), &[WaypointId(1), WaypointId(4)]);
        assert!(graph.successors(WaypointId(99)).is_empty());
    }

    // ---- Nearest ----

    #[test]
    fn test_nearest_picks_closest() {
        let graph = loop_with_shortcut();
        let pos = FixedVec3::from_units(900, 80, 0);
        assert_eq!(graph.nearest(&pos), Some(WaypointId(1)));
        let pos = FixedVec3::from_units(480, 520, 0);
        assert_eq!(graph.nearest(&pos), Some(WaypointId(4)));
    }

    #[test]
    fn test_nearest_tie_goes_to_lowest_id() {
        let graph = dead_end_line();
        let midway = FixedVec3::from_units(500, 0, 0);
        assert_eq!(graph.nearest(&midway), Some(WaypointId(0)));
    }

    #[test]
    fn test_nearest_skips_disabled() {
        let mut disabled = spec(1, 100, 0, &[]);
        disabled.enabled = false;
        let layout = TrackLayout {
            waypoints: vec![spec(0, 5000, 0, &[]), disabled],
        };
        let graph = WaypointGraph::from_layout(&layout).unwrap();
        assert_eq!(graph.nearest(&FixedVec3::ZERO), Some(WaypointId(0)));
    }

    // ---- Pathfinding ----

    #[test]
    fn test_path_to_self_is_single_node() {
        let graph = loop_with_shortcut();
        let path = graph
            .find_path(WaypointId(2), WaypointId(2), false, false)
            .unwrap();
        assert_eq!(path.nodes, vec![WaypointId(2)]);
        assert_eq!(path.cost, 0);
    }

    #[test]
    fn test_path_around_cycle_terminates() {
        let graph = loop_with_shortcut();
        // 1 -> 0 must go the long way round the loop.
        let path = graph
            .find_path(WaypointId(1), WaypointId(0), false, false)
            .unwrap();
        assert_eq!(
            path.nodes,
            vec![WaypointId(1), WaypointId(2), WaypointId(3), WaypointId(0)]
        );
        assert_eq!(path.cost, int_to_fixed(3000) as i64);
    }

    #[test]
    fn test_shortcut_excluded_unless_allowed() {
        let graph = loop_with_shortcut();
        let normal = graph
            .find_path(WaypointId(0), WaypointId(2), false, false)
            .unwrap();
        assert_eq!(normal.nodes, vec![WaypointId(0), WaypointId(1), WaypointId(2)]);

        let cut = graph
            .find_path(WaypointId(0), WaypointId(2), true, false)
            .unwrap();
        assert_eq!(cut.nodes, vec![WaypointId(0), WaypointId(4), WaypointId(2)]);
        assert!(cut.cost < normal.cost);
    }

    #[test]
    fn test_shortcut_destination_always_enterable() {
        let graph = loop_with_shortcut();
        let path = graph
            .find_path(WaypointId(0), WaypointId(4), false, false)
            .unwrap();
        assert_eq!(path.nodes, vec![WaypointId(0), WaypointId(4)]);
    }

    #[test]
    fn test_backtracking_required_to_go_backwards() {
        let graph = dead_end_line();
        assert!(graph
            .find_path(WaypointId(2), WaypointId(0), false, false)
            .is_none());
        let back = graph
            .find_path(WaypointId(2), WaypointId(0), false, true)
            .unwrap();
        assert_eq!(back.nodes, vec![WaypointId(2), WaypointId(1), WaypointId(0)]);
    }

    #[test]
    fn test_path_unknown_ids_fail() {
        let graph = dead_end_line();
        assert!(graph
            .find_path(WaypointId(0), WaypointId(42), true, true)
            .is_none());
        assert!(graph
            .find_path(WaypointId(42), WaypointId(0), true, true)
            .is_none());
    }

    #[test]
    fn test_path_skips_disabled_nodes() {
        let mut blocked = spec(1, 1000, 0, &[2]);
        blocked.enabled = false;
        let layout = TrackLayout {
            waypoints: vec![spec(0, 0, 0, &[1]), blocked, spec(2, 2000, 0, &[])],
        };
        let graph = WaypointGraph::from_layout(&layout).unwrap();
        assert!(graph
            .find_path(WaypointId(0), WaypointId(2), true, false)
            .is_none());
    }

    // ---- Fallback chain ----

    #[test]
    fn test_next_waypoint_proper() {
        let graph = loop_with_shortcut();
        let (next, step) = next_waypoint_toward(&graph, WaypointId(0), WaypointId(2), false);
        assert_eq!(next, WaypointId(1));
        assert_eq!(step, PathStep::Proper);
    }

    #[test]
    fn test_next_waypoint_forced_successor_when_arrived() {
        let graph = loop_with_shortcut();
        let (next, step) = next_waypoint_toward(&graph, WaypointId(2), WaypointId(2), false);
        assert_eq!(next, WaypointId(3));
        assert_eq!(step, PathStep::ForcedSuccessor);
    }

    #[test]
    fn test_next_waypoint_dead_end_selects_destination() {
        let graph = dead_end_line();
        let (next, step) = next_waypoint_toward(&graph, WaypointId(2), WaypointId(2), false);
        assert_eq!(next, WaypointId(2));
        assert_eq!(step, PathStep::ForcedDestination);
    }

    #[test]
    fn test_next_waypoint_unreachable_falls_back() {
        let graph = dead_end_line();
        // 2 -> 1 is unreachable going forwards; 1 has a successor.
        let (next, step) = next_waypoint_toward(&graph, WaypointId(2), WaypointId(1), false);
        assert_eq!(next, WaypointId(2));
        assert_eq!(step, PathStep::ForcedSuccessor);
    }
}
