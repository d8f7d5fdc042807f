//! Bounded A* search over the waypoint graph, and the next-waypoint
//! fallback chain agents use when a search cannot give them a next hop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, warn};

use seeker_core::constants::MAX_PATHFIND_EXPANSIONS;
use seeker_core::fixed::{distance_3d, isqrt};
use seeker_core::types::WaypointId;

use crate::graph::{squared_range, WaypointGraph};

/// Ordered nodes from source to destination, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub nodes: Vec<WaypointId>,
    /// Summed straight-line edge lengths in fixed units.
    pub cost: i64,
}

impl Path {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl WaypointGraph {
    /// Shortest path from `source` to `destination`.
    ///
    /// Shortcut nodes are only entered when `allow_shortcuts` is set (the
    /// destination itself is always enterable). With `allow_backtracking`
    /// predecessor edges are expanded alongside successor edges. Returns
    /// `None` when no path exists or the expansion cap is reached.
    pub fn find_path(
        &self,
        source: WaypointId,
        destination: WaypointId,
        allow_shortcuts: bool,
        allow_backtracking: bool,
    ) -> Option<Path> {
        let goal = self.get(destination)?;
        self.get(source)?;

        if source == destination {
            return Some(Path {
                nodes: vec![source],
                cost: 0,
            });
        }

        let count = self.len();
        let mut best_cost: Vec<Option<i64>> = vec![None; count];
        let mut came_from: Vec<Option<WaypointId>> = vec![None; count];
        let mut closed = vec![false; count];
        let mut open = BinaryHeap::new();

        let heuristic = |id: WaypointId| -> i64 {
            self.get(id)
                .map(|n| isqrt(squared_range(&n.position, &goal.position)) as i64)
                .unwrap_or(0)
        };

        best_cost[source.index()] = Some(0);
        open.push(Reverse((heuristic(source), source)));

        let mut expansions = 0usize;
        while let Some(Reverse((_, current))) = open.pop() {
            if closed[current.index()] {
                continue;
            }
            closed[current.index()] = true;

            if current == destination {
                return Some(self.reconstruct(&came_from, &best_cost, destination));
            }

            expansions += 1;
            if expansions > MAX_PATHFIND_EXPANSIONS {
                warn!(
                    "pathfind {} -> {} gave up after {} expansions",
                    source.0, destination.0, MAX_PATHFIND_EXPANSIONS
                );
                return None;
            }

            let Some(node) = self.get(current) else {
                continue;
            };
            let g = best_cost[current.index()].unwrap_or(0);
            let backwards: &[WaypointId] = if allow_backtracking {
                node.predecessors()
            } else {
                &[]
            };

            for &next in node.successors().iter().chain(backwards) {
                let Some(neighbor) = self.get(next) else {
                    continue;
                };
                if closed[next.index()] || !neighbor.enabled {
                    continue;
                }
                if neighbor.shortcut && !allow_shortcuts && next != destination {
                    continue;
                }
                let edge = distance_3d(
                    neighbor.position.x as i64 - node.position.x as i64,
                    neighbor.position.y as i64 - node.position.y as i64,
                    neighbor.position.z as i64 - node.position.z as i64,
                );
                let tentative = g + edge;
                if best_cost[next.index()].map_or(true, |known| tentative < known) {
                    best_cost[next.index()] = Some(tentative);
                    came_from[next.index()] = Some(current);
                    open.push(Reverse((tentative + heuristic(next), next)));
                }
            }
        }

        None
    }

    fn reconstruct(
        &self,
        came_from: &[Option<WaypointId>],
        best_cost: &[Option<i64>],
        destination: WaypointId,
    ) -> Path {
        let mut nodes = vec![destination];
        let mut cursor = destination;
        while let Some(prev) = came_from[cursor.index()] {
            nodes.push(prev);
            cursor = prev;
        }
        nodes.reverse();
        Path {
            nodes,
            cost: best_cost[destination.index()].unwrap_or(0),
        }
    }
}

/// How the next waypoint was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    /// Second node of a proper path.
    Proper,
    /// Search gave no next hop; took the destination's first successor.
    ForcedSuccessor,
    /// Search gave no next hop and the destination is a dead end.
    ForcedDestination,
}

/// Pick the node an agent standing at `current` should steer toward next on
/// its way to `destination`. Always yields a node.
pub fn next_waypoint_toward(
    graph: &WaypointGraph,
    current: WaypointId,
    destination: WaypointId,
    allow_shortcuts: bool,
) -> (WaypointId, PathStep) {
    let path = graph.find_path(current, destination, allow_shortcuts, false);

    if let Some(path) = &path {
        if path.len() > 1 {
            let next = path.nodes[1];
            debug!("proper next waypoint {}", next.0);
            return (next, PathStep::Proper);
        }
    } else {
        debug!("no path {} -> {}", current.0, destination.0);
    }

    match graph.successors(destination).first() {
        Some(&next) => {
            debug!("forcing next waypoint {}", next.0);
            (next, PathStep::ForcedSuccessor)
        }
        None => {
            debug!("forcing destination {}", destination.0);
            (destination, PathStep::ForcedDestination)
        }
    }
}
