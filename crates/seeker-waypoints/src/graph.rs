//! Waypoint graph storage and lookups.
//!
//! The graph is immutable once built and may be shared by every agent.

use seeker_core::fixed::{int_to_fixed, units_in_range, Fixed};
use seeker_core::types::{FixedVec3, WaypointId};

use crate::layout::{GraphError, TrackLayout};

/// A node in the track's guidance graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint {
    pub id: WaypointId,
    pub position: FixedVec3,
    pub radius: Fixed,
    /// Entering this node counts as taking a shortcut.
    pub shortcut: bool,
    pub enabled: bool,
    next: Vec<WaypointId>,
    prev: Vec<WaypointId>,
}

impl Waypoint {
    pub fn successors(&self) -> &[WaypointId] {
        &self.next
    }

    pub fn predecessors(&self) -> &[WaypointId] {
        &self.prev
    }
}

/// Static directed waypoint graph. Node ids are dense indices.
#[derive(Debug, Clone, Default)]
pub struct WaypointGraph {
    nodes: Vec<Waypoint>,
}

impl WaypointGraph {
    /// Build and validate a graph from an authored layout.
    pub fn from_layout(layout: &TrackLayout) -> Result<Self, GraphError> {
        if layout.waypoints.is_empty() {
            return Err(GraphError::Empty);
        }

        let count = layout.waypoints.len();
        let mut nodes = Vec::with_capacity(count);
        for (index, spec) in layout.waypoints.iter().enumerate() {
            if spec.id as usize != index {
                return Err(GraphError::IdMismatch { index, id: spec.id });
            }
            if spec.radius < 0 {
                return Err(GraphError::NegativeRadius {
                    id: spec.id,
                    radius: spec.radius,
                });
            }
            let [x, y, z] = spec.position;
            for (field, value) in [("x", x), ("y", y), ("z", z), ("radius", spec.radius)] {
                if !units_in_range(value) {
                    return Err(GraphError::OutOfRange {
                        id: spec.id,
                        field,
                        value,
                    });
                }
            }
            let mut next = Vec::with_capacity(spec.next.len());
            for &to in &spec.next {
                if to as usize >= count {
                    return Err(GraphError::UnknownSuccessor { from: spec.id, to });
                }
                next.push(WaypointId(to));
            }
            nodes.push(Waypoint {
                id: WaypointId(spec.id),
                position: FixedVec3::from_units(x, y, z),
                radius: int_to_fixed(spec.radius),
                shortcut: spec.shortcut,
                enabled: spec.enabled,
                next,
                prev: Vec::new(),
            });
        }

        // Derive reverse edges in ascending source order.
        for from in 0..count {
            let successors = nodes[from].next.clone();
            for to in successors {
                nodes[to.index()].prev.push(WaypointId(from as u32));
            }
        }

        Ok(Self { nodes })
    }

    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        Self::from_layout(&TrackLayout::from_json_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.nodes.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.nodes.iter()
    }

    /// Successors of a node; empty for unknown ids.
    pub fn successors(&self, id: WaypointId) -> &[WaypointId] {
        self.get(id).map(Waypoint::successors).unwrap_or(&[])
    }

    pub fn is_shortcut(&self, id: WaypointId) -> bool {
        self.get(id).is_some_and(|w| w.shortcut)
    }

    /// Closest enabled waypoint to an arbitrary position (3D, exact).
    /// Ties go to the lowest id. `None` only when no node is enabled.
    pub fn nearest(&self, position: &FixedVec3) -> Option<WaypointId> {
        let mut best: Option<(u128, WaypointId)> = None;
        for node in self.nodes.iter().filter(|n| n.enabled) {
            let d = squared_range(&node.position, position);
            if best.map_or(true, |(best_d, _)| d < best_d) {
                best = Some((d, node.id));
            }
        }
        best.map(|(_, id)| id)
    }
}

/// Squared 3D distance in fixed units, widened to avoid overflow.
pub(crate) fn squared_range(a: &FixedVec3, b: &FixedVec3) -> u128 {
    let dx = (a.x as i64 - b.x as i64).unsigned_abs() as u128;
    let dy = (a.y as i64 - b.y as i64).unsigned_abs() as u128;
    let dz = (a.z as i64 - b.z as i64).unsigned_abs() as u128;
    dx * dx + dy * dy + dz * dz
}
