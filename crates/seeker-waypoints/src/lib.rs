//! Waypoint navigation for SEEKER.
//!
//! Static directed waypoint graph built once per track, nearest-node lookup,
//! bounded A* pathfinding, and the next-waypoint fallback chain used by
//! agents that navigate toward a competitor.

pub use seeker_core as core;

pub mod graph;
pub mod layout;
pub mod pathfind;

// Re-export key types for convenience.
pub use graph::{Waypoint, WaypointGraph};
pub use layout::{GraphError, TrackLayout, WaypointSpec};
pub use pathfind::{next_waypoint_toward, Path, PathStep};

#[cfg(test)]
mod tests;
