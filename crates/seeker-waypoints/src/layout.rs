//! Serializable track layout and graph construction errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One waypoint as authored in a track layout, in whole map units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointSpec {
    pub id: u32,
    pub position: [i32; 3],
    pub radius: i32,
    #[serde(default)]
    pub shortcut: bool,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Successor ids in the nominal forward direction of the track.
    #[serde(default)]
    pub next: Vec<u32>,
}

fn enabled_by_default() -> bool {
    true
}

/// Complete waypoint description of a track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub waypoints: Vec<WaypointSpec>,
}

impl TrackLayout {
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reasons a layout cannot become a waypoint graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("track layout has no waypoints")]
    Empty,
    #[error("waypoint at index {index} has id {id}; ids must be dense and in order")]
    IdMismatch { index: usize, id: u32 },
    #[error("waypoint {from} links to unknown waypoint {to}")]
    UnknownSuccessor { from: u32, to: u32 },
    #[error("waypoint {id} has negative radius {radius}")]
    NegativeRadius { id: u32, radius: i32 },
    #[error("waypoint {id} has {field} {value} outside the map range")]
    OutOfRange {
        id: u32,
        field: &'static str,
        value: i32,
    },
    #[error("invalid track layout json: {0}")]
    Json(#[from] serde_json::Error),
}
