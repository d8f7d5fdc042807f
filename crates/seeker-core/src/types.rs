//! Fundamental geometric and identity types.

use serde::{Deserialize, Serialize};

use crate::fixed::{approx_distance, int_to_fixed, Fixed};

/// 3D vector in fixed-point map space.
/// x/y span the track plane, z is height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedVec3 {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
}

impl FixedVec3 {
    pub const ZERO: FixedVec3 = FixedVec3 { x: 0, y: 0, z: 0 };

    pub fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }

    /// Build from whole map units.
    pub fn from_units(x: i32, y: i32, z: i32) -> Self {
        Self::new(int_to_fixed(x), int_to_fixed(y), int_to_fixed(z))
    }

    /// Cheap 3D range estimate (nested octagonal approximation).
    /// Saturates at `i32::MAX` for points on opposite map edges.
    pub fn approx_range_to(&self, other: &FixedVec3) -> Fixed {
        approx_distance(
            approx_distance(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y)),
            self.z.saturating_sub(other.z),
        )
    }

    /// Component-wise wrapping add, matching simulation overflow semantics.
    pub fn wrapping_add(&self, other: &FixedVec3) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

/// Player slot of a competitor. Iteration over competitors always runs in
/// ascending slot order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CompetitorId(pub u8);

/// Identity of a homing agent, assigned at launch in spawn order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AgentId(pub u32);

/// Index of a node in the waypoint graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WaypointId(pub u32);

impl WaypointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
