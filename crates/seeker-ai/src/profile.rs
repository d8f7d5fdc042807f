//! Tuning profile for the pursuit controller.
//!
//! Consolidates the controller's distances, timers and turn rates so a
//! simulation can load them from configuration.

use serde::{Deserialize, Serialize};

use seeker_core::constants::*;
use seeker_core::fixed::Fixed;

/// Behavioral tuning for homing agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitProfile {
    /// Range at which Seek locks on (map units, scaled by the target's scale).
    pub acquire_range: i32,
    /// Neutral separation for the chase speed law (map units, target scale).
    pub comfort_range: i32,
    /// Initial ramming search radius (map units, map scale).
    pub steer_radius: i32,
    /// Absolute chase speed floor (map units per tick, target scale).
    pub min_chase_speed: i32,
    /// Chase persistence without the lead, in ticks.
    pub chase_timer_ticks: u32,
    /// Stand-down after losing a target, in ticks.
    pub wait_ticks: u32,
    /// Fraction of the remaining turn taken per tick while seeking.
    pub seek_turn_lerp: Fixed,
    /// Fraction of the remaining turn taken per tick while chasing.
    pub chase_turn_lerp: Fixed,
    /// Minimum waypoint arrival radius (map units).
    pub waypoint_radius_floor: i32,
    /// Indirect item cooldown raised every think.
    pub item_cooldown_ticks: u32,
}

impl Default for PursuitProfile {
    fn default() -> Self {
        Self {
            acquire_range: ACQUIRE_RANGE,
            comfort_range: COMFORT_RANGE,
            steer_radius: STEER_RADIUS,
            min_chase_speed: MIN_CHASE_SPEED,
            chase_timer_ticks: CHASE_TIMER_TICKS,
            wait_ticks: WAIT_TICKS,
            seek_turn_lerp: SEEK_TURN_LERP,
            chase_turn_lerp: CHASE_TURN_LERP,
            waypoint_radius_floor: DEFAULT_WAYPOINT_RADIUS,
            item_cooldown_ticks: ITEM_COOLDOWN_TICKS,
        }
    }
}
