//! Plain data records for homing agents and the competitors they hunt.
//!
//! Game logic lives in the controller, not here; the only methods are
//! liveness predicates that every consumer must agree on.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::constants::{AGENT_HEIGHT, LAUNCH_NO_THINK_TICKS};
use crate::enums::{CarryMode, EffectKind, PursuitMode};
use crate::fixed::{int_to_fixed, Fixed, FRACUNIT};
use crate::types::{AgentId, CompetitorId, FixedVec3, WaypointId};

/// A homing projectile. Owned and mutated only by its own think.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomingAgent {
    pub id: AgentId,
    pub position: FixedVec3,
    pub momentum: FixedVec3,
    /// Horizontal heading.
    pub angle: Angle,
    /// Vertical heading.
    pub pitch: Angle,
    pub scale: Fixed,
    pub height: Fixed,
    pub health: i32,
    /// Ticks of hit-stun remaining. While non-zero the agent neither thinks nor moves.
    pub hitlag: u32,
    /// Floor and ceiling heights under the agent, supplied by the world each tick.
    pub floor_z: Fixed,
    pub ceiling_z: Fixed,

    pub mode: PursuitMode,
    /// Ticks remaining until a forced transition.
    pub mode_timer: u32,
    /// Smoothed chase speed.
    pub stored_speed: Fixed,
    /// Most recently chased competitor, remembered across a Wait.
    pub last_target: Option<CompetitorId>,
    pub current_waypoint: Option<WaypointId>,
    pub no_think_ticks: u32,
    /// Competitor currently being pursued. Observation only; validated on every use.
    pub chased: Option<CompetitorId>,
    /// Competitor who launched the agent; cosmetic tint only.
    pub owner: Option<CompetitorId>,
}

impl HomingAgent {
    /// Create a freshly launched agent in Seek mode.
    pub fn launch(
        id: AgentId,
        owner: Option<CompetitorId>,
        position: FixedVec3,
        angle: Angle,
        default_speed: Fixed,
    ) -> Self {
        Self {
            id,
            position,
            momentum: FixedVec3::ZERO,
            angle,
            pitch: 0,
            scale: FRACUNIT,
            height: int_to_fixed(AGENT_HEIGHT),
            health: 1,
            hitlag: 0,
            floor_z: i32::MIN,
            ceiling_z: i32::MAX,
            mode: PursuitMode::Seek,
            mode_timer: 0,
            stored_speed: default_speed,
            last_target: None,
            current_waypoint: None,
            no_think_ticks: LAUNCH_NO_THINK_TICKS,
            chased: None,
            owner,
        }
    }
}

/// Physical presence of a competitor on the track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacerBody {
    pub position: FixedVec3,
    pub momentum: FixedVec3,
    pub scale: Fixed,
    pub health: i32,
    pub on_ground: bool,
    /// Ticks of hit-stun remaining.
    pub hitlag: u32,
}

/// A race participant as seen by the controller. Referenced, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub in_game: bool,
    pub spectator: bool,
    /// Crossed the finish line and is leaving the race.
    pub exiting: bool,
    pub respawning: bool,
    /// Current race position, 1 = leading.
    pub rank: u8,
    /// Speed stat, 1..=9.
    pub kart_speed: u8,
    /// Weight stat, 1..=9.
    pub kart_weight: u8,
    /// Current ground speed.
    pub speed: Fixed,
    /// Top speed for this competitor's stats at the current scale.
    pub top_speed: Fixed,
    pub carry: CarryMode,
    /// Momentum imparted by conveyors and currents.
    pub conveyor: FixedVec3,
    /// Next waypoint along this competitor's racing line.
    pub next_waypoint: Option<WaypointId>,
    pub color: u16,
    /// Set by a chasing agent; suppresses ring use for the tick.
    pub ring_locked: bool,
    pub body: Option<RacerBody>,
}

impl Competitor {
    /// In the race and not spectating.
    pub fn is_participating(&self) -> bool {
        self.in_game && !self.spectator
    }

    /// Body that can be chased: present, healthy and not mid-respawn.
    pub fn live_body(&self) -> Option<&RacerBody> {
        if !self.is_participating() || self.respawning {
            return None;
        }
        self.body.as_ref().filter(|b| b.health > 0)
    }
}

/// Scripted driving for a simulated competitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacerScript {
    /// Displacement applied every tick.
    pub velocity: FixedVec3,
    /// Advance `next_waypoint` along the track as waypoints are reached.
    pub follow_track: bool,
}

/// Short-lived cosmetic spawned from controller feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub source: AgentId,
    pub position: FixedVec3,
    pub momentum: FixedVec3,
    pub angle: Angle,
    /// Ticks until removal.
    pub fuse: u32,
    pub tint: Option<u16>,
}
