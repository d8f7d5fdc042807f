//! Outputs the controller emits for feedback and ranking consumers.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::enums::{SoundCue, TurnSide};
use crate::fixed::Fixed;
use crate::types::{AgentId, FixedVec3};

/// Cosmetic feedback requested by an agent this tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// Ring left behind the agent.
    TrailRing {
        agent: AgentId,
        position: FixedVec3,
        momentum: FixedVec3,
    },
    /// V-shaped dust cone kicked up while running straight.
    DustCone {
        agent: AgentId,
        position: FixedVec3,
        angle: Angle,
        floor_z: Fixed,
        momentum: FixedVec3,
    },
    /// Tide-slip spark on the outside of a sharp turn.
    SlipSpark {
        agent: AgentId,
        position: FixedVec3,
        side: TurnSide,
        floor_z: Fixed,
        momentum: FixedVec3,
    },
    /// Speed lines streaming off the agent.
    SpeedLines {
        agent: AgentId,
        position: FixedVec3,
        momentum: FixedVec3,
    },
    /// After-image, tinted with the owner's colour when the owner is present.
    Ghost {
        agent: AgentId,
        position: FixedVec3,
        tint: Option<u16>,
    },
    Sound { agent: AgentId, cue: SoundCue },
}

/// Change to the "rank being chased" broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankReport {
    /// Leave the broadcast as it was.
    #[default]
    Unchanged,
    /// Announce the rank currently being hunted.
    Set(u8),
    /// Nobody is being hunted.
    Cleared,
}

impl RankReport {
    /// Fold this report into a persistent broadcast value.
    pub fn apply(self, broadcast: &mut Option<u8>) {
        match self {
            RankReport::Unchanged => {}
            RankReport::Set(rank) => *broadcast = Some(rank),
            RankReport::Cleared => *broadcast = None,
        }
    }
}
