//! Serializable view of the whole simulation at the end of a tick.

use serde::{Deserialize, Serialize};

use crate::components::{Competitor, Effect, HomingAgent};
use crate::events::FeedbackEvent;

/// Complete per-tick state. Collections are in id order so that two
/// snapshots serialize identically exactly when the simulations agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub level_time: u64,
    /// Rank currently being hunted, if any.
    pub chased_rank: Option<u8>,
    /// Ticks before indirect items may roll again.
    pub item_cooldown: u32,
    pub agents: Vec<HomingAgent>,
    pub racers: Vec<Competitor>,
    pub effects: Vec<Effect>,
    /// Feedback raised during this tick.
    pub events: Vec<FeedbackEvent>,
}
