//! Snapshot system: builds a `GameSnapshot` from the world.
//!
//! Read-only; never modifies the world.

use hecs::World;

use seeker_core::components::{Competitor, Effect, HomingAgent};
use seeker_core::events::FeedbackEvent;
use seeker_core::state::GameSnapshot;

use super::homing::Broadcast;

pub fn build_snapshot(
    world: &World,
    level_time: u64,
    broadcast: &Broadcast,
    events: Vec<FeedbackEvent>,
) -> GameSnapshot {
    let mut agents: Vec<HomingAgent> = world
        .query::<&HomingAgent>()
        .iter()
        .map(|(_, agent)| agent.clone())
        .collect();
    agents.sort_by_key(|a| a.id);

    let mut racers: Vec<Competitor> = world
        .query::<&Competitor>()
        .iter()
        .map(|(_, competitor)| competitor.clone())
        .collect();
    racers.sort_by_key(|c| c.id);

    // Stable sort keeps spawn order within one source.
    let mut effects: Vec<Effect> = world
        .query::<&Effect>()
        .iter()
        .map(|(_, effect)| effect.clone())
        .collect();
    effects.sort_by_key(|e| e.source);

    GameSnapshot {
        level_time,
        chased_rank: broadcast.chased_rank,
        item_cooldown: broadcast.item_cooldown,
        agents,
        racers,
        effects,
        events,
    }
}
