//! Homing system: runs the pursuit controller for every agent.
//!
//! Agents think in ascending id order against a roster snapshot taken in
//! player-slot order, so every run over the same inputs makes the same
//! choices.

use hecs::{Entity, World};
use log::debug;

use seeker_ai::{think, Roster, ThinkContext};
use seeker_core::components::{Competitor, HomingAgent};
use seeker_core::types::{AgentId, CompetitorId};
use seeker_waypoints::WaypointGraph;

use crate::config::SimConfig;
use crate::feedback::FeedbackBuffer;

/// Values every agent may publish to the rest of the race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Broadcast {
    /// Rank currently being hunted.
    pub chased_rank: Option<u8>,
    /// Ticks before indirect items may roll again.
    pub item_cooldown: u32,
}

pub fn run(
    world: &mut World,
    graph: &WaypointGraph,
    config: &SimConfig,
    level_time: u64,
    feedback: &mut FeedbackBuffer,
    broadcast: &mut Broadcast,
) {
    let mut roster: Vec<Competitor> = world
        .query::<&Competitor>()
        .iter()
        .map(|(_, competitor)| competitor.clone())
        .collect();
    roster.sort_by_key(|c| c.id);

    let ctx = ThinkContext {
        roster: Roster::new(&roster),
        graph,
        profile: &config.profile,
        level_time,
        map_scale: config.map_scale,
    };

    let mut order: Vec<(AgentId, Entity)> = world
        .query::<&HomingAgent>()
        .iter()
        .map(|(entity, agent)| (agent.id, entity))
        .collect();
    order.sort_by_key(|(id, _)| *id);

    let mut ring_locks: Vec<CompetitorId> = Vec::new();

    for (_, entity) in order {
        let Ok(mut agent) = world.get::<&mut HomingAgent>(entity) else {
            continue;
        };

        // Hit-stunned agents are frozen in place.
        if agent.hitlag > 0 {
            agent.hitlag -= 1;
            continue;
        }

        let outcome = think(&mut agent, &ctx, feedback);

        outcome.rank.apply(&mut broadcast.chased_rank);
        if let Some(cooldown) = outcome.item_cooldown {
            broadcast.item_cooldown = broadcast.item_cooldown.max(cooldown);
        }
        if let Some(target) = outcome.ring_lock {
            ring_locks.push(target);
        }
        if let Some((from, to)) = outcome.transition {
            debug!(
                "tick {}: agent {} {:?} -> {:?}",
                level_time, agent.id.0, from, to
            );
        }
    }

    if ring_locks.is_empty() {
        return;
    }
    for (_entity, competitor) in world.query_mut::<&mut Competitor>() {
        if ring_locks.contains(&competitor.id) {
            competitor.ring_locked = true;
        }
    }
}
