//! Momentum integration.
//!
//! Agents and effects move by their momentum once per tick. Agents stay
//! inside the arena; hit-stunned agents hold still.

use hecs::World;

use seeker_core::components::{Effect, HomingAgent};

pub fn run(world: &mut World) {
    for (_entity, agent) in world.query_mut::<&mut HomingAgent>() {
        if agent.health <= 0 || agent.hitlag > 0 {
            continue;
        }
        agent.position = agent.position.wrapping_add(&agent.momentum);

        let top = agent.ceiling_z.saturating_sub(agent.height);
        agent.position.z = agent.position.z.min(top).max(agent.floor_z);
    }

    for (_entity, effect) in world.query_mut::<&mut Effect>() {
        effect.position = effect.position.wrapping_add(&effect.momentum);
    }
}
