//! Cleanup system: removes destroyed agents and burnt-out effects.

use hecs::{Entity, World};
use log::debug;

use seeker_core::components::{Effect, HomingAgent};

use crate::feedback::FeedbackBuffer;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, feedback: &mut FeedbackBuffer) {
    despawn_buffer.clear();

    for (entity, agent) in world.query_mut::<&HomingAgent>() {
        if agent.health <= 0 {
            debug!("agent {} destroyed", agent.id.0);
            feedback.forget(agent.id);
            despawn_buffer.push(entity);
        }
    }

    for (entity, effect) in world.query_mut::<&Effect>() {
        if effect.fuse == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
