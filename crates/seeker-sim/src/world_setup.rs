//! Entity spawn factories for racers and homing agents.

use hecs::{Entity, World};

use seeker_core::angle::Angle;
use seeker_core::components::{Competitor, HomingAgent, RacerScript};
use seeker_core::fixed::{fixed_mul, int_to_fixed};
use seeker_core::speed::agent_default_speed;
use seeker_core::types::{AgentId, CompetitorId, FixedVec3};

use crate::config::SimConfig;

/// Spawn a competitor driven by a movement script.
pub fn spawn_racer(world: &mut World, competitor: Competitor, script: RacerScript) -> Entity {
    world.spawn((competitor, script))
}

/// Launch a homing agent from `position`, heading `angle`, inside the
/// configured arena.
pub fn launch_agent(
    world: &mut World,
    config: &SimConfig,
    id: AgentId,
    owner: Option<CompetitorId>,
    position: FixedVec3,
    angle: Angle,
) -> Entity {
    let mut agent = HomingAgent::launch(
        id,
        owner,
        position,
        angle,
        agent_default_speed(config.map_scale),
    );
    agent.scale = config.map_scale;
    agent.height = fixed_mul(agent.height, config.map_scale);
    agent.floor_z = int_to_fixed(config.floor_z);
    agent.ceiling_z = int_to_fixed(config.ceiling_z);
    world.spawn((agent,))
}
