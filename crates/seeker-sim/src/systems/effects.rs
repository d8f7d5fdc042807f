//! Effects system: turns controller feedback into short-lived effect
//! entities and ages the ones already in the world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seeker_ai::turn::thrust;
use seeker_core::angle::{degrees, fine_cosine, fine_sine, vector_angle, ANGLE_45, ANGLE_90};
use seeker_core::components::Effect;
use seeker_core::constants::{
    AGENT_HEIGHT, DUST_FUSE, GHOST_FUSE, SPEED_LINE_FUSE, TRAIL_RING_FUSE, TRAIL_RING_Z_OFFSET,
};
use seeker_core::enums::{EffectKind, TurnSide};
use seeker_core::events::FeedbackEvent;
use seeker_core::fixed::{fixed_mul, int_to_fixed};
use seeker_core::types::{AgentId, FixedVec3};

/// Age existing effects, then spawn effects for this tick's feedback.
pub fn run(world: &mut World, events: &[FeedbackEvent], rng: &mut ChaCha8Rng) {
    for (_entity, effect) in world.query_mut::<&mut Effect>() {
        effect.fuse = effect.fuse.saturating_sub(1);
    }

    let mut spawned = Vec::new();
    for event in events {
        spawn_for(event, rng, &mut spawned);
    }
    for effect in spawned {
        world.spawn((effect,));
    }
}

fn spawn_for(event: &FeedbackEvent, rng: &mut ChaCha8Rng, out: &mut Vec<Effect>) {
    match *event {
        FeedbackEvent::TrailRing {
            agent,
            position,
            momentum,
        } => out.push(Effect {
            kind: EffectKind::TrailRing,
            source: agent,
            position: FixedVec3::new(
                position.x.wrapping_sub(momentum.x),
                position.y.wrapping_sub(momentum.y),
                position
                    .z
                    .wrapping_sub(momentum.z)
                    .wrapping_add(int_to_fixed(TRAIL_RING_Z_OFFSET)),
            ),
            momentum: FixedVec3::ZERO,
            angle: 0,
            fuse: TRAIL_RING_FUSE,
            tint: None,
        }),

        // V-shaped pair either side of the heading, drifting outward.
        FeedbackEvent::DustCone {
            agent,
            position,
            angle,
            floor_z,
            momentum,
        } => {
            let mut spawn_angle = angle.wrapping_sub(degrees(60));
            for side in 0..2u32 {
                let offset = int_to_fixed(96);
                let drift = angle
                    .wrapping_sub(ANGLE_90)
                    .wrapping_add(side.wrapping_mul(degrees(180)));
                let mut dust = Effect {
                    kind: EffectKind::Dust,
                    source: agent,
                    position: FixedVec3::new(
                        position.x.wrapping_add(fixed_mul(offset, fine_cosine(spawn_angle))),
                        position.y.wrapping_add(fixed_mul(offset, fine_sine(spawn_angle))),
                        floor_z,
                    ),
                    momentum: FixedVec3::new(momentum.x / 2, momentum.y / 2, momentum.z / 2),
                    angle: drift,
                    fuse: DUST_FUSE,
                    tint: None,
                };
                thrust(&mut dust.momentum, drift, int_to_fixed(6));
                out.push(dust);
                spawn_angle = spawn_angle.wrapping_add(degrees(120));
            }
        }

        FeedbackEvent::SlipSpark {
            agent,
            position,
            side,
            floor_z,
            momentum,
        } => {
            let travel = vector_angle(momentum.x as i64, momentum.y as i64);
            let (offset_angle, facing) = match side {
                TurnSide::Left => (travel.wrapping_sub(ANGLE_45), travel.wrapping_add(ANGLE_90)),
                TurnSide::Right => (travel.wrapping_add(ANGLE_45), travel.wrapping_sub(ANGLE_90)),
            };
            let reach = int_to_fixed(24);
            out.push(Effect {
                kind: EffectKind::SlipSpark,
                source: agent,
                position: FixedVec3::new(
                    position.x.wrapping_add(fixed_mul(reach, fine_cosine(offset_angle))),
                    position.y.wrapping_add(fixed_mul(reach, fine_sine(offset_angle))),
                    floor_z,
                ),
                momentum: FixedVec3::new(
                    ((6 * momentum.x as i64) / 5) as i32,
                    ((6 * momentum.y as i64) / 5) as i32,
                    0,
                ),
                angle: facing,
                fuse: DUST_FUSE,
                tint: None,
            });
        }

        FeedbackEvent::SpeedLines {
            agent,
            position,
            momentum,
        } => {
            let mut jitter = || int_to_fixed(rng.gen_range(-24..=24));
            let offset = FixedVec3::new(
                jitter(),
                jitter(),
                int_to_fixed(AGENT_HEIGHT / 2).wrapping_add(jitter()),
            );
            out.push(Effect {
                kind: EffectKind::SpeedLine,
                source: agent,
                position: position.wrapping_add(&offset),
                momentum: FixedVec3::ZERO,
                angle: vector_angle(momentum.x as i64, momentum.y as i64),
                fuse: SPEED_LINE_FUSE,
                tint: None,
            });
        }

        FeedbackEvent::Ghost {
            agent,
            position,
            tint,
        } => out.push(ghost(agent, position, tint)),

        FeedbackEvent::Sound { .. } => {}
    }
}

fn ghost(source: AgentId, position: FixedVec3, tint: Option<u16>) -> Effect {
    Effect {
        kind: EffectKind::Ghost,
        source,
        position,
        momentum: FixedVec3::ZERO,
        angle: 0,
        fuse: GHOST_FUSE,
        tint,
    }
}
