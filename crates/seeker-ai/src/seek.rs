//! Seek: patrol the waypoint graph toward the race leader until close
//! enough to lock on.

use log::debug;

use seeker_core::angle::{angle_delta, point_to_angle, Angle};
use seeker_core::components::{Competitor, HomingAgent, RacerBody};
use seeker_core::constants::STEER_DELTA;
use seeker_core::enums::{PursuitMode, SoundCue};
use seeker_core::events::RankReport;
use seeker_core::fixed::point_to_dist;
use seeker_core::types::{CompetitorId, FixedVec3};
use seeker_waypoints::next_waypoint_toward;

use crate::feedback::FeedbackEmitter;
use crate::fsm::{emit_ground_effect, emit_trail, ThinkContext, ThinkOutcome};
use crate::turn::{damped_turn, pitch_toward, set_velocity, thrust};

pub(crate) fn run<F: FeedbackEmitter>(
    agent: &mut HomingAgent,
    ctx: &ThinkContext,
    fx: &mut F,
    out: &mut ThinkOutcome,
) {
    let speed = ctx.default_speed();
    agent.last_target = None;

    let leader = ctx
        .roster
        .best_ranked()
        .and_then(|c| c.live_body().map(|body| (c, body)));
    let Some((leader, body)) = leader else {
        agent.momentum = FixedVec3::ZERO;
        agent.chased = None;
        out.rank = RankReport::Cleared;
        return;
    };

    agent.chased = Some(leader.id);
    out.rank = RankReport::Set(leader.rank);

    let range = agent.position.approx_range_to(&body.position);
    if range <= ctx.profile.acquire_range.saturating_mul(body.scale) {
        fx.play_sound(agent, SoundCue::Attack);
        agent.mode = PursuitMode::Chase;
        agent.mode_timer = ctx.profile.chase_timer_ticks;
        agent.stored_speed = speed;
        return;
    }

    let dest = steer_point(agent, ctx, leader, body);

    let heading = damped_turn(
        speed,
        point_to_angle(agent.position.x, agent.position.y, dest.x, dest.y),
        agent.angle,
        ctx.profile.seek_turn_lerp,
    );
    agent.angle = heading.apply(agent.angle);
    let climb = damped_turn(
        speed,
        pitch_toward(&agent.position, &dest),
        agent.pitch,
        ctx.profile.seek_turn_lerp,
    );
    agent.pitch = climb.apply(agent.pitch);
    set_velocity(agent, heading.speed, climb.speed);

    if let Some((rival, toward)) = ram_candidate(agent, ctx) {
        if agent.chased != Some(rival) {
            thrust(&mut agent.momentum, toward, agent.stored_speed / 4);
        }
    }

    emit_ground_effect(agent, ctx, fx, heading.sharp);
    fx.speed_lines(agent);
    emit_trail(agent, ctx, fx);
}

/// Point the agent should head for this tick. Advances the current
/// waypoint once the agent has arrived at it.
fn steer_point(
    agent: &mut HomingAgent,
    ctx: &ThinkContext,
    leader: &Competitor,
    body: &RacerBody,
) -> FixedVec3 {
    let graph = ctx.graph;

    let current = match agent.current_waypoint.and_then(|id| graph.get(id)) {
        Some(wp) => wp,
        None => match graph.nearest(&agent.position).and_then(|id| graph.get(id)) {
            Some(wp) => {
                debug!("agent {} starts at waypoint {}", agent.id.0, wp.id.0);
                agent.current_waypoint = Some(wp.id);
                wp
            }
            None => {
                debug!("agent {} has no initial waypoint", agent.id.0);
                agent.current_waypoint = None;
                return body.position;
            }
        },
    };

    let map_scale = ctx.map_scale.max(1);
    let dist = point_to_dist(agent.position.x, agent.position.y, current.position.x, current.position.y)
        / map_scale;
    let radius = (current.radius / map_scale).max(ctx.profile.waypoint_radius_floor);
    if dist > radius {
        return current.position;
    }

    let Some(destination) = leader.next_waypoint.filter(|id| graph.get(*id).is_some()) else {
        debug!("agent {}: leader has no next waypoint", agent.id.0);
        agent.current_waypoint = None;
        return body.position;
    };

    let (next, step) =
        next_waypoint_toward(graph, current.id, destination, graph.is_shortcut(destination));
    debug!("agent {} moves to waypoint {} ({:?})", agent.id.0, next.0, step);
    match graph.get(next) {
        Some(wp) => {
            agent.current_waypoint = Some(wp.id);
            wp.position
        }
        None => {
            agent.current_waypoint = None;
            body.position
        }
    }
}

/// Closest live competitor roughly ahead of the agent, with the heading
/// toward it. Ties keep the lower player slot.
fn ram_candidate(agent: &HomingAgent, ctx: &ThinkContext) -> Option<(CompetitorId, Angle)> {
    let mut best_dist = ctx.profile.steer_radius.saturating_mul(ctx.map_scale);
    let mut best = None;

    for competitor in ctx.roster.iter() {
        let Some(body) = competitor.live_body() else {
            continue;
        };
        let toward = point_to_angle(agent.position.x, agent.position.y, body.position.x, body.position.y);
        if angle_delta(agent.angle, toward) > STEER_DELTA {
            continue;
        }
        let dist = point_to_dist(agent.position.x, agent.position.y, body.position.x, body.position.y);
        if dist < best_dist {
            best_dist = dist;
            best = Some((competitor.id, toward));
        }
    }
    best
}
