//! Chase: sustained pursuit of a locked-on competitor.
//!
//! Speed is matched to what the target can manage given its stats and
//! whether it is grounded, then pushed up the further behind the agent
//! falls, up to one and a half times that base.

use seeker_core::angle::point_to_angle;
use seeker_core::components::{Competitor, HomingAgent, RacerBody};
use seeker_core::constants::{EASE_FRACMAX, TICRATE};
use seeker_core::enums::{CarryMode, PursuitMode, SoundCue};
use seeker_core::events::RankReport;
use seeker_core::fixed::{fixed_div, fixed_mul, point_to_dist, Fixed, FRACBITS, FRACUNIT};

use crate::feedback::FeedbackEmitter;
use crate::fsm::{emit_trail, ThinkContext, ThinkOutcome};
use crate::turn::{damped_turn, pitch_toward, set_velocity};

pub(crate) fn run<F: FeedbackEmitter>(
    agent: &mut HomingAgent,
    ctx: &ThinkContext,
    fx: &mut F,
    out: &mut ThinkOutcome,
) {
    agent.current_waypoint = None;

    let chased = agent
        .chased
        .and_then(|id| ctx.roster.get(id))
        .and_then(|c| c.live_body().map(|body| (c, body)));
    let Some((target, body)) = chased else {
        agent.chased = None;
        agent.mode = PursuitMode::Wait;
        agent.mode_timer = ctx.profile.wait_ticks;
        return;
    };

    if body.hitlag > 0 {
        agent.hitlag = agent.hitlag.max(body.hitlag);
        return;
    }

    if !fx.is_sound_playing(agent, SoundCue::Active) {
        fx.play_sound(agent, SoundCue::Active);
    }

    agent.last_target = Some(target.id);
    out.rank = RankReport::Set(target.rank);
    out.ring_lock = Some(target.id);

    let base = base_speed(target, body);

    // Keep chasing while the target still leads; otherwise give up after the timer.
    match ctx.roster.best_ranked() {
        Some(best) if target.rank > best.rank => {
            agent.mode_timer = agent.mode_timer.saturating_sub(1);
            if agent.mode_timer == 0 {
                agent.mode = PursuitMode::Seek;
            }
        }
        _ => agent.mode_timer = ctx.profile.chase_timer_ticks,
    }

    let desired = desired_speed(agent, ctx, target, body, base);

    if desired > agent.stored_speed {
        agent.stored_speed += (desired - agent.stored_speed) / TICRATE as Fixed;
    } else {
        agent.stored_speed = desired;
    }

    let heading = damped_turn(
        agent.stored_speed,
        point_to_angle(agent.position.x, agent.position.y, body.position.x, body.position.y),
        agent.angle,
        ctx.profile.chase_turn_lerp,
    );
    agent.angle = heading.apply(agent.angle);
    let climb = damped_turn(
        agent.stored_speed,
        pitch_toward(&agent.position, &body.position),
        agent.pitch,
        ctx.profile.chase_turn_lerp,
    );
    agent.pitch = climb.apply(agent.pitch);
    set_velocity(agent, heading.speed, climb.speed);

    agent.momentum.x = agent.momentum.x.wrapping_add(target.conveyor.x);
    agent.momentum.y = agent.momentum.y.wrapping_add(target.conveyor.y);

    emit_trail(agent, ctx, fx);

    let ours = point_to_dist(0, 0, agent.momentum.x, agent.momentum.y) as i64;
    let theirs = point_to_dist(0, 0, body.momentum.x, body.momentum.y) as i64;
    if ours > (16 * theirs) / 15 && heading.speed > ctx.map_scale.saturating_mul(20) {
        fx.speed_lines(agent);
    }
}

/// Speed the target can be expected to hold.
fn base_speed(target: &Competitor, body: &RacerBody) -> Fixed {
    if target.carry == CarryMode::Sliding {
        return target.speed / 2;
    }
    if !body.on_ground {
        // No air control; only a near stop lets the agent connect.
        return ((7 * target.speed as i64) / 8) as Fixed;
    }

    let kart_speed = target.kart_speed as i32;
    let spark = ((10 - kart_speed) + target.kart_weight as i32) / 2;
    let easiness = ((kart_speed + (10 - spark)) << FRACBITS) / 2;
    fixed_mul(((EASE_FRACMAX + 1) << FRACBITS) - easiness, target.top_speed) / EASE_FRACMAX
}

fn desired_speed(
    agent: &HomingAgent,
    ctx: &ThinkContext,
    target: &Competitor,
    body: &RacerBody,
    base: Fixed,
) -> Fixed {
    let range = ctx.profile.comfort_range.saturating_mul(body.scale).max(1);
    let dist = agent.position.approx_range_to(&body.position);
    let urgency = FRACUNIT.saturating_add(fixed_div(dist.saturating_sub(range), range));

    let base = base as i64;
    let mut desired = (base * urgency as i64) >> FRACBITS;
    desired = desired.max(base).min(base * 3 / 2);
    desired = desired.max(ctx.profile.min_chase_speed.saturating_mul(body.scale) as i64);
    if target.carry == CarryMode::Sliding {
        desired = desired.min((target.speed / 2) as i64);
    }
    desired.clamp(i32::MIN as i64, i32::MAX as i64) as Fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeker_core::fixed::int_to_fixed;
    use seeker_core::types::{CompetitorId, FixedVec3};

    fn target(kart_speed: u8, kart_weight: u8) -> (Competitor, RacerBody) {
        let body = RacerBody {
            position: FixedVec3::ZERO,
            momentum: FixedVec3::ZERO,
            scale: FRACUNIT,
            health: 1,
            on_ground: true,
            hitlag: 0,
        };
        let competitor = Competitor {
            id: CompetitorId(0),
            in_game: true,
            spectator: false,
            exiting: false,
            respawning: false,
            rank: 1,
            kart_speed,
            kart_weight,
            speed: int_to_fixed(40),
            top_speed: int_to_fixed(64),
            carry: CarryMode::None,
            conveyor: FixedVec3::ZERO,
            next_waypoint: None,
            color: 0,
            ring_locked: false,
            body: Some(body.clone()),
        };
        (competitor, body)
    }

    #[test]
    fn test_base_speed_grounded_by_stats() {
        let (average, body) = target(5, 5);
        assert_eq!(base_speed(&average, &body), int_to_fixed(56));

        // Quick-accelerating karts face the agent at their full top speed.
        let (nimble, body) = target(9, 1);
        let (heavy, _) = target(1, 9);
        assert_eq!(base_speed(&heavy, &body), int_to_fixed(64));
        assert_eq!(base_speed(&nimble, &body), int_to_fixed(48));
    }

    #[test]
    fn test_base_speed_airborne_and_sliding() {
        let (mut racer, mut body) = target(5, 5);
        body.on_ground = false;
        assert_eq!(base_speed(&racer, &body), int_to_fixed(35));

        racer.carry = CarryMode::Sliding;
        assert_eq!(base_speed(&racer, &body), int_to_fixed(20));
    }
}
