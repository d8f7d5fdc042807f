//! Homing agent finite state machine.
//!
//! One call to [`think`] advances a single agent by one tick. The function
//! mutates only the agent it is given; everything it wants to say to the
//! rest of the world comes back in a [`ThinkOutcome`] or goes through the
//! feedback emitter. No ECS dependency; operates on plain data.

use log::trace;

use seeker_core::components::HomingAgent;
use seeker_core::constants::{
    DUST_FLOOR_GAP, TRAIL_INTERVAL_OTHER, TRAIL_INTERVAL_SEEK,
};
use seeker_core::enums::{PursuitMode, TurnSide};
use seeker_core::events::RankReport;
use seeker_core::fixed::{int_to_fixed, Fixed};
use seeker_core::speed::agent_default_speed;
use seeker_core::types::{CompetitorId, FixedVec3};
use seeker_waypoints::WaypointGraph;

use crate::feedback::FeedbackEmitter;
use crate::profile::PursuitProfile;
use crate::ranking::Roster;
use crate::turn::insta_thrust;
use crate::{chase, seek};

/// Read-only world state an agent consults while thinking.
#[derive(Debug, Clone, Copy)]
pub struct ThinkContext<'a> {
    pub roster: Roster<'a>,
    pub graph: &'a WaypointGraph,
    pub profile: &'a PursuitProfile,
    /// Ticks since the level started.
    pub level_time: u64,
    pub map_scale: Fixed,
}

impl ThinkContext<'_> {
    /// Cruising speed for agents on this map.
    pub fn default_speed(&self) -> Fixed {
        agent_default_speed(self.map_scale)
    }
}

/// Everything a think wants applied outside the agent itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinkOutcome {
    /// Update to the "rank being chased" broadcast.
    pub rank: RankReport,
    /// Competitor whose ring use is suppressed this tick.
    pub ring_lock: Option<CompetitorId>,
    /// Indirect item cooldown to raise to, in ticks.
    pub item_cooldown: Option<u32>,
    /// Mode change this tick, as (from, to).
    pub transition: Option<(PursuitMode, PursuitMode)>,
}

/// Advance one agent by one tick.
pub fn think<F: FeedbackEmitter>(
    agent: &mut HomingAgent,
    ctx: &ThinkContext,
    fx: &mut F,
) -> ThinkOutcome {
    let mut out = ThinkOutcome::default();

    if agent.health <= 0 {
        return out;
    }

    out.item_cooldown = Some(ctx.profile.item_cooldown_ticks);

    let tint = agent
        .owner
        .and_then(|owner| ctx.roster.get(owner))
        .filter(|c| c.body.is_some())
        .map(|c| c.color);
    fx.ghost(agent, tint);

    if agent.no_think_ticks > 0 {
        agent.last_target = None;
        agent.current_waypoint = None;
        out.rank = RankReport::Cleared;
        insta_thrust(&mut agent.momentum, agent.angle, ctx.default_speed());
        agent.no_think_ticks -= 1;
    } else {
        let before = agent.mode;
        match agent.mode {
            PursuitMode::Seek => seek::run(agent, ctx, fx, &mut out),
            PursuitMode::Chase => chase::run(agent, ctx, fx, &mut out),
            PursuitMode::Wait => run_wait(agent, ctx, &mut out),
        }
        if agent.mode != before {
            trace!(
                "agent {} {:?} -> {:?} (timer {})",
                agent.id.0,
                before,
                agent.mode,
                agent.mode_timer
            );
            out.transition = Some((before, agent.mode));
        }
    }

    clamp_to_bounds(agent);
    out
}

fn run_wait(agent: &mut HomingAgent, ctx: &ThinkContext, out: &mut ThinkOutcome) {
    agent.momentum = FixedVec3::ZERO;
    agent.current_waypoint = None;

    let remembered = agent
        .last_target
        .and_then(|id| ctx.roster.get(id))
        .filter(|c| c.is_participating());

    if let Some(target) = remembered.filter(|c| !c.exiting) {
        out.rank = RankReport::Set(target.rank);
        out.ring_lock = Some(target.id);
    }

    agent.mode_timer = agent.mode_timer.saturating_sub(1);
    if agent.mode_timer > 0 {
        return;
    }

    match remembered.filter(|c| c.live_body().is_some()) {
        Some(target) => {
            agent.chased = Some(target.id);
            agent.mode = PursuitMode::Chase;
            agent.mode_timer = ctx.profile.chase_timer_ticks;
            agent.stored_speed = ctx.default_speed();
        }
        None => {
            agent.mode = PursuitMode::Seek;
            agent.mode_timer = 0;
            out.rank = RankReport::Cleared;
        }
    }
}

/// Keep the agent between the floor and the ceiling.
fn clamp_to_bounds(agent: &mut HomingAgent) {
    let top = agent.ceiling_z.saturating_sub(agent.height);
    if agent.position.z < agent.floor_z {
        agent.position.z = agent.floor_z;
    } else if agent.position.z > top {
        agent.position.z = top;
    }
}

/// Drop a ring behind the agent on its trail cadence.
pub(crate) fn emit_trail<F: FeedbackEmitter>(agent: &HomingAgent, ctx: &ThinkContext, fx: &mut F) {
    let interval = if agent.mode == PursuitMode::Seek {
        TRAIL_INTERVAL_SEEK
    } else {
        TRAIL_INTERVAL_OTHER
    };
    if ctx.level_time % interval == 0 {
        fx.trail_ring(agent);
    }
}

/// Ground cosmetics for a turn: a slip spark on sharp turns, a dust cone
/// otherwise. Only on odd ticks and only close to the floor.
pub(crate) fn emit_ground_effect<F: FeedbackEmitter>(
    agent: &HomingAgent,
    ctx: &ThinkContext,
    fx: &mut F,
    sharp: Option<TurnSide>,
) {
    let gap = (agent.position.z as i64 - agent.floor_z as i64).abs();
    if ctx.level_time & 1 == 0 || gap >= int_to_fixed(DUST_FLOOR_GAP) as i64 {
        return;
    }
    match sharp {
        Some(side) => fx.slip_spark(agent, side),
        None => fx.dust_cone(agent),
    }
}
