//! Turn/speed damping model and velocity helpers.
//!
//! The agent never snaps to a new heading: each tick it turns a fraction of
//! the way, and it sheds speed in proportion to how sharp the remaining turn
//! is, so a full reversal brings it to a halt.

use seeker_core::angle::{
    angle_to_degrees_fixed, fine_cosine, fine_sine, signed_delta, vector_angle, Angle,
};
use seeker_core::components::HomingAgent;
use seeker_core::constants::SLIPTIDE_DELTA;
use seeker_core::enums::TurnSide;
use seeker_core::fixed::{approx_distance, fixed_div, fixed_mul, int_to_fixed, Fixed};
use seeker_core::types::FixedVec3;

/// Result of one damped turn step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// Desired speed after damping.
    pub speed: Fixed,
    /// Signed angle to add to the current heading this tick.
    pub angle_delta: i32,
    /// Set when the step is sharp enough to draw a tide-slip.
    pub sharp: Option<TurnSide>,
}

impl TurnResult {
    pub fn is_sharp(&self) -> bool {
        self.sharp.is_some()
    }

    /// Heading after applying this step.
    pub fn apply(&self, current: Angle) -> Angle {
        current.wrapping_add(self.angle_delta as u32)
    }
}

/// Damp speed by turn sharpness and interpolate toward the desired angle.
///
/// `speed = desired_speed * (1 - |delta| / 180deg)` and the heading moves by
/// `delta * lerp`, where `delta` is the signed shortest difference.
pub fn damped_turn(
    desired_speed: Fixed,
    desired_angle: Angle,
    current_angle: Angle,
    lerp: Fixed,
) -> TurnResult {
    let delta = signed_delta(desired_angle, current_angle);
    let half_turn = int_to_fixed(180);
    let dampen = fixed_div(
        half_turn - angle_to_degrees_fixed(delta.unsigned_abs()),
        half_turn,
    );
    let speed = fixed_mul(desired_speed, dampen);

    let step = fixed_mul(delta, lerp);
    let sharp = if step.unsigned_abs() > SLIPTIDE_DELTA {
        Some(if step < 0 {
            TurnSide::Right
        } else {
            TurnSide::Left
        })
    } else {
        None
    };

    TurnResult {
        speed,
        angle_delta: step,
        sharp,
    }
}

/// Pitch needed to climb or dive from `from` to `to`.
pub fn pitch_toward(from: &FixedVec3, to: &FixedVec3) -> Angle {
    let run = approx_distance(from.x.saturating_sub(to.x), from.y.saturating_sub(to.y));
    vector_angle(run as i64, to.z as i64 - from.z as i64)
}

/// Decompose planar and vertical speed into momentum along the agent's
/// current heading and pitch.
pub fn set_velocity(agent: &mut HomingAgent, xy_speed: Fixed, z_speed: Fixed) {
    let pitch_cos = fine_cosine(agent.pitch);
    agent.momentum.x = fixed_mul(fixed_mul(xy_speed, fine_cosine(agent.angle)), pitch_cos);
    agent.momentum.y = fixed_mul(fixed_mul(xy_speed, fine_sine(agent.angle)), pitch_cos);
    agent.momentum.z = fixed_mul(z_speed, fine_sine(agent.pitch));
}

/// Add planar thrust along `angle`.
pub fn thrust(momentum: &mut FixedVec3, angle: Angle, amount: Fixed) {
    momentum.x = momentum.x.wrapping_add(fixed_mul(amount, fine_cosine(angle)));
    momentum.y = momentum.y.wrapping_add(fixed_mul(amount, fine_sine(angle)));
}

/// Replace planar momentum with `speed` along `angle`.
pub fn insta_thrust(momentum: &mut FixedVec3, angle: Angle, speed: Fixed) {
    momentum.x = fixed_mul(speed, fine_cosine(angle));
    momentum.y = fixed_mul(speed, fine_sine(angle));
}
