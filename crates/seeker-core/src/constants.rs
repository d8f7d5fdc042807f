//! Simulation constants and controller tuning parameters.
//!
//! Distances are whole map units unless the name says otherwise; they are
//! scaled by the relevant object scale at the point of use.

use crate::angle::{Angle, ANG1, ANG10, ANGLE_90};
use crate::fixed::{Fixed, FRACUNIT};

/// Simulation tick rate (Hz).
pub const TICRATE: u32 = 35;

/// Maximum number of player slots.
pub const MAX_PLAYERS: usize = 16;

// --- Launch ---

/// Ticks after launch before the controller starts thinking.
pub const LAUNCH_NO_THINK_TICKS: u32 = 10;

/// Kart speed stat the default agent speed is derived from.
pub const DEFAULT_SPEED_STAT: u8 = 5;

/// Agent hitbox height in map units.
pub const AGENT_HEIGHT: i32 = 56;

// --- Seek ---

/// Range at which Seek locks on and switches to Chase.
pub const ACQUIRE_RANGE: i32 = 1024;

/// Turn interpolation per tick while seeking (1/8 of the remaining turn).
pub const SEEK_TURN_LERP: Fixed = FRACUNIT / 8;

/// Initial search radius for the ramming nudge.
pub const STEER_RADIUS: i32 = 1536;

/// Widest bearing off the nose that still counts as "ahead" for ramming.
pub const STEER_DELTA: Angle = ANGLE_90 - ANG10;

/// Turn step above which a seek turn is drawn as a tide-slip.
pub const SLIPTIDE_DELTA: Angle = ANG1 * 3;

/// Waypoint arrival radius floor, in map units.
pub const DEFAULT_WAYPOINT_RADIUS: i32 = 384;

// --- Chase ---

/// Ticks a chase persists without the target holding the best rank.
pub const CHASE_TIMER_TICKS: u32 = 7 * TICRATE;

/// Turn interpolation per tick while chasing (full turn).
pub const CHASE_TURN_LERP: Fixed = FRACUNIT;

/// Separation the chase speed law treats as neutral.
pub const COMFORT_RANGE: i32 = 160;

/// Absolute chase speed floor in map units per tick.
pub const MIN_CHASE_SPEED: i32 = 20;

/// Granularity of the stat-based catch-up multiplier.
pub const EASE_FRACMAX: i32 = 32;

// --- Wait ---

/// Stand-down after losing a target; slightly longer than a respawn.
pub const WAIT_TICKS: u32 = 55;

// --- Cosmetics ---

/// Trail ring spacing while seeking, in ticks.
pub const TRAIL_INTERVAL_SEEK: u64 = 3;

/// Trail ring spacing in every other mode, in ticks.
pub const TRAIL_INTERVAL_OTHER: u64 = 6;

/// Trail ring lifetime in ticks.
pub const TRAIL_RING_FUSE: u32 = 35 * TICRATE;

/// Height above the agent trail rings spawn at, in map units.
pub const TRAIL_RING_Z_OFFSET: i32 = 24;

/// Dust only kicks up when the agent is this close to the floor.
pub const DUST_FLOOR_GAP: i32 = 64;

/// After-image lifetime in ticks.
pub const GHOST_FUSE: u32 = 3;

/// Speed-line effect lifetime in ticks.
pub const SPEED_LINE_FUSE: u32 = 8;

/// Dust and spark lifetime in ticks.
pub const DUST_FUSE: u32 = 12;

/// Indirect item roulette cooldown raised while an agent is alive.
pub const ITEM_COOLDOWN_TICKS: u32 = 20 * TICRATE;

/// Duration of the looping chase cue.
pub const ACTIVE_SOUND_TICKS: u32 = TICRATE;

// --- Navigation ---

/// Hard cap on node expansions for a single pathfinding query.
pub const MAX_PATHFIND_EXPANSIONS: usize = 4096;
