//! Enumeration types used throughout the controller.

use serde::{Deserialize, Serialize};

/// Pursuit controller mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PursuitMode {
    /// No confirmed target; navigating the waypoint graph toward the leader.
    #[default]
    Seek,
    /// Locked on, sustained pursuit of one competitor.
    Chase,
    /// Stood down after losing a target.
    Wait,
}

/// Side a tide-slip spark is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnSide {
    /// Counterclockwise turn.
    Left,
    /// Clockwise turn.
    Right,
}

/// Sound cues the controller triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Played once when a target is acquired.
    Attack,
    /// Looping menace while chasing.
    Active,
}

/// Movement carried by the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarryMode {
    #[default]
    None,
    /// Sliding along a current or conveyor section.
    Sliding,
}

/// Kind of short-lived effect entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    TrailRing,
    Dust,
    SlipSpark,
    SpeedLine,
    Ghost,
}
