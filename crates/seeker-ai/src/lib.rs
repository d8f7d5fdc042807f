//! Pursuit AI for SEEKER.
//!
//! Implements the homing agent's Seek/Chase/Wait state machine, the
//! turn/speed damping model, the best-ranked competitor query, and the
//! feedback emitter seam. Operates on plain data; no ECS dependency.

pub mod chase;
pub mod feedback;
pub mod fsm;
pub mod profile;
pub mod ranking;
pub mod seek;
pub mod turn;

pub use feedback::FeedbackEmitter;
pub use fsm::{think, ThinkContext, ThinkOutcome};
pub use profile::PursuitProfile;
pub use ranking::Roster;
