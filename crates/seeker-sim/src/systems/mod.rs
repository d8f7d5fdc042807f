//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything persistent lives in components or in
//! the engine.

pub mod cleanup;
pub mod effects;
pub mod homing;
pub mod movement;
pub mod racers;
pub mod snapshot;
