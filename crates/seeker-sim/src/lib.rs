//! Simulation harness for SEEKER.
//!
//! Owns the hecs ECS world, runs systems once per tick, and produces
//! `GameSnapshot`s. Headless, so whole races can be replayed in tests.

pub mod config;
pub mod engine;
pub mod feedback;
pub mod logging;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
