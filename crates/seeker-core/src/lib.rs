//! Core types and definitions for the SEEKER homing controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! fixed-point math, binary angles, agent and competitor data, feedback
//! events, and constants. It has no dependency on any runtime framework.

pub mod angle;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod fixed;
pub mod speed;
pub mod state;
pub mod types;
