//! The Emberward simulation engine.
//!
//! Headless and deterministic: the engine owns a hecs world, the shared
//! hex grid, and a seeded RNG, and advances them one tick at a time,
//! producing serializable snapshots for the external game loop.

pub mod curves;
pub mod engine;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
