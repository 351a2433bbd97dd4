//! Error types for fallible player-facing operations.
//!
//! Simulation internals never use errors for control flow: probabilistic
//! operations either succeed or wait for the next tick, and out-of-bounds
//! queries return `None`.

use thiserror::Error;

use crate::types::Hex;

/// Why a placement was rejected. The operation is a no-op, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no cell at {0:?}")]
    OutOfBounds(Hex),
    #[error("cannot build on a town cell")]
    TownCell,
    #[error("cell already occupied")]
    Occupied,
    #[error("cell is on fire")]
    Burning,
    #[error("suppression bombs cannot be placed adjacent to each other")]
    AdjacentBomb,
}
