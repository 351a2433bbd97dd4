//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid commands are silent no-ops; callers that need the
//! failure reason use the engine's direct placement API instead.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::{Hex, TowerId};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Placement ---
    /// Place a tower of the given kind, facing `direction`.
    PlaceTower {
        kind: TowerKind,
        hex: Hex,
        direction: u8,
    },
    /// Place a passive water tank.
    PlaceWaterTank { hex: Hex },
    /// Place an armed suppression bomb of the given level (1–3).
    PlaceSuppressionBomb { hex: Hex, level: u8 },

    // --- Tower management ---
    /// Rotate a tower to a new facing direction (0–5).
    RotateTower { tower: TowerId, direction: u8 },
    /// Upgrade targeting reach/cadence by one level (max 4).
    UpgradeTowerRange { tower: TowerId },
    /// Upgrade damage by one level (max 4).
    UpgradeTowerPower { tower: TowerId },
    /// Attach a fresh shield of the given level (1–3).
    AddShield { tower: TowerId, level: u8 },
    /// Remove a tower back to the external inventory (no event).
    StoreTower { tower: TowerId },

    // --- Boss / external triggers ---
    /// Stoke the fire on a cell: +1 tier (capped at the wave's maximum),
    /// health refilled.
    StokeFire { hex: Hex },
    /// Set the external spread-buff multiplier applied to every spread roll.
    SetSpreadBuff { multiplier: f64 },

    // --- Wave control ---
    /// End the placement phase early and start the wave.
    SkipPlacement,

    // --- Simulation control ---
    /// Start a new session at wave 1, group 1.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
}
