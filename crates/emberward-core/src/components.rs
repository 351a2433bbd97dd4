//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Rules live in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::{BombId, DigSiteId, Hex, ItemId, TankId, TowerId, WaterBombId};

/// A defensive tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerKind,
    pub hex: Hex,
    /// Facing direction, 0–5.
    pub direction: u8,
    /// Targeting reach/cadence level, 1–4.
    pub range_level: u8,
    /// Damage level, 1–4. Upgrades independently of `range_level`.
    pub power_level: u8,
    pub health: f64,
    pub max_health: f64,
    pub shield: Option<Shield>,
    /// Seconds accumulated toward the next periodic attack
    /// (Pulsing burst, Bomber launch). Unused by continuous kinds.
    pub attack_timer: f64,
    /// Cached target set. Recomputed whenever position, direction, or
    /// range level changes; always contains the tower's own cell.
    pub affected_hexes: Vec<Hex>,
}

/// Optional damage shield on a tower. Absorbs fire damage before health
/// and is discarded at 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shield {
    pub level: u8,
    pub health: f64,
}

/// A passive water tank. Exploding extinguishes a blast zone and chains
/// into other tanks caught in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTank {
    pub id: TankId,
    pub hex: Hex,
    pub health: f64,
    /// Cleared when the tank detonates; guards against re-entering an
    /// already-exploded tank during chain resolution.
    pub active: bool,
}

/// A placed suppression bomb. Armed on placement, triggers when fire
/// reaches its cell or any neighbor, detonates once after a fixed delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionBomb {
    pub id: BombId,
    pub hex: Hex,
    /// Clear-radius level, 1–3.
    pub level: u8,
    pub triggered: bool,
    /// Seconds until detonation once triggered.
    pub countdown: f64,
    /// Set on detonation; a bomb never detonates twice.
    pub detonated: bool,
}

/// An excavation site that must survive the wave group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigSite {
    pub id: DigSiteId,
    pub hex: Hex,
    pub health: f64,
}

/// A destructible prop. Burns down under fire and breaks under tower
/// water alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub hex: Hex,
    pub health: f64,
}

/// Indestructible fire-immune spread amplifier placed at path terminals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireSpawner {
    pub hex: Hex,
}

/// An airborne bomber projectile. Travel is simulated as incremental
/// progress, never as an async wait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterBomb {
    pub id: WaterBombId,
    /// Tower that fired this bomb.
    pub tower: TowerId,
    pub origin: Hex,
    pub target: Hex,
    /// Interpolation progress along the flight, 0–1.
    pub progress: f64,
    /// Progress per second (flight speed over the lob distance).
    pub progress_rate: f64,
    /// Power level of the firing tower at launch.
    pub power_level: u8,
    /// Set on impact; a bomb detonates exactly once even if updated
    /// again after reaching its terminal condition.
    pub exploded: bool,
}
