//! Game state snapshot — the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::*;

/// Complete game state built after each tick. Read-only: the external
/// layer renders from it and drains `events`; nothing here mutates the
/// simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub cells: Vec<CellView>,
    pub paths: Vec<PathView>,
    pub towers: Vec<TowerView>,
    pub water_bombs: Vec<WaterBombView>,
    pub tanks: Vec<TankView>,
    pub suppression_bombs: Vec<SuppressionBombView>,
    pub dig_sites: Vec<DigSiteView>,
    pub items: Vec<ItemView>,
    pub events: Vec<SimEvent>,
}

/// Wave machine status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Absolute wave number (1-based).
    pub number: u32,
    pub group: u32,
    pub wave_in_group: u32,
    pub wave_phase: WavePhase,
    pub time_remaining: f64,
    /// External spread-buff multiplier currently in effect.
    pub spread_buff: f64,
}

/// One grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellView {
    pub hex: Hex,
    pub is_town: bool,
    pub is_path: bool,
    /// Color tag of the path this cell belongs to, if any.
    pub path_index: Option<usize>,
    pub occupant: Occupant,
    pub fire: Option<FireView>,
    pub is_being_sprayed: bool,
}

/// Fire state on a burning cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireView {
    pub fire_type: FireType,
    /// Remaining suppression effort.
    pub progress: f64,
    /// Full health for the current tier.
    pub max_progress: f64,
}

/// A generated path for display (cells ordered ring-outward).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathView {
    pub color_index: usize,
    pub cells: Vec<Hex>,
}

/// A tower for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub hex: Hex,
    pub direction: u8,
    pub range_level: u8,
    pub power_level: u8,
    pub health: f64,
    pub max_health: f64,
    pub shield: Option<ShieldView>,
    pub affected_hexes: Vec<Hex>,
}

/// Shield status on a tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShieldView {
    pub level: u8,
    pub health: f64,
}

/// An airborne water bomb for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterBombView {
    pub id: WaterBombId,
    pub tower: TowerId,
    pub origin: Hex,
    pub target: Hex,
    pub progress: f64,
    /// Interpolated world-space position for rendering.
    pub world_pos: Vec2,
}

/// A water tank for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub id: TankId,
    pub hex: Hex,
    pub health: f64,
}

/// A suppression bomb for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionBombView {
    pub id: BombId,
    pub hex: Hex,
    pub level: u8,
    pub triggered: bool,
    /// Seconds until detonation; meaningful once triggered.
    pub countdown: f64,
}

/// A dig site for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigSiteView {
    pub id: DigSiteId,
    pub hex: Hex,
    pub health: f64,
}

/// An item for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub hex: Hex,
    pub health: f64,
}
