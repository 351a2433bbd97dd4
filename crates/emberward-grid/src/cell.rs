//! Per-cell state.

use serde::{Deserialize, Serialize};

use emberward_core::enums::{FireType, Occupant};
use emberward_core::profiles::fire_profile;
use emberward_core::types::Hex;

/// Fire burning on a cell.
///
/// Invariants: `0 < progress <= max_progress`; a cell is burning exactly
/// when it carries a `Fire`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fire {
    pub fire_type: FireType,
    /// Remaining suppression effort before the fire goes out.
    pub progress: f64,
    /// Full health for the current tier.
    pub max_progress: f64,
}

impl Fire {
    /// A fresh fire of the given tier at full health.
    pub fn new(fire_type: FireType) -> Self {
        let max = fire_profile(fire_type).extinguish_time;
        Self {
            fire_type,
            progress: max,
            max_progress: max,
        }
    }

    /// Refill to full health without changing tier.
    pub fn refill(&mut self) {
        self.progress = self.max_progress;
    }
}

/// One grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexCell {
    pub hex: Hex,
    pub is_town: bool,
    pub is_path: bool,
    /// Color tag of the owning path.
    pub path_index: Option<usize>,
    /// Position along the owning path (0 = ring end, toward town).
    pub path_position: Option<usize>,
    pub occupant: Occupant,
    pub fire: Option<Fire>,
    /// Transient: set by the tower system on cells receiving water this
    /// tick, read by next tick's spread rolls.
    pub is_being_sprayed: bool,
}

impl HexCell {
    pub fn new(hex: Hex) -> Self {
        Self {
            hex,
            is_town: false,
            is_path: false,
            path_index: None,
            path_position: None,
            occupant: Occupant::None,
            fire: None,
            is_being_sprayed: false,
        }
    }

    pub fn is_burning(&self) -> bool {
        self.fire.is_some()
    }

    pub fn fire_type(&self) -> Option<FireType> {
        self.fire.map(|f| f.fire_type)
    }

    /// Whether fire may exist on this cell at all. Town cells and
    /// fire-spawner cells silently reject ignition and spread.
    pub fn accepts_fire(&self) -> bool {
        !self.is_town && !matches!(self.occupant, Occupant::FireSpawner)
    }

    /// Clear any path membership (group regeneration).
    pub fn clear_path(&mut self) {
        self.is_path = false;
        self.path_index = None;
        self.path_position = None;
    }
}
