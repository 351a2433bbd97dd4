//! Events emitted by the simulation.
//!
//! The engine accumulates events during a tick and drains them into the
//! snapshot; the external layer (progression, economy, audio) consumes
//! them after the tick. Nothing re-enters the simulation mid-tick.

use serde::{Deserialize, Serialize};

use crate::enums::{DestroyCause, FireType};
use crate::types::{BombId, DigSiteId, Hex, ItemId, TankId, TowerId};

/// Simulation events for the external progression/economy/audio layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new fire appeared on a cell.
    FireIgnited { fire_type: FireType, hex: Hex },
    /// A fire was fully suppressed. Emitted exactly once per extinguish.
    FireExtinguished { fire_type: FireType, hex: Hex },
    /// A tower burned down. Permanent, no refund.
    TowerDestroyed { tower: TowerId },
    /// An item was destroyed, by fire or by water.
    ItemDestroyed { item: ItemId, cause: DestroyCause },
    /// A water tank detonated (possibly as part of a chain).
    TankExploded { tank: TankId, hex: Hex },
    /// A suppression bomb went off.
    SuppressionBombDetonated { bomb: BombId, hex: Hex },
    /// A dig site was lost. Permanent for the rest of the group.
    DigSiteDestroyed { dig_site: DigSiteId, hex: Hex },
    /// A wave left the placement phase.
    WaveStarted { wave: u32 },
    /// A wave timer ran out; fires and airborne bombs were cleared.
    WaveCompleted { wave: u32 },
    /// A wave group finished; topology regenerates before the next wave.
    GroupCompleted { group: u32 },
}
