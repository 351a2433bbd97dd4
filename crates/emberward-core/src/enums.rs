//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::{BombId, DigSiteId, ItemId, TankId, TowerId};

/// Fire intensity tier, ordered by strength.
///
/// The derived `Ord` is the overtake order: a fire may only be replaced
/// in place by a strictly greater tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FireType {
    Cinder,
    Flame,
    Blaze,
    Firestorm,
    Inferno,
    Cataclysm,
}

impl FireType {
    /// All tiers, weakest first. Index order matches spawn-table columns.
    pub const ALL: [FireType; 6] = [
        FireType::Cinder,
        FireType::Flame,
        FireType::Blaze,
        FireType::Firestorm,
        FireType::Inferno,
        FireType::Cataclysm,
    ];

    /// Column index in the spawn table.
    pub fn index(&self) -> usize {
        match self {
            FireType::Cinder => 0,
            FireType::Flame => 1,
            FireType::Blaze => 2,
            FireType::Firestorm => 3,
            FireType::Inferno => 4,
            FireType::Cataclysm => 5,
        }
    }

    /// The next stronger tier, saturating at `Cataclysm`.
    pub fn next_tier(&self) -> FireType {
        match self {
            FireType::Cinder => FireType::Flame,
            FireType::Flame => FireType::Blaze,
            FireType::Blaze => FireType::Firestorm,
            FireType::Firestorm => FireType::Inferno,
            FireType::Inferno => FireType::Cataclysm,
            FireType::Cataclysm => FireType::Cataclysm,
        }
    }
}

/// Defensive tower type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Straight water line along the facing direction.
    Jet,
    /// Three lines: the facing direction and the two ±30° flanks.
    Spread,
    /// Periodic full-power burst on the six adjacent cells.
    Pulsing,
    /// Continuous drizzle over a radius.
    Rain,
    /// Lobs water bombs that detonate in a ring pattern.
    Bomber,
}

/// What a cell is occupied by. Occupancy is mutually exclusive; fire is a
/// separate orthogonal field since any occupant's cell can burn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    None,
    Tower(TowerId),
    WaterTank(TankId),
    SuppressionBomb(BombId),
    Item(ItemId),
    DigSite(DigSiteId),
    /// Indestructible, fire-immune spread amplifier.
    FireSpawner,
}

impl Occupant {
    pub fn is_none(&self) -> bool {
        matches!(self, Occupant::None)
    }
}

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session started.
    #[default]
    Idle,
    /// Session running (wave machine live).
    Running,
    Paused,
}

/// Wave session phase. Exactly one of placement/active while a session is
/// live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Build time between waves.
    #[default]
    Placement,
    /// Fires burning, timers running.
    Active,
}

/// What destroyed an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestroyCause {
    /// Burned down by fire on its cell.
    Fire,
    /// Broken by tower water (shared attack semantics).
    Water,
}
