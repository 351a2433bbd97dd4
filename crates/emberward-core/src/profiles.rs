//! Per-type behavioral profiles.
//!
//! Consolidates the per-fire-tier and per-tower-kind parameters used by the
//! fire and tower systems.

use crate::enums::{FireType, TowerKind};

/// Stat profile for one fire tier.
pub struct FireProfile {
    /// Damage per second to structures on the burning cell
    /// (towers, tanks, items, dig sites).
    pub damage_per_sec: f64,
    /// Suppression effort required to extinguish (full fire health).
    pub extinguish_time: f64,
    /// Tier factor in the spread-chance product.
    pub spread_multiplier: f64,
}

/// Get the profile for a fire tier.
pub fn fire_profile(fire_type: FireType) -> FireProfile {
    match fire_type {
        FireType::Cinder => FireProfile {
            damage_per_sec: 0.5,
            extinguish_time: 5.0,
            spread_multiplier: 1.0,
        },
        FireType::Flame => FireProfile {
            damage_per_sec: 1.0,
            extinguish_time: 9.0,
            spread_multiplier: 1.15,
        },
        FireType::Blaze => FireProfile {
            damage_per_sec: 1.6,
            extinguish_time: 14.0,
            spread_multiplier: 1.3,
        },
        FireType::Firestorm => FireProfile {
            damage_per_sec: 2.4,
            extinguish_time: 20.0,
            spread_multiplier: 1.5,
        },
        FireType::Inferno => FireProfile {
            damage_per_sec: 3.5,
            extinguish_time: 28.0,
            spread_multiplier: 1.75,
        },
        FireType::Cataclysm => FireProfile {
            damage_per_sec: 5.0,
            extinguish_time: 40.0,
            spread_multiplier: 2.0,
        },
    }
}

/// Stat profile for one tower kind. Level arrays are indexed by
/// `range_level - 1` / `power_level - 1` (levels run 1–4).
pub struct TowerProfile {
    pub max_health: f64,
    /// Targeting reach per range level: line length, flank length, rain
    /// radius, or bomber maximum lob distance depending on kind.
    pub range_by_level: [i32; 4],
    /// Suppression power per power level. Units per second for continuous
    /// kinds; units per burst-second for Pulsing; impact units for Bomber.
    pub power_by_level: [f64; 4],
    /// Attack interval per range level, for periodic kinds (Pulsing,
    /// Bomber). `None` for continuous kinds.
    pub attack_interval_by_level: Option<[f64; 4]>,
}

/// Get the profile for a tower kind.
pub fn tower_profile(kind: TowerKind) -> TowerProfile {
    match kind {
        TowerKind::Jet => TowerProfile {
            max_health: 10.0,
            range_by_level: [2, 3, 4, 6],
            power_by_level: [2.0, 3.0, 4.5, 6.5],
            attack_interval_by_level: None,
        },
        TowerKind::Spread => TowerProfile {
            max_health: 10.0,
            range_by_level: [1, 2, 3, 4],
            power_by_level: [1.2, 1.8, 2.7, 4.0],
            attack_interval_by_level: None,
        },
        TowerKind::Pulsing => TowerProfile {
            max_health: 12.0,
            // Pulsing always hits the fixed adjacency ring; range levels
            // govern burst cadence instead.
            range_by_level: [1, 1, 1, 1],
            power_by_level: [1.5, 2.2, 3.2, 4.5],
            attack_interval_by_level: Some([3.0, 2.5, 2.0, 1.5]),
        },
        TowerKind::Rain => TowerProfile {
            max_health: 8.0,
            range_by_level: [1, 2, 2, 3],
            power_by_level: [0.8, 1.2, 1.8, 2.6],
            attack_interval_by_level: None,
        },
        TowerKind::Bomber => TowerProfile {
            max_health: 10.0,
            range_by_level: [4, 5, 6, 8],
            power_by_level: [3.0, 4.5, 6.5, 9.0],
            attack_interval_by_level: Some([6.0, 5.0, 4.0, 3.0]),
        },
    }
}
