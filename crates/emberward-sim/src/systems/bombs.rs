//! Water bomb flight and detonation.
//!
//! Travel is incremental progress per tick, never an async wait. The
//! `exploded` guard makes detonation exactly-once even if an entity is
//! touched again after reaching its terminal condition.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use emberward_core::components::WaterBomb;
use emberward_core::constants::BOMBER_RING_MULTIPLIERS;
use emberward_core::enums::TowerKind;
use emberward_core::profiles::tower_profile;
use emberward_core::types::Hex;
use emberward_grid::HexGrid;

use crate::systems::spray;

/// Advance all airborne bombs; detonate arrivals.
pub fn run(
    world: &mut World,
    grid: &mut HexGrid,
    water: &mut BTreeMap<Hex, f64>,
    damage: &mut BTreeMap<Hex, f64>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    let mut detonations: Vec<(Hex, u8)> = Vec::new();

    for (entity, bomb) in world.query_mut::<&mut WaterBomb>() {
        if bomb.exploded {
            continue;
        }
        bomb.progress = (bomb.progress + bomb.progress_rate * dt).min(1.0);
        if bomb.progress >= 1.0 {
            bomb.exploded = true;
            detonations.push((bomb.target, bomb.power_level));
            despawn_buffer.push(entity);
        }
    }

    for (target, power_level) in detonations {
        detonate(grid, water, damage, target, power_level);
    }
}

/// Apply the impact pattern: ring 0 outward, each ring at a decaying
/// power multiplier, with `power_level` unlocking one ring per level.
pub fn detonate(
    grid: &mut HexGrid,
    water: &mut BTreeMap<Hex, f64>,
    damage: &mut BTreeMap<Hex, f64>,
    target: Hex,
    power_level: u8,
) {
    let level = power_level.clamp(1, 4);
    let impact = tower_profile(TowerKind::Bomber).power_by_level[(level - 1) as usize];

    for ring in 0..level as i32 {
        let multiplier = BOMBER_RING_MULTIPLIERS[ring as usize];
        for hex in grid.hexes_in_ring(target, ring) {
            spray(grid, water, damage, hex, impact * multiplier);
        }
    }
}
