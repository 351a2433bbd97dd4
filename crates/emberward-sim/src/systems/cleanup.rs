//! Cleanup system: despawns collected entities and resets the per-tick
//! accumulators.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use emberward_core::types::Hex;

/// Drain the despawn buffer and clear the tick's water/damage totals.
/// The accumulators are recomputed from zero every tick, never carried
/// over.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    water: &mut BTreeMap<Hex, f64>,
    damage: &mut BTreeMap<Hex, f64>,
) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    water.clear();
    damage.clear();
}
