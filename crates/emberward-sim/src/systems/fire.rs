//! Fire systems: ignition, spread, stoking, and suppression application.
//!
//! Ignition and spread never mutate the grid while iterating it: intended
//! fires collect into a pending list applied afterward, so a cell lit
//! mid-tick cannot also spread within the same tick.

use std::collections::BTreeMap;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emberward_core::constants::*;
use emberward_core::enums::{FireType, Occupant};
use emberward_core::events::SimEvent;
use emberward_core::profiles::fire_profile;
use emberward_core::spawn_table::FireSpawnTable;
use emberward_core::types::Hex;
use emberward_grid::{Fire, HexCell, HexGrid};

use crate::curves;
use crate::systems::scheduler::WaveState;

/// How a pending fire came to be. Ignition refills weaker-or-equal
/// attempts; spread silently drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireSource {
    Ignition,
    Spread,
}

/// A fire mutation collected during iteration, applied after it.
#[derive(Debug, Clone, Copy)]
pub struct PendingFire {
    pub hex: Hex,
    pub fire_type: FireType,
    pub source: FireSource,
}

/// Roll spontaneous ignition for every eligible cell.
pub fn ignition(
    grid: &HexGrid,
    rng: &mut ChaCha8Rng,
    table: &FireSpawnTable,
    wave: &WaveState,
    pending: &mut Vec<PendingFire>,
    dt: f64,
) {
    let chance =
        (IGNITION_BASE_RATE * curves::ignition_multiplier(wave.wave_in_group) * dt).clamp(0.0, 1.0);
    if chance <= 0.0 {
        return;
    }

    for cell in grid.iter() {
        if !cell.accepts_fire() {
            continue;
        }
        if !rng.gen_bool(chance) {
            continue;
        }
        let roll = rng.gen::<f64>();
        pending.push(PendingFire {
            hex: cell.hex,
            fire_type: table.draw(wave.number, roll),
            source: FireSource::Ignition,
        });
    }
}

/// Roll spread from every burning cell to each of its neighbors.
pub fn spread(
    grid: &HexGrid,
    rng: &mut ChaCha8Rng,
    table: &FireSpawnTable,
    wave: &WaveState,
    spread_buff: f64,
    pending: &mut Vec<PendingFire>,
    dt: f64,
) {
    let spawners: Vec<Hex> = grid
        .iter()
        .filter(|c| matches!(c.occupant, Occupant::FireSpawner))
        .map(|c| c.hex)
        .collect();
    let max_tier = table.max_tier(wave.number);
    let base = SPREAD_BASE_RATE * curves::base_spread_growth(wave.number);
    let per_wave = curves::spread_wave_multiplier(wave.wave_in_group);

    for cell in grid.iter() {
        let Some(fire) = cell.fire else {
            continue;
        };
        let type_mult = fire_profile(fire.fire_type).spread_multiplier;
        let sprayed = if cell.is_being_sprayed {
            SPREAD_SPRAYED_FACTOR
        } else {
            1.0
        };
        // Spreading evolves the fire one tier, capped by what the wave's
        // table can produce.
        let attacking = fire.fire_type.next_tier().min(max_tier);

        for neighbor_hex in cell.hex.neighbors() {
            let Some(neighbor) = grid.get(neighbor_hex) else {
                continue;
            };
            if !neighbor.accepts_fire() {
                continue;
            }
            // Overtake monotonicity: only unlit or strictly weaker cells.
            if neighbor.fire.is_some_and(|f| f.fire_type >= attacking) {
                continue;
            }

            let situation = situation_multiplier(grid, cell, neighbor, &spawners);
            let chance = (base * situation * per_wave * type_mult * spread_buff * sprayed * dt)
                .clamp(0.0, 1.0);
            if rng.gen_bool(chance) {
                pending.push(PendingFire {
                    hex: neighbor_hex,
                    fire_type: attacking,
                    source: FireSource::Spread,
                });
            }
        }
    }
}

/// Classify the spread target and return its chance multiplier.
pub(crate) fn situation_multiplier(
    grid: &HexGrid,
    source: &HexCell,
    neighbor: &HexCell,
    spawners: &[Hex],
) -> f64 {
    let origin = grid.town_center();
    if neighbor.hex.distance(origin) == DEPARTURE_RING_RADIUS {
        return SPREAD_MULT_TOWN_ADJACENT;
    }
    if source.is_path && neighbor.is_path {
        let toward_town = source.path_index == neighbor.path_index
            && matches!(
                (neighbor.path_position, source.path_position),
                (Some(n), Some(s)) if n < s
            );
        return if toward_town {
            SPREAD_MULT_PATH_TOWARD_TOWN
        } else {
            SPREAD_MULT_PATH_LATERAL
        };
    }
    if !source.is_path && neighbor.is_path {
        return SPREAD_MULT_PATH_ENTRY;
    }

    // Spawner proximity overrides the normal case, decaying per ring.
    let spawner_ring = spawners
        .iter()
        .map(|s| neighbor.hex.distance(*s))
        .filter(|d| (1..=SPAWNER_PROXIMITY_RINGS).contains(d))
        .min();
    if let Some(ring) = spawner_ring {
        return SPAWNER_PROXIMITY_MULT * SPAWNER_RING_REDUCTION.powi(ring - 1);
    }
    1.0
}

/// Apply the tick's collected ignitions and spreads.
pub fn apply_pending(grid: &mut HexGrid, pending: &mut Vec<PendingFire>, events: &mut Vec<SimEvent>) {
    for p in pending.drain(..) {
        let Some(cell) = grid.get_mut(p.hex) else {
            continue;
        };
        if !cell.accepts_fire() {
            continue;
        }
        match &mut cell.fire {
            None => {
                cell.fire = Some(Fire::new(p.fire_type));
                events.push(SimEvent::FireIgnited {
                    fire_type: p.fire_type,
                    hex: p.hex,
                });
            }
            Some(existing) => {
                if p.fire_type > existing.fire_type {
                    // Overtake: strictly stronger replaces, at full health.
                    *existing = Fire::new(p.fire_type);
                } else if p.source == FireSource::Ignition {
                    // A weaker re-ignition refills the stronger fire
                    // instead of downgrading it.
                    existing.refill();
                }
            }
        }
    }
}

/// Subtract the tick's summed suppression from each burning cell.
/// Emits exactly one event per extinguished fire.
pub fn apply_suppression(
    grid: &mut HexGrid,
    water: &BTreeMap<Hex, f64>,
    events: &mut Vec<SimEvent>,
) {
    for (&hex, &amount) in water {
        if amount <= 0.0 {
            continue;
        }
        let Some(cell) = grid.get_mut(hex) else {
            continue;
        };
        let Some(fire) = &mut cell.fire else {
            continue;
        };
        fire.progress -= amount;
        if fire.progress <= 0.0 {
            let fire_type = fire.fire_type;
            cell.fire = None;
            events.push(SimEvent::FireExtinguished { fire_type, hex });
        }
    }
}

/// Stoke a burning cell: +1 tier capped at the wave's maximum, health
/// refilled. Never downgrades; unlit cells are untouched.
pub fn stoke(grid: &mut HexGrid, hex: Hex, max_tier: FireType) {
    let Some(cell) = grid.get_mut(hex) else {
        return;
    };
    let Some(fire) = &mut cell.fire else {
        return;
    };
    let target = fire.fire_type.next_tier().min(max_tier);
    if target > fire.fire_type {
        *fire = Fire::new(target);
    } else {
        fire.refill();
    }
}

/// Synchronous wave-end clearing. No extinguish events: nothing was
/// suppressed, the session simply moved on.
pub fn clear_all(grid: &mut HexGrid) {
    for cell in grid.iter_mut() {
        cell.fire = None;
        cell.is_being_sprayed = false;
    }
}
