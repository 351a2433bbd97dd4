//! Hazard system: water tanks, suppression bombs, dig sites, items.

use std::collections::{BTreeMap, BTreeSet};

use hecs::{Entity, World};

use emberward_core::components::{DigSite, Item, SuppressionBomb, WaterTank};
use emberward_core::constants::*;
use emberward_core::enums::{DestroyCause, Occupant};
use emberward_core::events::SimEvent;
use emberward_core::profiles::fire_profile;
use emberward_core::types::{BombId, DigSiteId, Hex, ItemId, TankId};
use emberward_grid::HexGrid;

/// Run all hazard updates for one tick. Reads the per-tick water and
/// attack-damage accumulators filled by the tower and bomb systems.
pub fn run(
    world: &mut World,
    grid: &mut HexGrid,
    water: &BTreeMap<Hex, f64>,
    damage: &BTreeMap<Hex, f64>,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    update_tanks(world, grid, damage, events, despawn_buffer, dt);
    update_suppression_bombs(world, grid, events, despawn_buffer, dt);
    update_dig_sites(world, grid, water, events, despawn_buffer, dt);
    update_items(world, grid, damage, events, despawn_buffer, dt);
}

/// Tanks take fire damage like an unshielded tower plus any tower attack
/// damage; a tank reaching 0 explodes, extinguishing its blast zone and
/// chaining into every other active tank caught in it.
fn update_tanks(
    world: &mut World,
    grid: &mut HexGrid,
    damage: &BTreeMap<Hex, f64>,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    for (_entity, tank) in world.query_mut::<&mut WaterTank>() {
        if !tank.active {
            continue;
        }
        let mut total = damage.get(&tank.hex).copied().unwrap_or(0.0);
        if let Some(fire) = grid.get(tank.hex).and_then(|c| c.fire) {
            total += fire_profile(fire.fire_type).damage_per_sec * dt;
        }
        tank.health -= total;
    }

    // Chain resolution runs over a snapshot: an explicit worklist with a
    // visited set, bounded by the tank count even when two tanks sit in
    // each other's blast radius.
    let tanks: Vec<(Entity, TankId, Hex, f64)> = world
        .query::<&WaterTank>()
        .iter()
        .filter(|(_, t)| t.active)
        .map(|(e, t)| (e, t.id, t.hex, t.health))
        .collect();

    let mut worklist: Vec<usize> = tanks
        .iter()
        .enumerate()
        .filter(|(_, (_, _, _, health))| *health <= 0.0)
        .map(|(i, _)| i)
        .collect();
    let mut visited: BTreeSet<usize> = BTreeSet::new();

    while let Some(i) = worklist.pop() {
        if !visited.insert(i) {
            continue;
        }
        let (entity, id, hex, _) = tanks[i];

        for blast_hex in grid.hexes_in_radius(hex, TANK_BLAST_RADIUS) {
            if let Some(cell) = grid.get_mut(blast_hex) {
                if let Some(fire) = cell.fire.take() {
                    events.push(SimEvent::FireExtinguished {
                        fire_type: fire.fire_type,
                        hex: blast_hex,
                    });
                }
            }
        }
        events.push(SimEvent::TankExploded { tank: id, hex });

        for (j, (_, _, other_hex, _)) in tanks.iter().enumerate() {
            if j != i && !visited.contains(&j) && other_hex.distance(hex) <= TANK_BLAST_RADIUS {
                worklist.push(j);
            }
        }

        grid.update(hex, |c| c.occupant = Occupant::None);
        if let Ok(mut tank) = world.get::<&mut WaterTank>(entity) {
            tank.active = false;
        }
        despawn_buffer.push(entity);
    }
}

/// Armed bombs trigger the first tick fire reaches their cell or any
/// neighbor, then detonate once after a fixed delay.
fn update_suppression_bombs(
    world: &mut World,
    grid: &mut HexGrid,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    let mut detonations: Vec<(Entity, BombId, Hex, u8)> = Vec::new();

    for (entity, bomb) in world.query_mut::<&mut SuppressionBomb>() {
        if bomb.detonated {
            continue;
        }
        if !bomb.triggered {
            let fire_near = grid.get(bomb.hex).is_some_and(|c| c.is_burning())
                || grid.neighbor_cells(bomb.hex).any(|c| c.is_burning());
            if fire_near {
                bomb.triggered = true;
                bomb.countdown = SUPPRESSION_BOMB_DELAY;
            }
        } else {
            bomb.countdown -= dt;
            if bomb.countdown <= 0.0 {
                bomb.detonated = true;
                detonations.push((entity, bomb.id, bomb.hex, bomb.level));
            }
        }
    }

    for (entity, id, hex, level) in detonations {
        let radius = SUPPRESSION_RADIUS_BY_LEVEL[(level.clamp(1, 3) - 1) as usize];
        for blast_hex in grid.hexes_in_radius(hex, radius) {
            if let Some(cell) = grid.get_mut(blast_hex) {
                if let Some(fire) = cell.fire.take() {
                    events.push(SimEvent::FireExtinguished {
                        fire_type: fire.fire_type,
                        hex: blast_hex,
                    });
                }
            }
        }
        events.push(SimEvent::SuppressionBombDetonated { bomb: id, hex });
        grid.update(hex, |c| c.occupant = Occupant::None);
        despawn_buffer.push(entity);
    }
}

/// Dig sites take the fire damage left over after this tick's water:
/// `max(0, fire damage − water applied)`. The water accumulator is
/// recomputed from zero every tick, never carried over.
fn update_dig_sites(
    world: &mut World,
    grid: &mut HexGrid,
    water: &BTreeMap<Hex, f64>,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    let mut destroyed: Vec<(Entity, DigSiteId, Hex)> = Vec::new();

    for (entity, dig) in world.query_mut::<&mut DigSite>() {
        let Some(fire) = grid.get(dig.hex).and_then(|c| c.fire) else {
            continue;
        };
        let fire_damage = fire_profile(fire.fire_type).damage_per_sec * dt;
        let applied = water.get(&dig.hex).copied().unwrap_or(0.0);
        let net = (fire_damage - applied).max(0.0);
        dig.health -= net;
        if dig.health <= 0.0 {
            destroyed.push((entity, dig.id, dig.hex));
        }
    }

    for (entity, id, hex) in destroyed {
        events.push(SimEvent::DigSiteDestroyed { dig_site: id, hex });
        grid.update(hex, |c| c.occupant = Occupant::None);
        despawn_buffer.push(entity);
        log::debug!("dig site {id:?} lost at {hex:?}");
    }
}

/// Items burn down under fire and break under tower water alike; the
/// destruction event carries whichever cause landed the final blow.
fn update_items(
    world: &mut World,
    grid: &mut HexGrid,
    damage: &BTreeMap<Hex, f64>,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    let mut destroyed: Vec<(Entity, ItemId, Hex, DestroyCause)> = Vec::new();

    for (entity, item) in world.query_mut::<&mut Item>() {
        if let Some(fire) = grid.get(item.hex).and_then(|c| c.fire) {
            item.health -= fire_profile(fire.fire_type).damage_per_sec * dt;
            if item.health <= 0.0 {
                destroyed.push((entity, item.id, item.hex, DestroyCause::Fire));
                continue;
            }
        }
        let water_damage = damage.get(&item.hex).copied().unwrap_or(0.0);
        if water_damage > 0.0 {
            item.health -= water_damage;
            if item.health <= 0.0 {
                destroyed.push((entity, item.id, item.hex, DestroyCause::Water));
            }
        }
    }

    for (entity, id, hex, cause) in destroyed {
        events.push(SimEvent::ItemDestroyed { item: id, cause });
        grid.update(hex, |c| c.occupant = Occupant::None);
        despawn_buffer.push(entity);
    }
}
