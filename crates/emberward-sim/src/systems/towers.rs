//! Tower system: fire damage, regeneration, attacks, and destruction.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use emberward_core::components::{Tower, WaterBomb};
use emberward_core::constants::*;
use emberward_core::enums::{Occupant, TowerKind};
use emberward_core::events::SimEvent;
use emberward_core::profiles::{fire_profile, tower_profile};
use emberward_core::types::{Hex, TowerId, WaterBombId};
use emberward_grid::HexGrid;

use crate::engine::IdAllocator;
use crate::systems::spray;
use crate::targeting;

/// A bomber launch collected during the tower pass.
struct LaunchRequest {
    tower: TowerId,
    from: Hex,
    direction: u8,
    range_level: u8,
    power_level: u8,
}

/// Run the tower system for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    grid: &mut HexGrid,
    rng: &mut ChaCha8Rng,
    water: &mut BTreeMap<Hex, f64>,
    damage: &mut BTreeMap<Hex, f64>,
    ids: &mut IdAllocator,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    // Sprayed flags are transient: rewritten from scratch every tick.
    for cell in grid.iter_mut() {
        cell.is_being_sprayed = false;
    }

    let mut launches: Vec<LaunchRequest> = Vec::new();
    let mut destroyed: Vec<(Entity, TowerId, Hex)> = Vec::new();

    for (entity, tower) in world.query_mut::<&mut Tower>() {
        // Fire on the tower's own cell damages it; otherwise it slowly
        // regenerates.
        let burning_dps = grid
            .get(tower.hex)
            .and_then(|c| c.fire)
            .map(|f| fire_profile(f.fire_type).damage_per_sec);
        match burning_dps {
            Some(dps) => apply_fire_damage(tower, dps * dt),
            None => {
                tower.health = (tower.health + TOWER_REGEN_PER_SEC * dt).min(tower.max_health);
            }
        }
        if tower.health <= 0.0 {
            destroyed.push((entity, tower.id, tower.hex));
            continue;
        }

        let profile = tower_profile(tower.kind);
        let power = profile.power_by_level[(tower.power_level.clamp(1, 4) - 1) as usize];
        match tower.kind {
            TowerKind::Jet | TowerKind::Spread | TowerKind::Rain => {
                for &hex in &tower.affected_hexes {
                    spray(grid, water, damage, hex, power * dt);
                }
            }
            TowerKind::Pulsing => {
                let interval = attack_interval(&profile, tower.range_level);
                tower.attack_timer += dt;
                while tower.attack_timer >= interval {
                    tower.attack_timer -= interval;
                    // Full-power burst: damage equals power × interval.
                    for &hex in &tower.affected_hexes {
                        spray(grid, water, damage, hex, power * interval);
                    }
                }
            }
            TowerKind::Bomber => {
                let interval = attack_interval(&profile, tower.range_level);
                tower.attack_timer += dt;
                if tower.attack_timer >= interval {
                    tower.attack_timer -= interval;
                    launches.push(LaunchRequest {
                        tower: tower.id,
                        from: tower.hex,
                        direction: tower.direction,
                        range_level: tower.range_level,
                        power_level: tower.power_level,
                    });
                }
            }
        }
    }

    for (entity, id, hex) in destroyed {
        grid.update(hex, |c| c.occupant = Occupant::None);
        events.push(SimEvent::TowerDestroyed { tower: id });
        despawn_buffer.push(entity);
        log::debug!("tower {id:?} burned down at {hex:?}");
    }

    for launch in launches {
        let target = targeting::bomber_target(grid, rng, launch.from, launch.direction, launch.range_level);
        let distance = launch.from.distance(target).max(1);
        let id = WaterBombId(ids.next_water_bomb);
        ids.next_water_bomb += 1;
        world.spawn((WaterBomb {
            id,
            tower: launch.tower,
            origin: launch.from,
            target,
            progress: 0.0,
            progress_rate: WATER_BOMB_FLIGHT_SPEED / distance as f64,
            power_level: launch.power_level,
            exploded: false,
        },));
    }
}

/// Apply fire damage through the shield first; the shield is discarded
/// at 0 and any overflow reaches the tower.
fn apply_fire_damage(tower: &mut Tower, amount: f64) {
    match &mut tower.shield {
        Some(shield) if shield.health > amount => {
            shield.health -= amount;
        }
        Some(shield) => {
            let overflow = amount - shield.health;
            tower.shield = None;
            tower.health -= overflow;
        }
        None => {
            tower.health -= amount;
        }
    }
}

fn attack_interval(profile: &emberward_core::profiles::TowerProfile, range_level: u8) -> f64 {
    profile
        .attack_interval_by_level
        .map(|arr| arr[(range_level.clamp(1, 4) - 1) as usize])
        .unwrap_or(1.0)
}
