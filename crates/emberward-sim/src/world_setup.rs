//! Topology setup: paths, fire spawners, dig sites, and items.
//!
//! Runs at session start and at every group boundary. Player structures
//! (towers, tanks, suppression bombs) are untouched by regeneration.

use std::collections::BTreeSet;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use emberward_core::components::{DigSite, FireSpawner, Item};
use emberward_core::constants::{DIG_SITE_HEALTH, FEATURE_MIN_DISTANCE, ITEM_HEALTH};
use emberward_core::enums::Occupant;
use emberward_core::types::{DigSiteId, Hex, ItemId};
use emberward_grid::HexGrid;
use emberward_procgen::{generate_paths, seed_cells, spawner_sites, Path, PathConfig};

use crate::curves;
use crate::engine::IdAllocator;

/// Build the topology for a fresh session (group 1) on a clean world.
pub fn start_session(
    world: &mut World,
    grid: &mut HexGrid,
    paths: &mut Vec<Path>,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
) {
    *grid = HexGrid::new();
    world.clear();
    paths.clear();
    build_group_topology(world, grid, paths, rng, ids, 1);
}

/// Group boundary: drop the old paths, spawners, dig sites, and items,
/// then build the next group's layout.
pub fn regenerate_topology(
    world: &mut World,
    grid: &mut HexGrid,
    paths: &mut Vec<Path>,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    group: u32,
) {
    for cell in grid.iter_mut() {
        cell.clear_path();
        if matches!(
            cell.occupant,
            Occupant::FireSpawner | Occupant::DigSite(_) | Occupant::Item(_)
        ) {
            cell.occupant = Occupant::None;
        }
    }

    let mut stale: Vec<Entity> = Vec::new();
    stale.extend(world.query::<&FireSpawner>().iter().map(|(e, _)| e));
    stale.extend(world.query::<&DigSite>().iter().map(|(e, _)| e));
    stale.extend(world.query::<&Item>().iter().map(|(e, _)| e));
    for entity in stale {
        let _ = world.despawn(entity);
    }

    paths.clear();
    build_group_topology(world, grid, paths, rng, ids, group);
}

/// Generate paths, place spawners at their terminals, and seed the
/// group's dig sites and items.
fn build_group_topology(
    world: &mut World,
    grid: &mut HexGrid,
    paths: &mut Vec<Path>,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    group: u32,
) {
    let config = PathConfig {
        count: curves::path_count(group),
        target_length: grid.radius() as usize + 2,
    };
    *paths = generate_paths(grid, rng, &config);
    log::debug!("group {group}: generated {} paths", paths.len());

    for path in paths.iter() {
        for (position, &hex) in path.cells.iter().enumerate() {
            grid.update(hex, |c| {
                c.is_path = true;
                c.path_index = Some(path.color_index);
                c.path_position = Some(position);
            });
        }
    }

    for site in spawner_sites(paths) {
        let occupied = grid.get(site).map(|c| !c.occupant.is_none()).unwrap_or(true);
        if occupied {
            // A surviving player structure keeps its cell; this path just
            // goes without a spawner.
            continue;
        }
        grid.update(site, |c| {
            c.occupant = Occupant::FireSpawner;
            c.fire = None;
        });
        world.spawn((FireSpawner { hex: site },));
    }

    let mut taken: BTreeSet<Hex> = BTreeSet::new();

    let dig_count = curves::dig_site_count(group) as usize;
    for hex in seed_cells(grid, rng, dig_count, FEATURE_MIN_DISTANCE, &taken) {
        let id = DigSiteId(ids.next_dig_site);
        ids.next_dig_site += 1;
        grid.update(hex, |c| c.occupant = Occupant::DigSite(id));
        world.spawn((DigSite {
            id,
            hex,
            health: DIG_SITE_HEALTH,
        },));
        taken.insert(hex);
    }

    let item_count = curves::item_count(group) as usize;
    for hex in seed_cells(grid, rng, item_count, FEATURE_MIN_DISTANCE, &taken) {
        let id = ItemId(ids.next_item);
        ids.next_item += 1;
        grid.update(hex, |c| c.occupant = Occupant::Item(id));
        world.spawn((Item {
            id,
            hex,
            health: ITEM_HEALTH,
        },));
        taken.insert(hex);
    }
}
