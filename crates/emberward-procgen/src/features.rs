//! Wave-group feature placement: spawner sites, dig sites, items.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use emberward_core::types::Hex;
use emberward_grid::HexGrid;

use crate::paths::Path;

/// Where fire spawners go: the terminal cell of each path.
pub fn spawner_sites(paths: &[Path]) -> Vec<Hex> {
    let mut sites: Vec<Hex> = paths.iter().filter_map(|p| p.terminal()).collect();
    sites.sort();
    sites.dedup();
    sites
}

/// Pick `count` distinct cells for feature seeding (dig sites, items).
///
/// Eligible cells are in bounds, off the town and off every path,
/// unoccupied, at least `min_distance` from the origin, and not in
/// `exclude`. Fewer cells are returned if the map runs out.
pub fn seed_cells(
    grid: &HexGrid,
    rng: &mut ChaCha8Rng,
    count: usize,
    min_distance: i32,
    exclude: &BTreeSet<Hex>,
) -> Vec<Hex> {
    let origin = grid.town_center();
    let eligible: Vec<Hex> = grid
        .iter()
        .filter(|c| {
            !c.is_town
                && !c.is_path
                && c.occupant.is_none()
                && c.hex.distance(origin) >= min_distance
                && !exclude.contains(&c.hex)
        })
        .map(|c| c.hex)
        .collect();

    eligible.choose_multiple(rng, count).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{generate_paths, PathConfig};
    use rand::SeedableRng;

    #[test]
    fn test_spawner_sites_are_path_terminals() {
        let grid = HexGrid::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let paths = generate_paths(
            &grid,
            &mut rng,
            &PathConfig {
                count: 3,
                target_length: 14,
            },
        );
        let sites = spawner_sites(&paths);
        assert!(!sites.is_empty());
        for site in &sites {
            assert!(paths.iter().any(|p| p.terminal() == Some(*site)));
        }
    }

    #[test]
    fn test_seed_cells_respect_eligibility() {
        let grid = HexGrid::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut exclude = BTreeSet::new();
        exclude.insert(Hex::new(5, 0));

        let cells = seed_cells(&grid, &mut rng, 6, 4, &exclude);
        assert_eq!(cells.len(), 6);
        let mut unique = cells.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), cells.len());
        for hex in &cells {
            assert!(grid.contains(*hex));
            assert!(hex.distance(Hex::ORIGIN) >= 4);
            assert_ne!(*hex, Hex::new(5, 0));
        }
    }

    #[test]
    fn test_seed_cells_cap_at_available() {
        let grid = HexGrid::with_radius(2);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Radius 2 has nothing at distance >= 4.
        let cells = seed_cells(&grid, &mut rng, 5, 4, &BTreeSet::new());
        assert!(cells.is_empty());
    }
}
