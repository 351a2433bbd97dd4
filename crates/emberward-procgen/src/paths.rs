//! Path generation: random walks from the departure ring outward.
//!
//! Each wave group gets a fresh set of paths. A path starts on an unused
//! ring cell and walks outward, preferring open ground far from other
//! paths, with a direction bias that decays as the path lengthens
//! (straighter near the start, windier later). No two paths ever share a
//! cell, and a path never re-enters the departure ring.

use std::collections::BTreeSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use emberward_core::constants::{
    DEPARTURE_RING_RADIUS, PATH_MIN_LENGTH, PATH_STRAIGHT_BIAS, PATH_STRAIGHT_DECAY,
};
use emberward_core::types::Hex;
use emberward_grid::HexGrid;

/// An ordered walk from a ring cell outward, with an index-based color tag.
#[derive(Debug, Clone)]
pub struct Path {
    pub color_index: usize,
    /// Cells from the ring end outward. Position 0 is the ring cell.
    pub cells: Vec<Hex>,
}

impl Path {
    /// The outermost cell (fire spawners live here).
    pub fn terminal(&self) -> Option<Hex> {
        self.cells.last().copied()
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// Paths to attempt. Fewer are produced if the ring runs out of
    /// usable start cells.
    pub count: u32,
    /// Walk length at which a path stops growing.
    pub target_length: usize,
}

/// Generate a fresh, non-overlapping path set.
pub fn generate_paths(grid: &HexGrid, rng: &mut ChaCha8Rng, config: &PathConfig) -> Vec<Path> {
    let ring = grid.departure_ring();
    let mut all_claimed: BTreeSet<Hex> = BTreeSet::new();
    let mut used_starts: BTreeSet<Hex> = BTreeSet::new();
    let mut paths = Vec::new();

    for color_index in 0..config.count as usize {
        let Some(start) = pick_start(&ring, &used_starts, &all_claimed, rng) else {
            break;
        };
        used_starts.insert(start);

        let cells = walk_path(grid, rng, config, start, &mut all_claimed);
        paths.push(Path { color_index, cells });
    }

    paths
}

/// Choose a start from the unused ring cells, preferring cells not
/// adjacent to any already-placed path.
fn pick_start(
    ring: &[Hex],
    used_starts: &BTreeSet<Hex>,
    claimed: &BTreeSet<Hex>,
    rng: &mut ChaCha8Rng,
) -> Option<Hex> {
    let unused: Vec<Hex> = ring
        .iter()
        .copied()
        .filter(|h| !used_starts.contains(h))
        .collect();
    if unused.is_empty() {
        return None;
    }
    let preferred: Vec<Hex> = unused
        .iter()
        .copied()
        .filter(|h| h.neighbors().iter().all(|n| !claimed.contains(n)))
        .collect();
    let pool = if preferred.is_empty() { &unused } else { &preferred };
    pool.choose(rng).copied()
}

/// Walk a single path outward from `start`, claiming cells as it goes.
fn walk_path(
    grid: &HexGrid,
    rng: &mut ChaCha8Rng,
    config: &PathConfig,
    start: Hex,
    all_claimed: &mut BTreeSet<Hex>,
) -> Vec<Hex> {
    let origin = grid.town_center();
    let mut cells = vec![start];
    let mut current = start;
    let mut own: BTreeSet<Hex> = BTreeSet::new();
    own.insert(start);
    all_claimed.insert(start);
    let mut last_direction: Option<u8> = None;

    loop {
        if cells.len() >= config.target_length {
            break;
        }
        if current.distance(origin) >= grid.radius() {
            // Map edge.
            break;
        }

        let candidates: Vec<Hex> = current
            .neighbors()
            .into_iter()
            .filter(|n| {
                grid.contains(*n)
                    && n.distance(origin) > DEPARTURE_RING_RADIUS
                    && !all_claimed.contains(n)
            })
            .collect();
        if candidates.is_empty() {
            // Dead end.
            break;
        }

        let (tier, is_self_cluster_tier) =
            best_tier(&candidates, current, origin, &own, all_claimed);
        if is_self_cluster_tier && cells.len() >= PATH_MIN_LENGTH {
            // Continuing would force self-clustering.
            break;
        }

        let step = pick_step(&tier, current, last_direction, cells.len(), rng);
        last_direction = current.direction_to(step);
        own.insert(step);
        all_claimed.insert(step);
        cells.push(step);
        current = step;
    }

    cells
}

/// Partition candidates into the five preference tiers and return the
/// highest non-empty one. The second return is true when only the
/// adjacent-only-to-self tier remains.
fn best_tier(
    candidates: &[Hex],
    current: Hex,
    origin: Hex,
    own: &BTreeSet<Hex>,
    all_claimed: &BTreeSet<Hex>,
) -> (Vec<Hex>, bool) {
    let current_distance = current.distance(origin);
    let mut tiers: [Vec<Hex>; 5] = Default::default();

    for &candidate in candidates {
        let far = candidate.distance(origin) > current_distance;
        let adjacent_other = candidate
            .neighbors()
            .iter()
            .any(|n| all_claimed.contains(n) && !own.contains(n));
        // Every candidate touches its predecessor; only extra own-path
        // contact counts as self-clustering.
        let adjacent_own = candidate
            .neighbors()
            .iter()
            .any(|n| *n != current && own.contains(n));

        let tier = match (far, adjacent_other, adjacent_own) {
            (true, false, false) => 0,
            (true, true, false) => 1,
            (false, false, false) => 2,
            (_, true, _) => 3,
            (_, false, true) => 4,
        };
        tiers[tier].push(candidate);
    }

    for (i, tier) in tiers.iter().enumerate() {
        if !tier.is_empty() {
            return (tier.clone(), i == 4);
        }
    }
    (Vec::new(), false)
}

/// Weighted pick within a tier: continuing straight gets a bonus that
/// decays with path length.
fn pick_step(
    tier: &[Hex],
    current: Hex,
    last_direction: Option<u8>,
    length: usize,
    rng: &mut ChaCha8Rng,
) -> Hex {
    let straight_bonus = PATH_STRAIGHT_BIAS * PATH_STRAIGHT_DECAY.powi(length as i32);
    let weights: Vec<f64> = tier
        .iter()
        .map(|candidate| {
            if last_direction.is_some() && current.direction_to(*candidate) == last_direction {
                1.0 + straight_bonus
            } else {
                1.0
            }
        })
        .collect();

    match WeightedIndex::new(&weights) {
        Ok(dist) => tier[dist.sample(rng)],
        Err(_) => tier[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn config() -> PathConfig {
        PathConfig {
            count: 4,
            target_length: 14,
        }
    }

    #[test]
    fn test_paths_never_overlap() {
        for seed in 0..20u64 {
            let grid = HexGrid::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let paths = generate_paths(&grid, &mut rng, &config());

            let mut seen: BTreeSet<Hex> = BTreeSet::new();
            for path in &paths {
                for cell in &path.cells {
                    assert!(seen.insert(*cell), "seed {seed}: cell {cell:?} shared");
                }
            }
        }
    }

    #[test]
    fn test_start_cells_are_injective_ring_cells() {
        let grid = HexGrid::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let paths = generate_paths(&grid, &mut rng, &config());
        assert!(!paths.is_empty());

        let mut starts: BTreeSet<Hex> = BTreeSet::new();
        for path in &paths {
            let start = path.cells[0];
            assert_eq!(start.distance(Hex::ORIGIN), DEPARTURE_RING_RADIUS);
            assert!(starts.insert(start), "start {start:?} reused");
        }
    }

    #[test]
    fn test_paths_never_revisit_the_ring() {
        for seed in 0..20u64 {
            let grid = HexGrid::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for path in generate_paths(&grid, &mut rng, &config()) {
                for cell in &path.cells[1..] {
                    assert!(
                        cell.distance(Hex::ORIGIN) > DEPARTURE_RING_RADIUS,
                        "seed {seed}: path re-entered the ring at {cell:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_walks_stay_in_bounds_and_terminate() {
        for seed in 0..50u64 {
            let grid = HexGrid::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let paths = generate_paths(&grid, &mut rng, &config());
            for path in &paths {
                assert!(path.cells.len() <= 14);
                assert!(path.terminal().is_some());
                for cell in &path.cells {
                    assert!(grid.contains(*cell));
                }
                // Consecutive cells are adjacent.
                for pair in path.cells.windows(2) {
                    assert_eq!(pair[0].distance(pair[1]), 1);
                }
            }
        }
    }

    #[test]
    fn test_color_indices_follow_generation_order() {
        let grid = HexGrid::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let paths = generate_paths(&grid, &mut rng, &config());
        for (i, path) in paths.iter().enumerate() {
            assert_eq!(path.color_index, i);
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let collect = |seed: u64| {
            let grid = HexGrid::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_paths(&grid, &mut rng, &config())
                .into_iter()
                .map(|p| p.cells)
                .collect::<Vec<_>>()
        };
        assert_eq!(collect(11), collect(11));
        assert_ne!(collect(11), collect(12));
    }
}
