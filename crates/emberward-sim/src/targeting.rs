//! Tower targeting geometry.
//!
//! Computes each kind's affected-hex set from its position, facing, and
//! range level. The set always includes the tower's own cell and skips
//! out-of-bounds cells. It is cached on the component and recomputed only
//! when position, direction, or range level changes.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emberward_core::constants::BOMBER_MIN_DISTANCE;
use emberward_core::enums::TowerKind;
use emberward_core::profiles::tower_profile;
use emberward_core::types::Hex;
use emberward_grid::HexGrid;

/// Compute the target set for a tower configuration.
pub fn affected_hexes(
    kind: TowerKind,
    hex: Hex,
    direction: u8,
    range_level: u8,
    grid: &HexGrid,
) -> Vec<Hex> {
    let level = (range_level.clamp(1, 4) - 1) as usize;
    let range = tower_profile(kind).range_by_level[level];
    let mut out = vec![hex];

    match kind {
        TowerKind::Jet => {
            extend_unique(&mut out, line(grid, hex, direction, range));
        }
        TowerKind::Spread => {
            extend_unique(&mut out, line(grid, hex, direction, range));
            extend_unique(&mut out, flank_line(grid, hex, direction, 1, range));
            extend_unique(&mut out, flank_line(grid, hex, direction, 5, range));
        }
        TowerKind::Pulsing => {
            let adjacent = hex.neighbors().into_iter().filter(|n| grid.contains(*n));
            extend_unique(&mut out, adjacent);
        }
        TowerKind::Rain => {
            let disc = grid.hexes_in_radius(hex, range).into_iter();
            extend_unique(&mut out, disc);
        }
        TowerKind::Bomber => {
            // No continuous effect; the cached set is the cell itself.
        }
    }

    out
}

/// Straight line of up to `length` cells along `direction`, starting at
/// the first neighbor. Stops at the map edge.
fn line(grid: &HexGrid, from: Hex, direction: u8, length: i32) -> Vec<Hex> {
    let mut out = Vec::with_capacity(length as usize);
    let mut current = from;
    for _ in 0..length {
        current = current.neighbor(direction);
        if !grid.contains(current) {
            break;
        }
        out.push(current);
    }
    out
}

/// Flanking ray at ±30° from `direction`: alternate stepping the offset
/// direction and the main direction, which traces the straight cube-space
/// ray exactly between two adjacent hex directions.
fn flank_line(grid: &HexGrid, from: Hex, direction: u8, offset: u8, length: i32) -> Vec<Hex> {
    let flank_direction = (direction + offset) % 6;
    let mut out = Vec::with_capacity(length as usize);
    let mut current = from;
    for step in 0..length {
        let d = if step % 2 == 0 { flank_direction } else { direction };
        current = current.neighbor(d);
        if !grid.contains(current) {
            break;
        }
        out.push(current);
    }
    out
}

/// Pick a bomber impact cell: a triangular-weighted distance in
/// `[min, max]` (peaking mid-range) along `direction`, clamped to the
/// nearest in-bounds cell.
pub fn bomber_target(
    grid: &HexGrid,
    rng: &mut ChaCha8Rng,
    from: Hex,
    direction: u8,
    range_level: u8,
) -> Hex {
    let level = (range_level.clamp(1, 4) - 1) as usize;
    let max = tower_profile(TowerKind::Bomber).range_by_level[level];
    let min = BOMBER_MIN_DISTANCE.min(max);

    // Mean of two uniform draws: triangular, peaking mid-range.
    let a = rng.gen_range(min..=max);
    let b = rng.gen_range(min..=max);
    let distance = ((a + b) as f64 / 2.0).round() as i32;

    let mut target = from;
    let mut current = from;
    for _ in 0..distance {
        current = current.neighbor(direction);
        if !grid.contains(current) {
            break;
        }
        target = current;
    }
    target
}

fn extend_unique(out: &mut Vec<Hex>, cells: impl IntoIterator<Item = Hex>) {
    for hex in cells {
        if !out.contains(&hex) {
            out.push(hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_own_cell_always_included() {
        let grid = HexGrid::new();
        let hex = Hex::new(4, 0);
        for kind in [
            TowerKind::Jet,
            TowerKind::Spread,
            TowerKind::Pulsing,
            TowerKind::Rain,
            TowerKind::Bomber,
        ] {
            let affected = affected_hexes(kind, hex, 0, 1, &grid);
            assert_eq!(affected[0], hex, "{kind:?} must target its own cell");
        }
    }

    #[test]
    fn test_jet_line_length_and_direction() {
        let grid = HexGrid::new();
        let hex = Hex::new(0, 4);
        let affected = affected_hexes(TowerKind::Jet, hex, 0, 2, &grid);
        // Own cell + 3 cells east at range level 2.
        assert_eq!(affected.len(), 4);
        assert_eq!(affected[1], Hex::new(1, 4));
        assert_eq!(affected[3], Hex::new(3, 4));
    }

    #[test]
    fn test_jet_line_clips_at_map_edge() {
        let grid = HexGrid::new();
        let edge = Hex::new(grid.radius() - 1, 0);
        let affected = affected_hexes(TowerKind::Jet, edge, 0, 4, &grid);
        // Only one in-bounds cell remains east of the tower.
        assert_eq!(affected.len(), 2);
    }

    #[test]
    fn test_spread_covers_three_distinct_rays() {
        let grid = HexGrid::new();
        let hex = Hex::new(-4, 0);
        let affected = affected_hexes(TowerKind::Spread, hex, 0, 3, &grid);
        // Own cell + three 3-cell rays, no duplicates.
        assert_eq!(affected.len(), 10);
        let mut unique = affected.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), affected.len());
    }

    #[test]
    fn test_pulsing_targets_fixed_adjacency() {
        let grid = HexGrid::new();
        let affected = affected_hexes(TowerKind::Pulsing, Hex::new(3, 1), 2, 4, &grid);
        assert_eq!(affected.len(), 7);
    }

    #[test]
    fn test_rain_disc_size() {
        let grid = HexGrid::new();
        let affected = affected_hexes(TowerKind::Rain, Hex::new(0, 5), 0, 3, &grid);
        // Radius 2 disc fully in bounds: 19 cells.
        assert_eq!(affected.len(), 19);
    }

    #[test]
    fn test_bomber_target_within_lob_range() {
        let grid = HexGrid::new();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let from = Hex::new(-3, 0);
        for _ in 0..200 {
            let target = bomber_target(&grid, &mut rng, from, 0, 4);
            let d = from.distance(target);
            assert!(d >= BOMBER_MIN_DISTANCE && d <= 8, "distance {d} out of range");
            assert!(grid.contains(target));
        }
    }

    #[test]
    fn test_bomber_target_clamps_to_map_edge() {
        let grid = HexGrid::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let edge = Hex::new(grid.radius(), 0);
        for _ in 0..50 {
            let target = bomber_target(&grid, &mut rng, edge, 0, 4);
            assert!(grid.contains(target));
        }
    }
}
