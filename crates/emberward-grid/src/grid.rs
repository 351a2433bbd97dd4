//! HexGrid: the single shared cell store.

use std::collections::BTreeMap;

use emberward_core::constants::{DEPARTURE_RING_RADIUS, MAP_RADIUS, TOWN_RADIUS};
use emberward_core::types::Hex;

use crate::cell::HexCell;

/// All cells within `radius` of the origin, with the town cluster marked.
///
/// Storage is a `BTreeMap` so iteration order is stable: the fire systems
/// consume RNG draws per cell, and same-seed runs must visit cells in the
/// same order.
#[derive(Debug, Clone)]
pub struct HexGrid {
    cells: BTreeMap<Hex, HexCell>,
    radius: i32,
}

impl HexGrid {
    /// Build a fresh grid of the default map radius with the 7-cell town
    /// cluster marked at the origin.
    pub fn new() -> Self {
        Self::with_radius(MAP_RADIUS)
    }

    /// Build a grid of the given radius.
    pub fn with_radius(radius: i32) -> Self {
        let mut cells = BTreeMap::new();
        for hex in hexes_in_radius_unbounded(Hex::ORIGIN, radius) {
            let mut cell = HexCell::new(hex);
            cell.is_town = hex.distance(Hex::ORIGIN) <= TOWN_RADIUS;
            cells.insert(hex, cell);
        }
        Self { cells, radius }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The town cluster center.
    pub fn town_center(&self) -> Hex {
        Hex::ORIGIN
    }

    /// The 12 ring cells paths depart from.
    pub fn departure_ring(&self) -> Vec<Hex> {
        self.hexes_in_ring(Hex::ORIGIN, DEPARTURE_RING_RADIUS)
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Out-of-bounds coordinates are "cell does not exist": callers get
    /// `None` and skip.
    pub fn get(&self, hex: Hex) -> Option<&HexCell> {
        self.cells.get(&hex)
    }

    pub fn get_mut(&mut self, hex: Hex) -> Option<&mut HexCell> {
        self.cells.get_mut(&hex)
    }

    /// Apply a partial update to a cell. No-op out of bounds.
    pub fn update(&mut self, hex: Hex, f: impl FnOnce(&mut HexCell)) {
        if let Some(cell) = self.cells.get_mut(&hex) {
            f(cell);
        }
    }

    /// The six axial neighbors, whether or not they exist on the map.
    pub fn neighbors(&self, hex: Hex) -> [Hex; 6] {
        hex.neighbors()
    }

    /// Neighbors that exist on the map.
    pub fn neighbor_cells(&self, hex: Hex) -> impl Iterator<Item = &HexCell> {
        hex.neighbors()
            .into_iter()
            .filter_map(|n| self.cells.get(&n))
    }

    /// Cube-coordinate max-abs-difference metric.
    pub fn distance(&self, a: Hex, b: Hex) -> i32 {
        a.distance(b)
    }

    /// In-bounds hexes within `radius` of `center` (inclusive), in
    /// deterministic order.
    pub fn hexes_in_radius(&self, center: Hex, radius: i32) -> Vec<Hex> {
        hexes_in_radius_unbounded(center, radius)
            .into_iter()
            .filter(|h| self.cells.contains_key(h))
            .collect()
    }

    /// In-bounds hexes at exactly `radius` from `center`, walking the ring
    /// in a deterministic order. Radius 0 is the center itself.
    pub fn hexes_in_ring(&self, center: Hex, radius: i32) -> Vec<Hex> {
        hexes_in_ring_unbounded(center, radius)
            .into_iter()
            .filter(|h| self.cells.contains_key(h))
            .collect()
    }

    /// All cells, in stable coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut HexCell> {
        self.cells.values_mut()
    }

    /// Coordinates of all burning cells, in stable order.
    pub fn burning_hexes(&self) -> Vec<Hex> {
        self.cells
            .values()
            .filter(|c| c.is_burning())
            .map(|c| c.hex)
            .collect()
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Every hex within `radius` of `center`, ignoring map bounds.
fn hexes_in_radius_unbounded(center: Hex, radius: i32) -> Vec<Hex> {
    let mut out = Vec::new();
    for q in -radius..=radius {
        let r_lo = (-radius).max(-q - radius);
        let r_hi = radius.min(-q + radius);
        for r in r_lo..=r_hi {
            out.push(Hex::new(center.q + q, center.r + r));
        }
    }
    out
}

/// Every hex at exactly `radius` from `center`, ignoring map bounds.
fn hexes_in_ring_unbounded(center: Hex, radius: i32) -> Vec<Hex> {
    if radius <= 0 {
        return vec![center];
    }
    // Start at the far west corner and walk the six edges.
    let mut hex = Hex::new(center.q - radius, center.r + radius);
    let mut out = Vec::with_capacity(6 * radius as usize);
    for direction in 0..6u8 {
        for _ in 0..radius {
            out.push(hex);
            hex = hex.neighbor(direction);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use emberward_core::enums::{FireType, Occupant};
    use crate::cell::Fire;

    #[test]
    fn test_grid_cell_count() {
        // 1 + 6 + 12 + ... = 3r(r+1) + 1 cells for radius r.
        let grid = HexGrid::with_radius(3);
        assert_eq!(grid.iter().count(), 37);
    }

    #[test]
    fn test_town_cluster_is_seven_cells() {
        let grid = HexGrid::new();
        let town: Vec<_> = grid.iter().filter(|c| c.is_town).collect();
        assert_eq!(town.len(), 7);
        for cell in town {
            assert!(cell.hex.distance(Hex::ORIGIN) <= 1);
            assert!(!cell.accepts_fire());
        }
    }

    #[test]
    fn test_departure_ring_has_twelve_cells() {
        let grid = HexGrid::new();
        let ring = grid.departure_ring();
        assert_eq!(ring.len(), 12);
        for hex in ring {
            assert_eq!(hex.distance(Hex::ORIGIN), 2);
        }
    }

    #[test]
    fn test_out_of_bounds_queries_return_none() {
        let grid = HexGrid::with_radius(2);
        let outside = Hex::new(5, 0);
        assert!(grid.get(outside).is_none());
        assert!(!grid.contains(outside));
        // Partial updates out of bounds are silent no-ops.
        let mut grid = grid;
        grid.update(outside, |c| c.is_path = true);
        assert!(grid.get(outside).is_none());
    }

    #[test]
    fn test_ring_enumeration_sizes_and_distances() {
        let grid = HexGrid::with_radius(6);
        for k in 1..=4 {
            let ring = grid.hexes_in_ring(Hex::ORIGIN, k);
            assert_eq!(ring.len(), (6 * k) as usize);
            assert!(ring.iter().all(|h| h.distance(Hex::ORIGIN) == k));
        }
        assert_eq!(grid.hexes_in_ring(Hex::ORIGIN, 0), vec![Hex::ORIGIN]);
    }

    #[test]
    fn test_radius_enumeration_clips_to_map() {
        let grid = HexGrid::with_radius(3);
        // A disc around an edge cell loses its out-of-bounds half.
        let edge = Hex::new(3, 0);
        let disc = grid.hexes_in_radius(edge, 1);
        assert!(disc.len() < 7);
        assert!(disc.iter().all(|h| grid.contains(*h)));
    }

    #[test]
    fn test_spawner_cells_reject_fire() {
        let mut grid = HexGrid::with_radius(3);
        let hex = Hex::new(2, 0);
        grid.update(hex, |c| c.occupant = Occupant::FireSpawner);
        assert!(!grid.get(hex).unwrap().accepts_fire());
    }

    #[test]
    fn test_burning_hexes_tracks_fire_state() {
        let mut grid = HexGrid::with_radius(2);
        assert!(grid.burning_hexes().is_empty());
        let hex = Hex::new(2, -1);
        grid.update(hex, |c| c.fire = Some(Fire::new(FireType::Cinder)));
        assert_eq!(grid.burning_hexes(), vec![hex]);
        let cell = grid.get(hex).unwrap();
        assert!(cell.is_burning());
        assert_eq!(cell.fire_type(), Some(FireType::Cinder));
        // Fresh fires start at full health.
        let fire = cell.fire.unwrap();
        assert_eq!(fire.progress, fire.max_progress);
    }
}
