//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate (pointy-top orientation).
///
/// The implicit cube coordinate is `s = -q - r`. `Ord` is derived so hexes
/// can key ordered maps: per-cell iteration that consumes randomness must
/// run in a stable order for same-seed determinism.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

/// The six axial direction offsets, indexed 0–5 counter-clockwise from east.
pub const HEX_DIRECTIONS: [Hex; 6] = [
    Hex { q: 1, r: 0 },  // east
    Hex { q: 1, r: -1 }, // northeast
    Hex { q: 0, r: -1 }, // northwest
    Hex { q: -1, r: 0 }, // west
    Hex { q: -1, r: 1 }, // southwest
    Hex { q: 0, r: 1 },  // southeast
];

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube coordinate.
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance: max absolute difference of cube coordinates.
    pub fn distance(&self, other: Hex) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }

    /// Neighbor in the given direction (0–5, wraps).
    pub fn neighbor(&self, direction: u8) -> Hex {
        let d = HEX_DIRECTIONS[(direction % 6) as usize];
        Hex::new(self.q + d.q, self.r + d.r)
    }

    /// All six neighbors, in direction order.
    pub fn neighbors(&self) -> [Hex; 6] {
        let mut out = [Hex::ORIGIN; 6];
        for (i, d) in HEX_DIRECTIONS.iter().enumerate() {
            out[i] = Hex::new(self.q + d.q, self.r + d.r);
        }
        out
    }

    /// Direction index of a unit step from `self` to an adjacent hex.
    /// Returns `None` if `other` is not adjacent.
    pub fn direction_to(&self, other: Hex) -> Option<u8> {
        let delta = Hex::new(other.q - self.q, other.r - self.r);
        HEX_DIRECTIONS
            .iter()
            .position(|d| *d == delta)
            .map(|i| i as u8)
    }
}

/// Unique tower identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TowerId(pub u32);

/// Unique water-tank identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TankId(pub u32);

/// Unique suppression-bomb identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BombId(pub u32);

/// Unique item identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemId(pub u32);

/// Unique dig-site identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DigSiteId(pub u32);

/// Unique water-bomb (projectile) identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WaterBombId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
