//! The wave-indexed fire-type probability table.
//!
//! The table is precomputed offline; the core only consumes it. Each row
//! holds six non-negative weights summing to 1, the chance that a fresh
//! ignition on that wave draws each tier. The builtin default reproduces
//! the offline tool's shape: each tier ramps in over a handful of waves,
//! then slowly fades as stronger tiers arrive, so the mix shifts without
//! discontinuities.

use serde::{Deserialize, Serialize};

use crate::enums::FireType;

/// Wave on which each tier first gains weight (1-based, column order).
const INTRODUCTION_WAVE: [u32; 6] = [1, 5, 11, 18, 26, 35];

/// Waves over which a tier ramps from zero to full weight.
const RAMP_WAVES: f64 = 8.0;

/// Per-wave decay applied once a tier is past its ramp.
const FADE_RATE: f64 = 0.06;

/// Waves covered by the builtin default table.
const DEFAULT_TABLE_WAVES: u32 = 60;

/// Per-wave fire-type spawn probabilities. Lookups past the last row
/// clamp to it; a table is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireSpawnTable {
    rows: Vec<[f64; 6]>,
}

impl Default for FireSpawnTable {
    fn default() -> Self {
        let rows = (1..=DEFAULT_TABLE_WAVES).map(default_row).collect();
        Self { rows }
    }
}

impl FireSpawnTable {
    /// Build a table from raw rows, normalizing each. Negative weights
    /// clamp to zero; a row with no weight degrades to all-Cinder rather
    /// than halting the simulation. An empty input yields the default
    /// table.
    pub fn from_rows(rows: Vec<[f64; 6]>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let rows = rows.into_iter().map(normalize_row).collect();
        Self { rows }
    }

    /// Spawn probabilities for an absolute wave number (1-based).
    /// Waves past the end of the table clamp to the last row.
    pub fn probabilities(&self, wave: u32) -> [f64; 6] {
        let idx = (wave.max(1) as usize - 1).min(self.rows.len() - 1);
        self.rows[idx]
    }

    /// The strongest tier with nonzero probability on this wave. Spread
    /// evolution and stoking cap here.
    pub fn max_tier(&self, wave: u32) -> FireType {
        let row = self.probabilities(wave);
        FireType::ALL
            .iter()
            .rev()
            .find(|t| row[t.index()] > 0.0)
            .copied()
            .unwrap_or(FireType::Cinder)
    }

    /// Draw a tier from the wave's distribution given a uniform roll in
    /// [0, 1).
    pub fn draw(&self, wave: u32, roll: f64) -> FireType {
        let row = self.probabilities(wave);
        let mut cumulative = 0.0;
        for t in FireType::ALL {
            cumulative += row[t.index()];
            if roll < cumulative {
                return t;
            }
        }
        // Rounding tail: the row sums to 1 within tolerance.
        self.max_tier(wave)
    }

    /// Number of rows carried by the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Raw (unnormalized) weight of one tier on one wave.
fn raw_weight(column: usize, wave: u32) -> f64 {
    let intro = INTRODUCTION_WAVE[column];
    if wave < intro {
        return 0.0;
    }
    let age = (wave - intro) as f64;
    let rise = ((age + 1.0) / RAMP_WAVES).min(1.0);
    let past_ramp = (age - RAMP_WAVES).max(0.0);
    let fade = 1.0 / (1.0 + FADE_RATE * past_ramp);
    rise * fade
}

/// One normalized row of the builtin default table.
fn default_row(wave: u32) -> [f64; 6] {
    let mut row = [0.0; 6];
    for (column, slot) in row.iter_mut().enumerate() {
        *slot = raw_weight(column, wave);
    }
    normalize_row(row)
}

fn normalize_row(mut row: [f64; 6]) -> [f64; 6] {
    for w in &mut row {
        if !w.is_finite() || *w < 0.0 {
            *w = 0.0;
        }
    }
    let total: f64 = row.iter().sum();
    if total <= 0.0 {
        let mut fallback = [0.0; 6];
        fallback[0] = 1.0;
        return fallback;
    }
    for w in &mut row {
        *w /= total;
    }
    row
}
