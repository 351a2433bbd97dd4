//! Simulation systems, run in fixed order each tick:
//! fire (ignite/spread/apply) → towers → water bombs → suppression →
//! hazards → cleanup, with the wave scheduler last.

pub mod bombs;
pub mod cleanup;
pub mod fire;
pub mod hazards;
pub mod scheduler;
pub mod snapshot;
pub mod towers;

use std::collections::BTreeMap;

use emberward_core::enums::Occupant;
use emberward_core::types::Hex;
use emberward_grid::HexGrid;

/// Apply suppression power to a cell: accumulate water for the fire and
/// dig-site bookkeeping, accumulate attack damage if the cell hosts a
/// tank or an item, and mark the cell sprayed.
///
/// Per-cell totals are summed here and applied once at the suppression
/// step, so simultaneous sources within one tick cannot double-count a
/// zero crossing.
pub(crate) fn spray(
    grid: &mut HexGrid,
    water: &mut BTreeMap<Hex, f64>,
    damage: &mut BTreeMap<Hex, f64>,
    hex: Hex,
    amount: f64,
) {
    let Some(cell) = grid.get_mut(hex) else {
        return;
    };
    cell.is_being_sprayed = true;
    *water.entry(hex).or_insert(0.0) += amount;
    if matches!(cell.occupant, Occupant::WaterTank(_) | Occupant::Item(_)) {
        *damage.entry(hex).or_insert(0.0) += amount;
    }
}
