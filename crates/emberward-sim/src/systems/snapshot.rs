//! Snapshot system: builds the complete GameStateSnapshot for a tick.
//!
//! Read-only — it never modifies the world or the grid. Views are sorted
//! by id so snapshot JSON is byte-stable for a given state.

use hecs::World;

use emberward_core::components::*;
use emberward_core::enums::GamePhase;
use emberward_core::events::SimEvent;
use emberward_core::state::*;
use emberward_core::types::SimTime;
use emberward_grid::{lerp_world, HexGrid};
use emberward_procgen::Path;

use crate::systems::scheduler::WaveState;

/// Build a complete snapshot of the current simulation state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    grid: &HexGrid,
    paths: &[Path],
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    spread_buff: f64,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave: build_wave(wave, spread_buff),
        cells: build_cells(grid),
        paths: build_paths(paths),
        towers: build_towers(world),
        water_bombs: build_water_bombs(world),
        tanks: build_tanks(world),
        suppression_bombs: build_suppression_bombs(world),
        dig_sites: build_dig_sites(world),
        items: build_items(world),
        events,
    }
}

fn build_wave(wave: &WaveState, spread_buff: f64) -> WaveView {
    WaveView {
        number: wave.number,
        group: wave.group,
        wave_in_group: wave.wave_in_group,
        wave_phase: wave.phase,
        time_remaining: wave.time_remaining.max(0.0),
        spread_buff,
    }
}

/// All cells in stable coordinate order.
pub fn build_cells(grid: &HexGrid) -> Vec<CellView> {
    grid.iter()
        .map(|c| CellView {
            hex: c.hex,
            is_town: c.is_town,
            is_path: c.is_path,
            path_index: c.path_index,
            occupant: c.occupant,
            fire: c.fire.map(|f| FireView {
                fire_type: f.fire_type,
                progress: f.progress,
                max_progress: f.max_progress,
            }),
            is_being_sprayed: c.is_being_sprayed,
        })
        .collect()
}

fn build_paths(paths: &[Path]) -> Vec<PathView> {
    paths
        .iter()
        .map(|p| PathView {
            color_index: p.color_index,
            cells: p.cells.clone(),
        })
        .collect()
}

/// All towers, sorted by id.
pub fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<&Tower>()
        .iter()
        .map(|(_, t)| TowerView {
            id: t.id,
            kind: t.kind,
            hex: t.hex,
            direction: t.direction,
            range_level: t.range_level,
            power_level: t.power_level,
            health: t.health,
            max_health: t.max_health,
            shield: t.shield.map(|s| ShieldView {
                level: s.level,
                health: s.health,
            }),
            affected_hexes: t.affected_hexes.clone(),
        })
        .collect();
    towers.sort_by_key(|t| t.id);
    towers
}

/// All airborne water bombs, sorted by id, with interpolated world
/// positions for rendering.
pub fn build_water_bombs(world: &World) -> Vec<WaterBombView> {
    let mut bombs: Vec<WaterBombView> = world
        .query::<&WaterBomb>()
        .iter()
        .map(|(_, b)| WaterBombView {
            id: b.id,
            tower: b.tower,
            origin: b.origin,
            target: b.target,
            progress: b.progress,
            world_pos: lerp_world(b.origin, b.target, b.progress as f32),
        })
        .collect();
    bombs.sort_by_key(|b| b.id);
    bombs
}

fn build_tanks(world: &World) -> Vec<TankView> {
    let mut tanks: Vec<TankView> = world
        .query::<&WaterTank>()
        .iter()
        .filter(|(_, t)| t.active)
        .map(|(_, t)| TankView {
            id: t.id,
            hex: t.hex,
            health: t.health,
        })
        .collect();
    tanks.sort_by_key(|t| t.id);
    tanks
}

fn build_suppression_bombs(world: &World) -> Vec<SuppressionBombView> {
    let mut bombs: Vec<SuppressionBombView> = world
        .query::<&SuppressionBomb>()
        .iter()
        .filter(|(_, b)| !b.detonated)
        .map(|(_, b)| SuppressionBombView {
            id: b.id,
            hex: b.hex,
            level: b.level,
            triggered: b.triggered,
            countdown: b.countdown,
        })
        .collect();
    bombs.sort_by_key(|b| b.id);
    bombs
}

fn build_dig_sites(world: &World) -> Vec<DigSiteView> {
    let mut sites: Vec<DigSiteView> = world
        .query::<&DigSite>()
        .iter()
        .map(|(_, d)| DigSiteView {
            id: d.id,
            hex: d.hex,
            health: d.health,
        })
        .collect();
    sites.sort_by_key(|d| d.id);
    sites
}

fn build_items(world: &World) -> Vec<ItemView> {
    let mut items: Vec<ItemView> = world
        .query::<&Item>()
        .iter()
        .map(|(_, i)| ItemView {
            id: i.id,
            hex: i.hex,
            health: i.health,
        })
        .collect();
    items.sort_by_key(|i| i.id);
    items
}
