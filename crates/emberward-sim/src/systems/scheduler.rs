//! Wave scheduler: placement/active phase machine and group boundaries.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use emberward_core::components::WaterBomb;
use emberward_core::constants::{PLACEMENT_DURATION, WAVES_PER_GROUP, WAVE_DURATION};
use emberward_core::enums::WavePhase;
use emberward_core::events::SimEvent;
use emberward_core::spawn_table::FireSpawnTable;
use emberward_core::types::Hex;
use emberward_grid::{Fire, HexGrid};
use emberward_procgen::Path;

use crate::curves;
use crate::engine::IdAllocator;
use crate::systems::fire;
use crate::world_setup;

/// Wave machine state: `Placement → Active → (WaveComplete |
/// GroupComplete) → Placement`, repeating until the external layer ends
/// the session.
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Absolute wave number, 1-based. Indexes the spawn table.
    pub number: u32,
    /// Wave group, 1-based. Group boundaries regenerate the topology.
    pub group: u32,
    /// Position within the group, 1-based. Drives the difficulty curves.
    pub wave_in_group: u32,
    pub phase: WavePhase,
    /// Seconds left in the current phase.
    pub time_remaining: f64,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            number: 1,
            group: 1,
            wave_in_group: 1,
            phase: WavePhase::Placement,
            time_remaining: PLACEMENT_DURATION,
        }
    }
}

/// Advance the wave machine by one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    grid: &mut HexGrid,
    paths: &mut Vec<Path>,
    rng: &mut ChaCha8Rng,
    table: &FireSpawnTable,
    wave: &mut WaveState,
    ids: &mut IdAllocator,
    events: &mut Vec<SimEvent>,
    dt: f64,
) {
    wave.time_remaining -= dt;
    if wave.time_remaining > 0.0 {
        return;
    }

    match wave.phase {
        WavePhase::Placement => start_wave(grid, rng, table, wave, events),
        WavePhase::Active => complete_wave(world, grid, paths, rng, wave, ids, events),
    }
}

/// Placement timer elapsed: go active and ignite the starting fires.
fn start_wave(
    grid: &mut HexGrid,
    rng: &mut ChaCha8Rng,
    table: &FireSpawnTable,
    wave: &mut WaveState,
    events: &mut Vec<SimEvent>,
) {
    wave.phase = WavePhase::Active;
    wave.time_remaining = WAVE_DURATION;

    let count = curves::starting_fire_count(wave.wave_in_group) as usize;
    let eligible: Vec<Hex> = grid
        .iter()
        .filter(|c| c.accepts_fire() && !c.is_burning())
        .map(|c| c.hex)
        .collect();
    let chosen: Vec<Hex> = eligible.choose_multiple(rng, count).copied().collect();
    for hex in chosen {
        let roll = rng.gen::<f64>();
        let fire_type = table.draw(wave.number, roll);
        grid.update(hex, |c| c.fire = Some(Fire::new(fire_type)));
        events.push(SimEvent::FireIgnited { fire_type, hex });
    }

    events.push(SimEvent::WaveStarted { wave: wave.number });
    log::info!(
        "wave {} started (group {}, wave-in-group {})",
        wave.number,
        wave.group,
        wave.wave_in_group
    );
}

/// Active timer elapsed: clear transient state, advance the counters,
/// and regenerate the topology on a group boundary.
fn complete_wave(
    world: &mut World,
    grid: &mut HexGrid,
    paths: &mut Vec<Path>,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    ids: &mut IdAllocator,
    events: &mut Vec<SimEvent>,
) {
    // Transient entities die with the wave, synchronously.
    fire::clear_all(grid);
    let airborne: Vec<Entity> = world
        .query::<&WaterBomb>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    for entity in airborne {
        let _ = world.despawn(entity);
    }

    events.push(SimEvent::WaveCompleted { wave: wave.number });
    wave.number += 1;
    wave.wave_in_group += 1;

    if wave.wave_in_group > WAVES_PER_GROUP {
        events.push(SimEvent::GroupCompleted { group: wave.group });
        log::info!("group {} completed, regenerating topology", wave.group);
        wave.group += 1;
        wave.wave_in_group = 1;
        world_setup::regenerate_topology(world, grid, paths, rng, ids, wave.group);
    }

    wave.phase = WavePhase::Placement;
    wave.time_remaining = PLACEMENT_DURATION;
}
