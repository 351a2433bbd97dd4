//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the shared hex grid,
//! processes player commands, runs all systems in fixed order, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use emberward_core::commands::PlayerCommand;
use emberward_core::components::{Shield, SuppressionBomb, Tower, WaterTank};
use emberward_core::constants::{SHIELD_HEALTH_BY_LEVEL, SUPPRESSION_BOMB_DELAY, TANK_HEALTH};
use emberward_core::enums::{GamePhase, Occupant, TowerKind, WavePhase};
use emberward_core::errors::PlacementError;
use emberward_core::events::SimEvent;
use emberward_core::profiles::tower_profile;
use emberward_core::spawn_table::FireSpawnTable;
use emberward_core::state::{CellView, GameStateSnapshot, TowerView, WaterBombView};
use emberward_core::types::{BombId, Hex, SimTime, TankId, TowerId};
use emberward_grid::HexGrid;
use emberward_procgen::Path;

use crate::systems;
use crate::systems::fire::PendingFire;
use crate::systems::scheduler::WaveState;
use crate::targeting;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// The precomputed per-wave fire-type probability table.
    pub spawn_table: FireSpawnTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            spawn_table: FireSpawnTable::default(),
        }
    }
}

/// Monotonic id counters for every entity family.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    pub next_tower: u32,
    pub next_tank: u32,
    pub next_bomb: u32,
    pub next_item: u32,
    pub next_dig_site: u32,
    pub next_water_bomb: u32,
}

/// The simulation engine. Owns the ECS world, the grid, and all sim state.
pub struct SimulationEngine {
    world: World,
    grid: HexGrid,
    paths: Vec<Path>,
    time: SimTime,
    phase: GamePhase,
    wave: WaveState,
    spawn_table: FireSpawnTable,
    time_scale: f64,
    spread_buff: f64,
    rng: ChaCha8Rng,
    ids: IdAllocator,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    pending_fires: Vec<PendingFire>,
    water_applied: BTreeMap<Hex, f64>,
    attack_damage: BTreeMap<Hex, f64>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            grid: HexGrid::new(),
            paths: Vec::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            wave: WaveState::default(),
            spawn_table: config.spawn_table,
            time_scale: config.time_scale,
            spread_buff: 1.0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ids: IdAllocator::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            pending_fires: Vec::new(),
            water_applied: BTreeMap::new(),
            attack_damage: BTreeMap::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            let dt = dt.max(0.0) * self.time_scale;
            if dt > 0.0 {
                self.run_systems(dt);
                self.time.advance(dt);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.grid,
            &self.paths,
            &self.time,
            self.phase,
            &self.wave,
            self.spread_buff,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get the current wave machine state.
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    /// Get the external spread-buff multiplier in effect.
    pub fn spread_buff(&self) -> f64 {
        self.spread_buff
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the grid.
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    // --- Read-only presentation queries ---

    /// Every cell, in stable coordinate order.
    pub fn all_hexes(&self) -> Vec<CellView> {
        systems::snapshot::build_cells(&self.grid)
    }

    /// Coordinates of every burning cell.
    pub fn burning_hexes(&self) -> Vec<Hex> {
        self.grid.burning_hexes()
    }

    /// Every tower, sorted by id.
    pub fn all_towers(&self) -> Vec<TowerView> {
        systems::snapshot::build_towers(&self.world)
    }

    /// Every airborne water bomb, sorted by id.
    pub fn all_water_bombs(&self) -> Vec<WaterBombView> {
        systems::snapshot::build_water_bombs(&self.world)
    }

    // --- Direct fallible API (the command path shares these) ---

    /// Place a tower. Fails without side effects on any occupancy
    /// violation.
    pub fn place_tower(
        &mut self,
        kind: TowerKind,
        hex: Hex,
        direction: u8,
    ) -> Result<TowerId, PlacementError> {
        self.validate_placement(hex)?;
        let direction = direction % 6;
        let id = TowerId(self.ids.next_tower);
        self.ids.next_tower += 1;

        let profile = tower_profile(kind);
        let affected = targeting::affected_hexes(kind, hex, direction, 1, &self.grid);
        self.grid.update(hex, |c| c.occupant = Occupant::Tower(id));
        self.world.spawn((Tower {
            id,
            kind,
            hex,
            direction,
            range_level: 1,
            power_level: 1,
            health: profile.max_health,
            max_health: profile.max_health,
            shield: None,
            attack_timer: 0.0,
            affected_hexes: affected,
        },));
        Ok(id)
    }

    /// Place a passive water tank.
    pub fn place_water_tank(&mut self, hex: Hex) -> Result<TankId, PlacementError> {
        self.validate_placement(hex)?;
        let id = TankId(self.ids.next_tank);
        self.ids.next_tank += 1;
        self.grid.update(hex, |c| c.occupant = Occupant::WaterTank(id));
        self.world.spawn((WaterTank {
            id,
            hex,
            health: TANK_HEALTH,
            active: true,
        },));
        Ok(id)
    }

    /// Place an armed suppression bomb. Bombs may not sit adjacent to
    /// each other.
    pub fn place_suppression_bomb(
        &mut self,
        hex: Hex,
        level: u8,
    ) -> Result<BombId, PlacementError> {
        self.validate_placement(hex)?;
        let adjacent_bomb = self
            .grid
            .neighbor_cells(hex)
            .any(|c| matches!(c.occupant, Occupant::SuppressionBomb(_)));
        if adjacent_bomb {
            return Err(PlacementError::AdjacentBomb);
        }

        let id = BombId(self.ids.next_bomb);
        self.ids.next_bomb += 1;
        self.grid
            .update(hex, |c| c.occupant = Occupant::SuppressionBomb(id));
        self.world.spawn((SuppressionBomb {
            id,
            hex,
            level: level.clamp(1, 3),
            triggered: false,
            countdown: SUPPRESSION_BOMB_DELAY,
            detonated: false,
        },));
        Ok(id)
    }

    /// Apply suppression effort to a cell. Amounts from all sources in a
    /// tick are summed before the zero-crossing check, so simultaneous
    /// application never double-counts an extinguish.
    pub fn extinguish_hex(&mut self, hex: Hex, amount: f64) {
        if amount > 0.0 && self.grid.contains(hex) {
            *self.water_applied.entry(hex).or_insert(0.0) += amount;
        }
    }

    /// Stoke the fire on a cell (external boss trigger): +1 tier capped
    /// at the wave's maximum, health refilled.
    pub fn stoke_fire(&mut self, hex: Hex) {
        let max_tier = self.spawn_table.max_tier(self.wave.number);
        systems::fire::stoke(&mut self.grid, hex, max_tier);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands are no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                self.phase = GamePhase::Running;
                self.time = SimTime::default();
                self.wave = WaveState::default();
                self.spread_buff = 1.0;
                self.events.clear();
                self.pending_fires.clear();
                self.water_applied.clear();
                self.attack_damage.clear();
                self.despawn_buffer.clear();
                world_setup::start_session(
                    &mut self.world,
                    &mut self.grid,
                    &mut self.paths,
                    &mut self.rng,
                    &mut self.ids,
                );
                log::info!("session started");
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SkipPlacement => {
                if self.phase != GamePhase::Idle && self.wave.phase == WavePhase::Placement {
                    self.wave.time_remaining = 0.0;
                }
            }
            PlayerCommand::PlaceTower {
                kind,
                hex,
                direction,
            } => {
                let _ = self.place_tower(kind, hex, direction);
            }
            PlayerCommand::PlaceWaterTank { hex } => {
                let _ = self.place_water_tank(hex);
            }
            PlayerCommand::PlaceSuppressionBomb { hex, level } => {
                let _ = self.place_suppression_bomb(hex, level);
            }
            PlayerCommand::RotateTower { tower, direction } => {
                let grid = &self.grid;
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower {
                        t.direction = direction % 6;
                        t.affected_hexes =
                            targeting::affected_hexes(t.kind, t.hex, t.direction, t.range_level, grid);
                    }
                }
            }
            PlayerCommand::UpgradeTowerRange { tower } => {
                let grid = &self.grid;
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower && t.range_level < 4 {
                        t.range_level += 1;
                        t.affected_hexes =
                            targeting::affected_hexes(t.kind, t.hex, t.direction, t.range_level, grid);
                    }
                }
            }
            PlayerCommand::UpgradeTowerPower { tower } => {
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower && t.power_level < 4 {
                        t.power_level += 1;
                    }
                }
            }
            PlayerCommand::AddShield { tower, level } => {
                let level = level.clamp(1, 3);
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower {
                        t.shield = Some(Shield {
                            level,
                            health: SHIELD_HEALTH_BY_LEVEL[(level - 1) as usize],
                        });
                    }
                }
            }
            PlayerCommand::StoreTower { tower } => {
                let mut found: Option<(hecs::Entity, Hex)> = None;
                for (entity, t) in self.world.query_mut::<&Tower>() {
                    if t.id == tower {
                        found = Some((entity, t.hex));
                    }
                }
                if let Some((entity, hex)) = found {
                    self.grid.update(hex, |c| c.occupant = Occupant::None);
                    let _ = self.world.despawn(entity);
                }
            }
            PlayerCommand::StokeFire { hex } => {
                self.stoke_fire(hex);
            }
            PlayerCommand::SetSpreadBuff { multiplier } => {
                self.spread_buff = multiplier.clamp(0.0, 10.0);
            }
        }
    }

    /// Shared occupancy validation for all placements.
    fn validate_placement(&self, hex: Hex) -> Result<(), PlacementError> {
        let cell = self.grid.get(hex).ok_or(PlacementError::OutOfBounds(hex))?;
        if cell.is_town {
            return Err(PlacementError::TownCell);
        }
        if !cell.occupant.is_none() {
            return Err(PlacementError::Occupied);
        }
        if cell.is_burning() {
            return Err(PlacementError::Burning);
        }
        Ok(())
    }

    /// Run all systems in order. Fire resolution comes strictly before
    /// tower damage application; the scheduler runs last.
    fn run_systems(&mut self, dt: f64) {
        if self.wave.phase == WavePhase::Active {
            // 1. Ignition rolls (collected, not applied).
            systems::fire::ignition(
                &self.grid,
                &mut self.rng,
                &self.spawn_table,
                &self.wave,
                &mut self.pending_fires,
                dt,
            );
            // 2. Spread rolls (collected, not applied).
            systems::fire::spread(
                &self.grid,
                &mut self.rng,
                &self.spawn_table,
                &self.wave,
                self.spread_buff,
                &mut self.pending_fires,
                dt,
            );
            // 3. Apply the tick's fires: a cell lit here cannot spread
            //    until the next tick.
            systems::fire::apply_pending(&mut self.grid, &mut self.pending_fires, &mut self.events);
            // 4. Towers: fire damage, regen, water application, launches.
            systems::towers::run(
                &mut self.world,
                &mut self.grid,
                &mut self.rng,
                &mut self.water_applied,
                &mut self.attack_damage,
                &mut self.ids,
                &mut self.events,
                &mut self.despawn_buffer,
                dt,
            );
            // 5. Water bomb flight and detonation.
            systems::bombs::run(
                &mut self.world,
                &mut self.grid,
                &mut self.water_applied,
                &mut self.attack_damage,
                &mut self.despawn_buffer,
                dt,
            );
            // 6. Summed suppression against burning cells.
            systems::fire::apply_suppression(
                &mut self.grid,
                &self.water_applied,
                &mut self.events,
            );
            // 7. Hazards: tanks, suppression bombs, dig sites, items.
            systems::hazards::run(
                &mut self.world,
                &mut self.grid,
                &self.water_applied,
                &self.attack_damage,
                &mut self.events,
                &mut self.despawn_buffer,
                dt,
            );
            // 8. Despawns + accumulator reset.
            systems::cleanup::run(
                &mut self.world,
                &mut self.despawn_buffer,
                &mut self.water_applied,
                &mut self.attack_damage,
            );
        }
        // 9. Wave machine (phase timers, group boundaries).
        systems::scheduler::run(
            &mut self.world,
            &mut self.grid,
            &mut self.paths,
            &mut self.rng,
            &self.spawn_table,
            &mut self.wave,
            &mut self.ids,
            &mut self.events,
            dt,
        );
    }

    /// Directly ignite a cell (for tests).
    #[cfg(test)]
    pub fn ignite_for_test(&mut self, hex: Hex, fire_type: emberward_core::enums::FireType) {
        self.grid
            .update(hex, |c| c.fire = Some(emberward_grid::Fire::new(fire_type)));
    }

    /// Reset a cell to bare unlit ground (for tests), so randomized
    /// feature seeding cannot collide with a test's placements.
    #[cfg(test)]
    pub fn clear_cell_for_test(&mut self, hex: Hex) {
        self.grid.update(hex, |c| {
            c.occupant = Occupant::None;
            c.fire = None;
        });
    }
}
