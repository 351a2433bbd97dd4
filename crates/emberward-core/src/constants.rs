//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz) used by fixed-step callers.
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Map ---

/// Map radius in hexes. Every hex within this distance of the origin exists.
pub const MAP_RADIUS: i32 = 12;

/// Radius of the town cluster: the origin plus its first ring (7 cells).
pub const TOWN_RADIUS: i32 = 1;

/// Distance of the path departure ring from the origin (12 cells).
pub const DEPARTURE_RING_RADIUS: i32 = 2;

// --- Fire: ignition ---

/// Base spontaneous ignition chance per cell per second.
pub const IGNITION_BASE_RATE: f64 = 0.0020;

/// Linear ignition-chance growth per wave-in-group step.
pub const IGNITION_WAVE_STEP: f64 = 0.30;

// --- Fire: spread ---

/// Base spread chance per burning cell per neighbor per second.
pub const SPREAD_BASE_RATE: f64 = 0.020;

/// Base-rate growth per absolute wave.
pub const SPREAD_RATE_GROWTH_PER_WAVE: f64 = 0.015;

/// Cap on the base-rate growth curve.
pub const SPREAD_RATE_GROWTH_CAP: f64 = 2.0;

/// Uniform spread-rate growth per wave-in-group step.
pub const SPREAD_WAVE_STEP: f64 = 0.15;

/// Spread multiplier when the target is a departure-ring cell.
pub const SPREAD_MULT_TOWN_ADJACENT: f64 = 1.6;

/// Path-to-path spread, toward the town (earlier along the path).
pub const SPREAD_MULT_PATH_TOWARD_TOWN: f64 = 1.8;

/// Path-to-path spread, away from town or across paths.
pub const SPREAD_MULT_PATH_LATERAL: f64 = 1.25;

/// Off-path source spreading onto a path cell.
pub const SPREAD_MULT_PATH_ENTRY: f64 = 1.4;

/// Spread factor applied when the source cell is being sprayed.
pub const SPREAD_SPRAYED_FACTOR: f64 = 0.75;

// --- Fire spawners ---

/// Spread multiplier at ring 1 of a fire spawner.
pub const SPAWNER_PROXIMITY_MULT: f64 = 2.4;

/// Per-ring decay of the spawner proximity multiplier
/// (`SPAWNER_PROXIMITY_MULT * SPAWNER_RING_REDUCTION^(ring-1)`).
pub const SPAWNER_RING_REDUCTION: f64 = 0.6;

/// Rings around a spawner affected by the proximity multiplier.
pub const SPAWNER_PROXIMITY_RINGS: i32 = 3;

// --- Towers ---

/// Health regeneration per second while the tower's cell is not burning.
pub const TOWER_REGEN_PER_SEC: f64 = 0.25;

/// Shield hit points by shield level (levels 1–3).
pub const SHIELD_HEALTH_BY_LEVEL: [f64; 3] = [4.0, 8.0, 14.0];

/// Minimum bomber impact distance (hexes).
pub const BOMBER_MIN_DISTANCE: i32 = 2;

/// Water bomb flight speed (hexes per second).
pub const WATER_BOMB_FLIGHT_SPEED: f64 = 3.0;

/// Per-ring power multipliers for bomber detonations (ring 0 outward).
pub const BOMBER_RING_MULTIPLIERS: [f64; 4] = [1.0, 0.85, 0.70, 0.55];

// --- Hazards ---

/// Water tank hit points.
pub const TANK_HEALTH: f64 = 8.0;

/// Tank explosion blast radius (rings extinguished and chained).
pub const TANK_BLAST_RADIUS: i32 = 2;

/// Seconds between a suppression bomb triggering and detonating.
pub const SUPPRESSION_BOMB_DELAY: f64 = 2.0;

/// Suppression bomb clear radius by level (levels 1–3).
pub const SUPPRESSION_RADIUS_BY_LEVEL: [i32; 3] = [1, 2, 3];

/// Dig site hit points.
pub const DIG_SITE_HEALTH: f64 = 15.0;

/// Item hit points.
pub const ITEM_HEALTH: f64 = 6.0;

// --- Waves ---

/// Waves per wave group; group boundaries regenerate the topology.
pub const WAVES_PER_GROUP: u32 = 5;

/// Placement phase duration (seconds).
pub const PLACEMENT_DURATION: f64 = 20.0;

/// Active wave duration (seconds).
pub const WAVE_DURATION: f64 = 60.0;

/// Starting fires on the first wave of a group.
pub const STARTING_FIRES_BASE: u32 = 2;

/// Additional starting fires per wave-in-group step.
pub const STARTING_FIRES_STEP: u32 = 1;

// --- Paths ---

/// Minimum path length (cells) before early termination is allowed.
pub const PATH_MIN_LENGTH: usize = 4;

/// Weight bonus for continuing in the previous walk direction, at length 0.
pub const PATH_STRAIGHT_BIAS: f64 = 4.0;

/// Per-step decay of the straightness bonus (straighter early, windier late).
pub const PATH_STRAIGHT_DECAY: f64 = 0.85;

/// Base path count on group 1.
pub const PATH_COUNT_BASE: u32 = 2;

/// Maximum concurrent paths (the departure ring has 12 cells).
pub const PATH_COUNT_MAX: u32 = 6;

// --- Feature seeding ---

/// Dig sites seeded on group 1.
pub const DIG_SITE_COUNT_BASE: u32 = 2;

/// Items seeded per group.
pub const ITEM_COUNT: u32 = 3;

/// Minimum distance from the origin for seeded dig sites and items.
pub const FEATURE_MIN_DISTANCE: i32 = 4;
