//! Procedural topology: outward path walks and wave-group feature seeding.

mod features;
mod paths;

pub use features::{seed_cells, spawner_sites};
pub use paths::{generate_paths, Path, PathConfig};
