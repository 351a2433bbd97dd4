//! The hex grid: per-cell state, occupancy, and axial-coordinate math.
//!
//! All other crates read and write cells exclusively through [`HexGrid`];
//! no component caches cell references across ticks.

mod cell;
mod grid;
mod layout;

pub use cell::{Fire, HexCell};
pub use grid::HexGrid;
pub use layout::{hex_to_world, lerp_world, HEX_SIZE};
