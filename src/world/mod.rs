//! World module
//!
//! Contains the grid, tiles, starting layouts and the discovery search.

pub mod grid;
pub mod tile;
pub mod fov;
pub mod layout;
pub mod position;

pub use grid::{Grid, WIDTH, HEIGHT};
pub use tile::{Tile, TerrainKind};
pub use fov::{reveal, reveal_opened};
pub use layout::{Layout, LayoutError, starting_grid};
pub use position::{Position, Direction};
