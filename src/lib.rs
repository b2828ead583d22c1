//! Diamond Miners - A terminal mining puzzle
//!
//! Dig through a walled mine, uncovering the caverns around you as you go
//! and hunting for diamonds.

pub mod game;
pub mod world;
pub mod entities;
pub mod ui;
pub mod render;
pub mod data;

// Re-export commonly used types
pub use data::GameConfig;
pub use game::{GameState, MoveOutcome, WallPolicy};
pub use render::{DisplayCode, RenderSink};
pub use world::{Direction, Grid, Position, TerrainKind};
