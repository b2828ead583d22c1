//! Entities living on the grid

pub mod player;

pub use player::Player;
