//! Game module - Core game logic and state management

mod state;

pub use state::{
    BreakOutcome, GameState, MoveOutcome, WallPolicy, FACING_START, PLAYER_START,
};
