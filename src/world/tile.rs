//! Tile definitions
//!
//! Terrain kinds, their layout codes and their movement/visibility properties.

use serde::{Deserialize, Serialize};

use crate::render::DisplayCode;

/// A single cell of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub terrain: TerrainKind,
    /// Set once the discovery search has visited this cell
    pub discovered: bool,
}

impl Tile {
    pub fn new(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            discovered: false,
        }
    }

    /// What the player currently sees at this cell
    pub fn display(&self) -> DisplayCode {
        if self.discovered {
            self.terrain.display()
        } else {
            DisplayCode::Undiscovered
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TerrainKind::UnbreakableWall)
    }
}

/// Kinds of terrain a cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    Empty,
    Diamond,
    BreakableWall,
    UnbreakableWall,
}

impl TerrainKind {
    /// Every terrain kind, in layout-code order
    pub const ALL: [TerrainKind; 4] = [
        TerrainKind::Empty,
        TerrainKind::BreakableWall,
        TerrainKind::UnbreakableWall,
        TerrainKind::Diamond,
    ];

    /// Numeric code used in layout tables
    pub fn code(&self) -> u8 {
        match self {
            TerrainKind::Empty => 0,
            TerrainKind::BreakableWall => 3,
            TerrainKind::UnbreakableWall => 4,
            TerrainKind::Diamond => 5,
        }
    }

    /// Parse a layout-table code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Open terrain lets the discovery search continue past it
    pub fn is_open(&self) -> bool {
        matches!(self, TerrainKind::Empty | TerrainKind::Diamond)
    }

    pub fn is_wall(&self) -> bool {
        !self.is_open()
    }

    pub fn is_walkable(&self) -> bool {
        self.is_open()
    }

    pub fn is_breakable(&self) -> bool {
        matches!(self, TerrainKind::BreakableWall)
    }

    pub fn display(&self) -> DisplayCode {
        match self {
            TerrainKind::Empty => DisplayCode::Empty,
            TerrainKind::Diamond => DisplayCode::Diamond,
            TerrainKind::BreakableWall => DisplayCode::BreakableWall,
            TerrainKind::UnbreakableWall => DisplayCode::UnbreakableWall,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::Empty => "empty",
            TerrainKind::Diamond => "diamond",
            TerrainKind::BreakableWall => "breakable wall",
            TerrainKind::UnbreakableWall => "unbreakable wall",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in TerrainKind::ALL {
            assert_eq!(TerrainKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TerrainKind::from_code(1), None);
        assert_eq!(TerrainKind::from_code(6), None);
    }

    #[test]
    fn test_open_terrain() {
        assert!(TerrainKind::Empty.is_open());
        assert!(TerrainKind::Diamond.is_open());
        assert!(TerrainKind::BreakableWall.is_wall());
        assert!(TerrainKind::UnbreakableWall.is_wall());
        assert!(!TerrainKind::UnbreakableWall.is_breakable());
    }

    #[test]
    fn test_undiscovered_tile_hides_terrain() {
        let mut tile = Tile::new(TerrainKind::Diamond);
        assert_eq!(tile.display(), DisplayCode::Undiscovered);
        tile.discovered = true;
        assert_eq!(tile.display(), DisplayCode::Diamond);
    }
}
