//! Grid data structure
//!
//! The playing field: terrain per cell plus the discovery flag per cell.

use super::position::Position;
use super::tile::{TerrainKind, Tile};
use crate::render::DisplayCode;

/// Width of the shipped playing field
pub const WIDTH: i32 = 16;
/// Height of the shipped playing field
pub const HEIGHT: i32 = 8;
/// Largest side length accepted for any grid
pub const MAX_SIDE: i32 = u8::MAX as i32;

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid with every cell set to `terrain`, all undiscovered.
    /// Sides are clamped to `1..=MAX_SIDE`.
    pub fn filled(width: i32, height: i32, terrain: TerrainKind) -> Self {
        let width = width.clamp(1, MAX_SIDE);
        let height = height.clamp(1, MAX_SIDE);
        Self {
            width,
            height,
            tiles: vec![Tile::new(terrain); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn total_cells(&self) -> usize {
        self.tiles.len()
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.x, pos.y)
    }

    /// Get tile at position
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    fn get_tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// Terrain at a cell. Anything outside the field is an unbreakable wall.
    pub fn terrain_at(&self, x: i32, y: i32) -> TerrainKind {
        self.get_tile(x, y)
            .map_or(TerrainKind::UnbreakableWall, |t| t.terrain)
    }

    /// Overwrite the terrain of an in-bounds cell; used while building layouts
    pub fn set_terrain(&mut self, x: i32, y: i32, terrain: TerrainKind) {
        if let Some(tile) = self.get_tile_mut(x, y) {
            tile.terrain = terrain;
        }
    }

    /// Turn a breakable wall into an empty square.
    ///
    /// Returns `false`, leaving the grid untouched, when the cell is not a
    /// breakable wall (including out-of-bounds cells).
    pub fn break_wall(&mut self, x: i32, y: i32) -> bool {
        match self.get_tile_mut(x, y) {
            Some(tile) if tile.terrain.is_breakable() => {
                tile.terrain = TerrainKind::Empty;
                true
            }
            _ => false,
        }
    }

    pub fn is_discovered(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_some_and(|t| t.discovered)
    }

    pub(crate) fn set_discovered(&mut self, x: i32, y: i32) {
        if let Some(tile) = self.get_tile_mut(x, y) {
            tile.discovered = true;
        }
    }

    /// What the player should currently see at a cell, ignoring the player
    /// and facing markers
    pub fn display_at(&self, x: i32, y: i32) -> DisplayCode {
        self.get_tile(x, y)
            .map_or(DisplayCode::Undiscovered, Tile::display)
    }

    pub fn discovered_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.discovered).count()
    }

    /// All positions, bottom row first
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    pub fn discovered_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|p| self.is_discovered(p.x, p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_unbreakable() {
        let grid = Grid::filled(4, 3, TerrainKind::Empty);
        assert_eq!(grid.terrain_at(-1, 0), TerrainKind::UnbreakableWall);
        assert_eq!(grid.terrain_at(4, 0), TerrainKind::UnbreakableWall);
        assert_eq!(grid.terrain_at(0, 3), TerrainKind::UnbreakableWall);
        assert_eq!(grid.terrain_at(3, 2), TerrainKind::Empty);
        assert!(!grid.in_bounds(0, -1));
        assert!(grid.in_bounds(0, 0));
    }

    #[test]
    fn test_break_wall_only_breaks_breakable() {
        let mut grid = Grid::filled(3, 1, TerrainKind::Empty);
        grid.set_terrain(0, 0, TerrainKind::BreakableWall);
        grid.set_terrain(1, 0, TerrainKind::UnbreakableWall);

        assert!(grid.break_wall(0, 0));
        assert_eq!(grid.terrain_at(0, 0), TerrainKind::Empty);

        assert!(!grid.break_wall(1, 0));
        assert_eq!(grid.terrain_at(1, 0), TerrainKind::UnbreakableWall);

        assert!(!grid.break_wall(2, 0));
        assert!(!grid.break_wall(7, 7));
        assert_eq!(grid.terrain_at(2, 0), TerrainKind::Empty);
    }

    #[test]
    fn test_discovery_flags() {
        let mut grid = Grid::filled(2, 2, TerrainKind::Diamond);
        assert_eq!(grid.display_at(1, 1), DisplayCode::Undiscovered);
        grid.set_discovered(1, 1);
        grid.set_discovered(9, 9);
        assert!(grid.is_discovered(1, 1));
        assert!(!grid.is_discovered(9, 9));
        assert_eq!(grid.display_at(1, 1), DisplayCode::Diamond);
        assert_eq!(grid.discovered_count(), 1);
        assert_eq!(grid.discovered_positions().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_filled_clamps_dimensions() {
        let grid = Grid::filled(0, 1000, TerrainKind::Empty);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), MAX_SIDE);
        assert_eq!(grid.total_cells(), MAX_SIDE as usize);
    }
}
