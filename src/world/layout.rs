//! Starting layouts
//!
//! Layout tables are written the way they look on screen: the first row is
//! the top of the field. Game coordinates have `y = 0` at the bottom, so row
//! `r` of a table of height `h` becomes `y = h - 1 - r`.

use thiserror::Error;

use super::grid::{Grid, HEIGHT, MAX_SIDE, WIDTH};
use super::position::Position;
use super::tile::TerrainKind;

/// The shipped level, top row first
pub const STARTING_LAYOUT: [[u8; WIDTH as usize]; HEIGHT as usize] = [
    [0, 3, 0, 3, 0, 0, 0, 4, 4, 0, 0, 4, 0, 4, 0, 4],
    [0, 4, 0, 4, 0, 0, 0, 3, 4, 4, 3, 4, 0, 3, 0, 4],
    [0, 4, 0, 4, 4, 4, 4, 0, 3, 0, 0, 0, 0, 4, 0, 4],
    [5, 4, 0, 4, 0, 0, 3, 0, 0, 4, 0, 0, 0, 4, 0, 0],
    [4, 4, 3, 4, 5, 0, 4, 0, 0, 4, 3, 4, 0, 0, 4, 4],
    [0, 0, 0, 4, 4, 4, 4, 0, 4, 0, 0, 0, 4, 3, 0, 4],
    [0, 0, 0, 3, 0, 0, 3, 0, 3, 0, 3, 0, 3, 0, 0, 4],
    [0, 0, 0, 4, 0, 0, 3, 0, 4, 0, 0, 3, 3, 0, 5, 4],
];

/// Problems with a layout table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout has no cells")]
    Empty,
    #[error("Layout row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Layout is {width}x{height}, sides may be at most {max}")]
    TooLarge { width: usize, height: usize, max: i32 },
    #[error("Unknown terrain code {code} at row {row}, column {column}")]
    UnknownCode { code: u8, row: usize, column: usize },
    #[error("Cannot read {token:?} at row {row}, column {column} as a terrain code")]
    BadToken {
        token: String,
        row: usize,
        column: usize,
    },
    #[error("Start position ({x}, {y}) is outside the field")]
    StartOutOfBounds { x: i32, y: i32 },
    #[error("Start position ({x}, {y}) is a {terrain}, not an open square")]
    StartBlocked { x: i32, y: i32, terrain: &'static str },
}

/// A validated, rectangular table of terrain kinds, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<TerrainKind>>,
}

impl Layout {
    /// Build from numeric codes, top row first
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, LayoutError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(LayoutError::Empty);
        }
        if expected > MAX_SIDE as usize || rows.len() > MAX_SIDE as usize {
            return Err(LayoutError::TooLarge {
                width: expected,
                height: rows.len(),
                max: MAX_SIDE,
            });
        }

        let mut parsed = Vec::with_capacity(rows.len());
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != expected {
                return Err(LayoutError::Ragged {
                    row,
                    expected,
                    found: codes.len(),
                });
            }
            let kinds = codes
                .iter()
                .enumerate()
                .map(|(column, &code)| {
                    TerrainKind::from_code(code)
                        .ok_or(LayoutError::UnknownCode { code, row, column })
                })
                .collect::<Result<Vec<_>, _>>()?;
            parsed.push(kinds);
        }

        Ok(Self { rows: parsed })
    }

    /// Build from whitespace-separated codes, one string per row, top row first
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let mut codes = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let parsed = line
                .as_ref()
                .split_whitespace()
                .enumerate()
                .map(|(column, token)| {
                    token.parse::<u8>().map_err(|_| LayoutError::BadToken {
                        token: token.to_string(),
                        row,
                        column,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            codes.push(parsed);
        }
        Self::from_codes(&codes)
    }

    pub fn width(&self) -> i32 {
        self.rows[0].len() as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Terrain at a game coordinate (`y = 0` is the bottom row)
    pub fn terrain_at(&self, x: i32, y: i32) -> TerrainKind {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return TerrainKind::UnbreakableWall;
        }
        self.rows[(self.height() - 1 - y) as usize][x as usize]
    }

    /// Check that the player can stand at `start`
    pub fn validate_start(&self, start: Position) -> Result<(), LayoutError> {
        if start.x < 0 || start.y < 0 || start.x >= self.width() || start.y >= self.height() {
            return Err(LayoutError::StartOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }
        let terrain = self.terrain_at(start.x, start.y);
        if !terrain.is_walkable() {
            return Err(LayoutError::StartBlocked {
                x: start.x,
                y: start.y,
                terrain: terrain.name(),
            });
        }
        Ok(())
    }

    /// Numeric codes, top row first
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(TerrainKind::code).collect())
            .collect()
    }

    /// A fresh grid with this terrain and nothing discovered
    pub fn into_grid(self) -> Grid {
        let mut grid = Grid::filled(self.width(), self.height(), TerrainKind::Empty);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set_terrain(pos.x, pos.y, self.terrain_at(pos.x, pos.y));
        }
        grid
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            rows: STARTING_LAYOUT
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&code| TerrainKind::from_code(code).unwrap_or(TerrainKind::UnbreakableWall))
                        .collect()
                })
                .collect(),
        }
    }
}

/// The shipped level as a fresh grid
pub fn starting_grid() -> Grid {
    Layout::default().into_grid()
}
