//! Tile appearance
//!
//! Maps display codes to glyphs and colours for the terminal frontend.

use ratatui::style::Color;

use super::{DisplayCode, RenderMode};

/// Glyph and colour lookup for one render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRenderer {
    pub mode: RenderMode,
}

impl TileRenderer {
    /// Create a renderer; `Auto` is resolved here
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode: mode.resolve(),
        }
    }

    pub fn glyph(&self, code: DisplayCode) -> char {
        match self.mode {
            RenderMode::Unicode => match code {
                DisplayCode::Empty => '·',
                DisplayCode::Player => '☻',
                DisplayCode::Facing => '◇',
                DisplayCode::BreakableWall => '▒',
                DisplayCode::UnbreakableWall => '█',
                DisplayCode::Diamond => '◆',
                DisplayCode::Undiscovered => ' ',
            },
            RenderMode::Ascii | RenderMode::Auto => match code {
                DisplayCode::Empty => '.',
                DisplayCode::Player => '@',
                DisplayCode::Facing => '+',
                DisplayCode::BreakableWall => '%',
                DisplayCode::UnbreakableWall => '#',
                DisplayCode::Diamond => '*',
                DisplayCode::Undiscovered => ' ',
            },
        }
    }

    pub fn fg_color(&self, code: DisplayCode) -> Color {
        let (r, g, b) = match code {
            DisplayCode::Empty => (80, 80, 80),
            DisplayCode::Player => (255, 255, 200),
            DisplayCode::Facing => (255, 200, 50),
            DisplayCode::BreakableWall => (150, 110, 70),
            DisplayCode::UnbreakableWall => (130, 130, 140),
            DisplayCode::Diamond => (100, 220, 255),
            DisplayCode::Undiscovered => (0, 0, 0),
        };
        Color::Rgb(r, g, b)
    }

    pub fn bg_color(&self, code: DisplayCode) -> Color {
        let (r, g, b) = match code {
            DisplayCode::Undiscovered => (10, 10, 12),
            DisplayCode::UnbreakableWall => (45, 45, 50),
            DisplayCode::BreakableWall => (40, 30, 20),
            DisplayCode::Facing => (50, 40, 10),
            _ => (20, 18, 15),
        };
        Color::Rgb(r, g, b)
    }
}
