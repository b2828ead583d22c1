//! In-memory screen
//!
//! Remembers the last display code drawn at each cell so the terminal
//! frontend can repaint the whole field every frame.

use super::display::{DisplayCode, RenderSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: i32,
    height: i32,
    cells: Vec<DisplayCode>,
}

impl Screen {
    /// A blank screen; nothing has been drawn, so every cell reads as undiscovered
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![DisplayCode::Undiscovered; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Code at a cell; off-screen cells read as undiscovered
    pub fn get(&self, x: i32, y: i32) -> DisplayCode {
        self.index(x, y)
            .map_or(DisplayCode::Undiscovered, |i| self.cells[i])
    }

    pub fn count(&self, code: DisplayCode) -> usize {
        self.cells.iter().filter(|&&c| c == code).count()
    }
}

impl RenderSink for Screen {
    fn render(&mut self, x: i32, y: i32, code: DisplayCode) {
        // facing targets just past the edge are never drawn
        if let Some(i) = self.index(x, y) {
            self.cells[i] = code;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_ignores_off_screen_draws() {
        let mut screen = Screen::new(2, 2);
        screen.render(-1, 0, DisplayCode::Facing);
        screen.render(2, 0, DisplayCode::Facing);
        assert_eq!(screen.count(DisplayCode::Facing), 0);
        assert_eq!(screen.count(DisplayCode::Undiscovered), 4);

        screen.render(1, 1, DisplayCode::Player);
        assert_eq!(screen.get(1, 1), DisplayCode::Player);
        assert_eq!(screen.get(5, 5), DisplayCode::Undiscovered);
    }
}
