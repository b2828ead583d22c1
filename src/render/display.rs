//! Display codes and the render sink the engine draws through

/// Everything a single cell can be drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayCode {
    Empty,
    Player,
    Facing,
    BreakableWall,
    UnbreakableWall,
    Diamond,
    #[default]
    Undiscovered,
}

impl DisplayCode {
    /// Numeric code shared with the layout table for the terrain kinds
    pub fn code(&self) -> u8 {
        match self {
            DisplayCode::Empty => 0,
            DisplayCode::Player => 1,
            DisplayCode::Facing => 2,
            DisplayCode::BreakableWall => 3,
            DisplayCode::UnbreakableWall => 4,
            DisplayCode::Diamond => 5,
            DisplayCode::Undiscovered => 6,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, DisplayCode::Player | DisplayCode::Facing)
    }
}

/// Receiver of per-cell draw requests.
///
/// Calls are fire-and-forget: the engine never checks for or retries a
/// failed draw.
pub trait RenderSink {
    fn render(&mut self, x: i32, y: i32, code: DisplayCode);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, x: i32, y: i32, code: DisplayCode) {
        (**self).render(x, y, code);
    }
}

/// A single recorded draw request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCall {
    pub x: i32,
    pub y: i32,
    pub code: DisplayCode,
}

/// Sink that keeps every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub calls: Vec<RenderCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The most recent code drawn at a cell
    pub fn last_at(&self, x: i32, y: i32) -> Option<DisplayCode> {
        self.calls
            .iter()
            .rev()
            .find(|c| c.x == x && c.y == y)
            .map(|c| c.code)
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, x: i32, y: i32, code: DisplayCode) {
        self.calls.push(RenderCall { x, y, code });
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _x: i32, _y: i32, _code: DisplayCode) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_tracks_last_code() {
        let mut sink = RecordingSink::new();
        sink.render(1, 2, DisplayCode::Undiscovered);
        sink.render(1, 2, DisplayCode::Diamond);
        sink.render(0, 0, DisplayCode::Player);

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.last_at(1, 2), Some(DisplayCode::Diamond));
        assert_eq!(sink.last_at(5, 5), None);
    }

    #[test]
    fn test_sink_through_mutable_reference() {
        fn draw(mut sink: impl RenderSink) {
            sink.render(0, 0, DisplayCode::Facing);
        }

        let mut sink = RecordingSink::new();
        draw(&mut sink);
        assert_eq!(sink.last_at(0, 0), Some(DisplayCode::Facing));
    }
}
